//! Prompt assembly: system instruction, prior turns, then the new message.

use crate::session::Turn;
use std::fmt::Write;

/// Fixed instruction restricting the model to cooking topics. It starts and
/// ends with a newline.
pub const SYSTEM_PROMPT: &str = "
You are ChefBot, an expert cooking assistant with extensive culinary knowledge.

Your expertise includes:
- Recipe recommendations and instructions
- Cooking techniques and methods
- Ingredient substitutions and alternatives
- Kitchen equipment and tools
- Flavor profiles and food pairings
- Cuisines from around the world
- Dietary restrictions and modifications
- Food storage and preservation
- Meal planning and preparation tips

Guidelines:
1. Only answer questions related to cooking, food, recipes, ingredients, and culinary topics
2. If asked about non-food topics, politely decline with: \"Sorry — I can only help with cooking and food. How can I help with a recipe or ingredient?\"
3. Be friendly, helpful, and enthusiastic about cooking
4. Provide clear, step-by-step instructions when explaining recipes
5. Offer helpful tips and tricks when appropriate
6. If you don't know something food-related, be honest and suggest alternatives
7. Remember the conversation history and refer back to previous messages when relevant

Remember: You are a cooking expert, not a general-purpose assistant.
";

/// Cue the model continues from.
pub const BOT_CUE: &str = "ChefBot:";

/// Build the full prompt for one request.
///
/// Every retained turn is included; there is no token budgeting beyond the
/// store's turn cap.
pub fn build_prompt(history: &[Turn], user_message: &str) -> String {
    let mut prompt = String::with_capacity(SYSTEM_PROMPT.len() + user_message.len() + 64);
    prompt.push_str(SYSTEM_PROMPT);
    prompt.push_str("\n\n");

    if !history.is_empty() {
        prompt.push_str("Previous conversation:\n");
        for turn in history {
            // Writing into a String cannot fail.
            let _ = writeln!(prompt, "{turn}");
        }
        prompt.push('\n');
    }

    let _ = write!(prompt, "User: {user_message}\n\n{BOT_CUE}");
    prompt
}
