//! Markdown sanitizer: turns model output into plain text.
//!
//! Rules, applied in order:
//! 1. Bold (`**x**`, `__x__`)
//! 2. Italic (`*x*`, `_x_`)
//! 3. Bullet markers at line start
//! 4. Numbered-list markers at line start
//! 5. Fenced code blocks (removed with their content)
//! 6. Inline code spans
//! 7. Header markers at line start
//! 8. Runs of 3+ newlines

pub mod pipeline;
pub mod rules;

pub use pipeline::{sanitize, SanitizeReport, Sanitizer};
pub use rules::{Rule, RULES};

#[cfg(test)]
mod tests;
