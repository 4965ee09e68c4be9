use crate::*;
use crate::rules;

// ========== Individual Rules ==========

#[test]
fn test_unwrap_bold() {
    assert_eq!(rules::unwrap_bold("**Hi** there"), "Hi there");
    assert_eq!(rules::unwrap_bold("a __strong__ word"), "a strong word");
}

#[test]
fn test_unwrap_bold_does_not_span_lines() {
    assert_eq!(rules::unwrap_bold("**open\nclose**"), "**open\nclose**");
}

#[test]
fn test_unwrap_italic() {
    assert_eq!(rules::unwrap_italic("*gently* fold"), "gently fold");
    assert_eq!(rules::unwrap_italic("_al dente_ pasta"), "al dente pasta");
}

#[test]
fn test_strip_bullets() {
    assert_eq!(rules::strip_bullets("- salt\n- pepper"), "salt\npepper");
    assert_eq!(rules::strip_bullets("* flour"), "flour");
    assert_eq!(rules::strip_bullets("• butter\n• sugar"), "butter\nsugar");
}

#[test]
fn test_strip_bullets_only_at_line_start() {
    assert_eq!(rules::strip_bullets("mix - then rest"), "mix - then rest");
}

#[test]
fn test_strip_bullets_marker_kinds_in_sequence() {
    assert_eq!(rules::strip_bullets("* - x"), "x");
    assert_eq!(rules::strip_bullets("- * x"), "* x");
}

#[test]
fn test_strip_numbered() {
    assert_eq!(rules::strip_numbered("1. Boil water\n2. Add pasta"), "Boil water\nAdd pasta");
    assert_eq!(rules::strip_numbered("12. Serve"), "Serve");
}

#[test]
fn test_strip_numbered_keeps_decimals() {
    assert_eq!(rules::strip_numbered("2.5 cups of stock"), "2.5 cups of stock");
}

#[test]
fn test_remove_code_blocks() {
    assert_eq!(rules::remove_code_blocks("```x=1```"), "");
    assert_eq!(
        rules::remove_code_blocks("Before\n```rust\nfn main() {}\n```\nAfter"),
        "Before\n\nAfter"
    );
}

#[test]
fn test_unwrap_inline_code() {
    assert_eq!(rules::unwrap_inline_code("`code`"), "code");
    assert_eq!(rules::unwrap_inline_code("set the oven to `180C`"), "set the oven to 180C");
}

#[test]
fn test_strip_headers() {
    assert_eq!(rules::strip_headers("## Ingredients\nFlour"), "Ingredients\nFlour");
    assert_eq!(rules::strip_headers("###### Tiny"), "Tiny");
}

#[test]
fn test_strip_headers_seven_hashes_untouched() {
    assert_eq!(rules::strip_headers("####### seven"), "####### seven");
}

#[test]
fn test_collapse_blank_lines() {
    assert_eq!(rules::collapse_blank_lines("a\n\n\n\nb"), "a\n\nb");
    assert_eq!(rules::collapse_blank_lines("a\n\nb"), "a\n\nb");
}

// ========== Pipeline ==========

#[test]
fn test_sanitize_examples() {
    assert_eq!(sanitize("**Hi** there"), "Hi there");
    assert_eq!(sanitize("- step one\n- step two"), "step one\nstep two");
    assert_eq!(sanitize("`code`"), "code");
    assert_eq!(sanitize("```x=1```"), "");
}

#[test]
fn test_sanitize_empty() {
    assert_eq!(sanitize(""), "");
    assert_eq!(sanitize("   \n\n  "), "");
}

#[test]
fn test_sanitize_trims() {
    assert_eq!(sanitize("  hello \n"), "hello");
}

#[test]
fn test_header_inside_code_block_removed_with_block() {
    let input = "```\n# not a header\n```\n# Title";
    assert_eq!(sanitize(input), "Title");
}

#[test]
fn test_sanitize_recipe() {
    let input = "## Pasta Carbonara\n\n**Ingredients:**\n- 200g *spaghetti*\n- 2 eggs\n\n\n\n1. Boil the pasta.\n2. Mix with `pecorino`.";
    let expected = "Pasta Carbonara\n\nIngredients:\n200g spaghetti\n2 eggs\n\nBoil the pasta.\nMix with pecorino.";
    assert_eq!(sanitize(input), expected);
}

#[test]
fn test_underscore_words_are_unwrapped() {
    // Best-effort matching: paired underscores inside words count as italics.
    assert_eq!(sanitize("use snake_case_name"), "use snakecasename");
}

#[test]
fn test_idempotent_on_plain_text() {
    let inputs = [
        "Just plain text.",
        "First paragraph.\n\nSecond paragraph.",
        "Preheat the oven to 200 degrees.\nBake for 20 minutes.",
    ];
    for input in inputs {
        let once = sanitize(input);
        assert_eq!(once, input);
        assert_eq!(sanitize(&once), once);
    }
}

#[test]
fn test_idempotent_after_cleanup() {
    let once = sanitize("# Soup\n\n- **Leeks**\n- Potatoes");
    assert_eq!(sanitize(&once), once);
}

// ========== Report ==========

#[test]
fn test_report_rules_applied() {
    let report = Sanitizer::new().run("# Title\n- item");
    assert_eq!(report.output, "Title\nitem");
    assert_eq!(report.rules_applied, vec!["bullets", "headers"]);
    assert!(report.changed());
}

#[test]
fn test_report_unchanged() {
    let report = Sanitizer::new().run("nothing to do");
    assert!(report.rules_applied.is_empty());
    assert!(!report.changed());
    assert_eq!(report.original_len, "nothing to do".len());
}

#[test]
fn test_report_trim_only_counts_as_changed() {
    let report = Sanitizer::new().run("  padded  ");
    assert!(report.rules_applied.is_empty());
    assert!(report.changed());
}

#[test]
fn test_rule_order() {
    let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec!["bold", "italic", "bullets", "numbered", "code_blocks", "inline_code", "headers", "blank_lines"]
    );
}
