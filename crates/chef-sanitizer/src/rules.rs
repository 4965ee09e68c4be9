//! Individual cleanup rules. Each one is a pure `&str -> String` pass.

use regex::Regex;
use std::sync::LazyLock;

static RE_BOLD_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static RE_BOLD_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());
static RE_ITALIC_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static RE_ITALIC_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());
static RE_BULLET_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\*\s+").unwrap());
static RE_BULLET_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^-\s+").unwrap());
static RE_BULLET_DOT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^•\s+").unwrap());
static RE_NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\d+\.\s+").unwrap());
static RE_CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static RE_INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());
static RE_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+").unwrap());
static RE_MULTI_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// A named cleanup pass.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

/// Cleanup passes in application order. The order matters: bullets are
/// stripped after italics are unwrapped, headers after code blocks are removed.
pub const RULES: &[Rule] = &[
    Rule { name: "bold", apply: unwrap_bold },
    Rule { name: "italic", apply: unwrap_italic },
    Rule { name: "bullets", apply: strip_bullets },
    Rule { name: "numbered", apply: strip_numbered },
    Rule { name: "code_blocks", apply: remove_code_blocks },
    Rule { name: "inline_code", apply: unwrap_inline_code },
    Rule { name: "headers", apply: strip_headers },
    Rule { name: "blank_lines", apply: collapse_blank_lines },
];

/// `**x**` and `__x__` → `x`.
pub fn unwrap_bold(text: &str) -> String {
    let result = RE_BOLD_STAR.replace_all(text, "$1");
    RE_BOLD_UNDERSCORE.replace_all(&result, "$1").into_owned()
}

/// `*x*` and `_x_` → `x`.
pub fn unwrap_italic(text: &str) -> String {
    let result = RE_ITALIC_STAR.replace_all(text, "$1");
    RE_ITALIC_UNDERSCORE.replace_all(&result, "$1").into_owned()
}

/// Drop `*`, `-` or `•` list markers at the start of a line, one marker
/// kind after another.
pub fn strip_bullets(text: &str) -> String {
    let result = RE_BULLET_STAR.replace_all(text, "");
    let result = RE_BULLET_DASH.replace_all(&result, "");
    RE_BULLET_DOT.replace_all(&result, "").into_owned()
}

/// Drop `1.` style list markers at the start of a line.
pub fn strip_numbered(text: &str) -> String {
    RE_NUMBERED.replace_all(text, "").into_owned()
}

/// Remove fenced code blocks, content included.
pub fn remove_code_blocks(text: &str) -> String {
    RE_CODE_BLOCK.replace_all(text, "").into_owned()
}

/// `` `x` `` → `x`.
pub fn unwrap_inline_code(text: &str) -> String {
    RE_INLINE_CODE.replace_all(text, "$1").into_owned()
}

/// Drop `#` through `######` header markers at the start of a line.
pub fn strip_headers(text: &str) -> String {
    RE_HEADER.replace_all(text, "").into_owned()
}

/// Collapse 3+ consecutive newlines to exactly 2.
pub fn collapse_blank_lines(text: &str) -> String {
    RE_MULTI_NEWLINE.replace_all(text, "\n\n").into_owned()
}
