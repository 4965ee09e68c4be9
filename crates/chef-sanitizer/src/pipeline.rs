//! Sanitizer pipeline: runs every rule once, in order.

use crate::rules::{Rule, RULES};

/// Output of a sanitizer run.
#[derive(Debug, Clone)]
pub struct SanitizeReport {
    pub output: String,
    pub original_len: usize,
    /// Names of the rules that changed the text.
    pub rules_applied: Vec<&'static str>,
}

impl SanitizeReport {
    pub fn changed(&self) -> bool {
        !self.rules_applied.is_empty() || self.output.len() != self.original_len
    }
}

/// Ordered rule chain.
#[derive(Debug, Clone, Copy)]
pub struct Sanitizer {
    rules: &'static [Rule],
}

impl Sanitizer {
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    /// Run every rule over `text`, then trim surrounding whitespace.
    pub fn run(&self, text: &str) -> SanitizeReport {
        let mut result = text.to_string();
        let mut applied = Vec::new();

        for rule in self.rules {
            let next = (rule.apply)(&result);
            if next != result {
                applied.push(rule.name);
                result = next;
            }
        }

        let output = result.trim().to_string();
        tracing::trace!(rules = ?applied, before = text.len(), after = output.len(), "sanitized text");

        SanitizeReport {
            output,
            original_len: text.len(),
            rules_applied: applied,
        }
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip markup from `text` with the default rule chain.
pub fn sanitize(text: &str) -> String {
    Sanitizer::new().run(text).output
}
