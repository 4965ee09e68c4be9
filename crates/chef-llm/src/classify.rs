//! Upstream failure classification.
//!
//! The upstream error shape is not stable, so classification is a substring
//! match over the rendered message.

/// How an upstream failure is presented to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    /// Quota or rate limit hit.
    Quota,
    /// Anything else.
    Generic,
}

/// Classify an upstream failure by its message.
///
/// `RESOURCE_EXHAUSTED` and `429` match case-sensitively, `quota` in any case.
pub fn classify_error(message: &str) -> UpstreamErrorKind {
    if message.contains("RESOURCE_EXHAUSTED")
        || message.contains("429")
        || message.to_lowercase().contains("quota")
    {
        UpstreamErrorKind::Quota
    } else {
        UpstreamErrorKind::Generic
    }
}
