#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    #[default]
    Strict,
    Relaxed,
}

/// Outcome of a purely syntactic check of one address.
///
/// `domain` is only set when `is_valid` is true and holds the ASCII
/// (IDNA-converted) lowercase domain. `reason` is only set on failure.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxResult {
    pub is_valid: bool,
    pub domain: Option<String>,
    pub reason: Option<String>,
}

impl SyntaxResult {
    pub(crate) fn valid(domain: String) -> Self {
        Self {
            is_valid: true,
            domain: Some(domain),
            reason: None,
        }
    }

    pub(crate) fn invalid(reasons: &[String]) -> Self {
        Self {
            is_valid: false,
            domain: None,
            reason: Some(format!("invalid syntax: {}", reasons.join("; "))),
        }
    }
}
