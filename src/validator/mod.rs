//! Syntactic checks of a single address, no I/O.

mod domain;
mod local;
mod types;

pub use types::{SyntaxResult, ValidationMode};

use domain::check_domain;
use local::{is_local_relaxed, is_local_strict};

/// Checks the structure of `address` (surrounding whitespace ignored).
///
/// Every failing rule contributes a reason; the reasons are joined into a
/// single human-readable message. On success the returned domain is the
/// ASCII, lowercased form used for DNS lookups.
pub fn check_syntax(address: &str, mode: ValidationMode) -> SyntaxResult {
    let input = address.trim();

    let mut reasons = Vec::new();

    // RFC 5321: 254 max avec @
    if input.len() > 254 {
        reasons.push(format!("total length {} > 254", input.len()));
    }

    let (local, domain) = match input.split_once('@') {
        Some((_, rest)) if rest.contains('@') => {
            reasons.push("more than one '@'".to_string());
            return SyntaxResult::invalid(&reasons);
        }
        Some(parts) => parts,
        None => {
            reasons.push("missing '@'".to_string());
            return SyntaxResult::invalid(&reasons);
        }
    };

    if local.is_empty() || local.len() > 64 {
        reasons.push(format!(
            "local part length {} invalid (1..=64)",
            local.len()
        ));
    }

    let ascii_domain = check_domain(domain, &mut reasons);

    let local_ok = match mode {
        ValidationMode::Strict => is_local_strict(local),
        ValidationMode::Relaxed => is_local_relaxed(local),
    };
    if !local.is_empty() && !local_ok {
        reasons.push(match mode {
            ValidationMode::Strict => "invalid local part (strict rules)".into(),
            ValidationMode::Relaxed => "invalid local part (relaxed rules)".into(),
        });
    }

    match ascii_domain {
        Some(domain) if reasons.is_empty() => SyntaxResult::valid(domain),
        _ => SyntaxResult::invalid(&reasons),
    }
}
