//! Domain resolution: MX records, falling back to A then AAAA.
//!
//! [`DomainResolver`] is the seam used by the cache and the dispatcher;
//! [`DnsResolver`] implements it on top of the system DNS configuration.

mod dns;
mod error;
mod types;

pub use dns::{DnsOptions, DnsResolver};
pub use error::ResolverError;
pub(crate) use error::panic_message;
pub use types::{DomainOutcome, ExchangeSource, MxRecord};

use std::sync::Arc;

use error::LookupError;

/// Resolves a single domain. Implementations are stateless and may block.
pub trait DomainResolver: Send + Sync {
    fn resolve(&self, domain: &str) -> Result<DomainOutcome, ResolverError>;
}

impl<R: DomainResolver + ?Sized> DomainResolver for &R {
    fn resolve(&self, domain: &str) -> Result<DomainOutcome, ResolverError> {
        (**self).resolve(domain)
    }
}

impl<R: DomainResolver + ?Sized> DomainResolver for Arc<R> {
    fn resolve(&self, domain: &str) -> Result<DomainOutcome, ResolverError> {
        (**self).resolve(domain)
    }
}

pub(crate) trait LookupHost {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupError>;
    /// Number of A records.
    fn lookup_a(&self, domain: &str) -> Result<usize, LookupError>;
    /// Number of AAAA records.
    fn lookup_aaaa(&self, domain: &str) -> Result<usize, LookupError>;
}

/// Runs the MX → A → AAAA strategy for an ASCII domain. Each query is
/// issued at most once.
pub(crate) fn resolve_with<L>(lookup: &L, ascii_domain: &str) -> DomainOutcome
where
    L: LookupHost + ?Sized,
{
    match lookup.lookup_mx(ascii_domain) {
        Ok(records) => {
            let exchanges = order_exchanges(records);
            if !exchanges.is_empty() {
                return DomainOutcome::mx(exchanges);
            }
        }
        Err(LookupError::NoRecords) => {}
        Err(LookupError::NxDomain) => return DomainOutcome::NotFound,
        Err(LookupError::Timeout) => return DomainOutcome::TimedOut,
        Err(LookupError::Failed(detail)) => return DomainOutcome::query_failed(detail),
    }

    let mut failure = None;

    match lookup.lookup_a(ascii_domain) {
        Ok(count) if count > 0 => return DomainOutcome::address(ascii_domain),
        Ok(_) => {}
        Err(err) => failure = worst(failure, err),
    }

    match lookup.lookup_aaaa(ascii_domain) {
        Ok(count) if count > 0 => return DomainOutcome::address(ascii_domain),
        Ok(_) => {}
        Err(err) => failure = worst(failure, err),
    }

    match failure {
        Some(LookupError::Timeout) => DomainOutcome::TimedOut,
        Some(LookupError::Failed(detail)) => DomainOutcome::query_failed(detail),
        _ => DomainOutcome::NotFound,
    }
}

// timeout > query error > missing records
fn worst(current: Option<LookupError>, next: LookupError) -> Option<LookupError> {
    match (current, next) {
        (Some(LookupError::Timeout), _) | (_, LookupError::Timeout) => Some(LookupError::Timeout),
        (Some(failed @ LookupError::Failed(_)), _) | (_, failed @ LookupError::Failed(_)) => {
            Some(failed)
        }
        (current, _) => current,
    }
}

/// Ascending preference, ties kept in answer order; null MX and duplicate
/// hosts dropped.
fn order_exchanges(mut records: Vec<MxRecord>) -> Vec<String> {
    records.sort_by_key(|record| record.preference);
    let mut exchanges: Vec<String> = Vec::with_capacity(records.len());
    for record in records {
        let exchange = normalize_exchange(&record.exchange);
        if !exchange.is_empty() && !exchanges.contains(&exchange) {
            exchanges.push(exchange);
        }
    }
    exchanges
}

pub(crate) fn normalize_domain(domain: &str) -> Result<String, ResolverError> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(ResolverError::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(ResolverError::idna)
}

pub(crate) fn normalize_exchange(exchange: &str) -> String {
    let trimmed = exchange.trim_end_matches('.');
    trimmed.to_ascii_lowercase()
}

#[cfg(test)]
pub(crate) mod testing;
