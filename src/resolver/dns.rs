use std::time::Duration;

use trust_dns_resolver::{
    Resolver,
    config::{ResolverConfig, ResolverOpts},
    error::{ResolveError, ResolveErrorKind},
    proto::{error::ProtoErrorKind, op::ResponseCode},
    system_conf::read_system_conf,
};

use super::error::LookupError;
use super::{DomainOutcome, DomainResolver, LookupHost, MxRecord, ResolverError};
use super::{normalize_domain, resolve_with};

/// Tuning of the system-backed resolver.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsOptions {
    /// Per-query timeout in milliseconds; 0 keeps the system default.
    pub timeout_ms: u64,
}

impl Default for DnsOptions {
    fn default() -> Self {
        Self { timeout_ms: 3_000 }
    }
}

impl DnsOptions {
    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.timeout_ms))
        }
    }
}

/// [`DomainResolver`] backed by the system DNS configuration.
///
/// The configuration is read once. Each resolution builds its own
/// synchronous `Resolver`: the sync resolver drives queries on a runtime
/// behind a mutex, so a shared instance would serialize the workers.
#[derive(Debug, Clone)]
pub struct DnsResolver {
    config: ResolverConfig,
    opts: ResolverOpts,
}

impl DnsResolver {
    pub fn from_system_conf(options: &DnsOptions) -> Result<Self, ResolverError> {
        let (config, opts) =
            read_system_conf().map_err(|err| ResolverError::resolver_init(err.into()))?;
        Ok(Self::with_config(config, opts, options))
    }

    pub fn with_config(config: ResolverConfig, mut opts: ResolverOpts, options: &DnsOptions) -> Self {
        if let Some(timeout) = options.timeout() {
            opts.timeout = timeout;
        }
        Self { config, opts }
    }

    fn build(&self) -> Result<Resolver, ResolverError> {
        Resolver::new(self.config.clone(), self.opts.clone()).map_err(ResolverError::resolver_init)
    }
}

impl DomainResolver for DnsResolver {
    fn resolve(&self, domain: &str) -> Result<DomainOutcome, ResolverError> {
        let ascii = normalize_domain(domain)?;
        let resolver = self.build()?;
        Ok(resolve_with(&resolver, &ascii))
    }
}

impl LookupHost for Resolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupError> {
        let lookup = Resolver::mx_lookup(self, fqdn(domain)).map_err(classify)?;
        Ok(lookup
            .iter()
            .map(|mx| MxRecord::new(mx.preference(), mx.exchange().to_utf8()))
            .collect())
    }

    fn lookup_a(&self, domain: &str) -> Result<usize, LookupError> {
        let lookup = Resolver::ipv4_lookup(self, fqdn(domain)).map_err(classify)?;
        Ok(lookup.iter().count())
    }

    fn lookup_aaaa(&self, domain: &str) -> Result<usize, LookupError> {
        let lookup = Resolver::ipv6_lookup(self, fqdn(domain)).map_err(classify)?;
        Ok(lookup.iter().count())
    }
}

// absolute name: the search list must not be applied
fn fqdn(domain: &str) -> String {
    format!("{}.", domain.trim_end_matches('.'))
}

fn classify(err: ResolveError) -> LookupError {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NXDomain =>
        {
            LookupError::NxDomain
        }
        ResolveErrorKind::NoRecordsFound { .. } => LookupError::NoRecords,
        ResolveErrorKind::Timeout => LookupError::Timeout,
        ResolveErrorKind::Proto(proto) if matches!(proto.kind(), ProtoErrorKind::Timeout) => {
            LookupError::Timeout
        }
        _ => LookupError::Failed(err.to_string()),
    }
}
