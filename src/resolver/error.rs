use std::any::Any;

use thiserror::Error;

/// Unexpected failures of a resolver. DNS answers such as NXDOMAIN or a
/// timeout are not errors, they are reported through
/// [`DomainOutcome`](super::DomainOutcome).
#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("domain is empty")]
    EmptyDomain,
    #[error("domain IDNA conversion failed")]
    IdnaConversion {
        #[source]
        source: idna::Errors,
    },
    #[error("resolver initialization failed: {source}")]
    ResolverInit {
        #[source]
        source: std::io::Error,
    },
    /// The resolver panicked; the message is the panic payload.
    #[error("resolver panicked: {message}")]
    Panicked { message: String },
}

impl ResolverError {
    pub(crate) fn idna(source: idna::Errors) -> Self {
        Self::IdnaConversion { source }
    }

    pub(crate) fn resolver_init(source: std::io::Error) -> Self {
        Self::ResolverInit { source }
    }

    pub(crate) fn panicked(payload: &(dyn Any + Send)) -> Self {
        Self::Panicked {
            message: panic_message(payload).to_string(),
        }
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

/// Classified failure of a single DNS query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LookupError {
    /// The name exists but has no record of the requested type.
    NoRecords,
    NxDomain,
    Timeout,
    Failed(String),
}
