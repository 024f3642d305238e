#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

/// Where the exchanges of a resolved domain come from.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeSource {
    /// Advertised MX hosts.
    Mx,
    /// No MX, but the domain itself has an A or AAAA record.
    Address,
}

/// Result of resolving one domain. Built once per domain and shared
/// read-only afterwards.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainOutcome {
    Resolved {
        exchanges: Vec<String>,
        source: ExchangeSource,
    },
    /// NXDOMAIN, or neither MX nor A/AAAA records.
    NotFound,
    TimedOut,
    /// Server failure or transport error.
    QueryFailed { detail: String },
}

impl DomainOutcome {
    pub fn mx<I, S>(exchanges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Resolved {
            exchanges: exchanges.into_iter().map(Into::into).collect(),
            source: ExchangeSource::Mx,
        }
    }

    /// Implicit MX: the domain is its own exchange.
    pub fn address(domain: &str) -> Self {
        Self::Resolved {
            exchanges: vec![domain.to_string()],
            source: ExchangeSource::Address,
        }
    }

    pub fn query_failed(detail: impl Into<String>) -> Self {
        Self::QueryFailed {
            detail: detail.into(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    pub fn exchanges(&self) -> &[String] {
        match self {
            Self::Resolved { exchanges, .. } => exchanges.as_slice(),
            _ => &[],
        }
    }

    /// Human-readable failure reason, `None` when resolved.
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Resolved { .. } => None,
            Self::NotFound => Some("domain not found".to_string()),
            Self::TimedOut => Some("DNS query timeout".to_string()),
            Self::QueryFailed { detail } => Some(format!("DNS query error: {detail}")),
        }
    }
}
