//! Per-run cache guaranteeing at most one resolution per domain.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use tracing::{debug, error, warn};

use crate::resolver::{DomainOutcome, DomainResolver, ResolverError};

/// Cached answer for a domain. Resolver errors are cached as well.
pub type Resolution = Result<Arc<DomainOutcome>, Arc<ResolverError>>;

type Slot = Arc<OnceLock<Resolution>>;

/// Maps domains to their [`Resolution`].
///
/// The first caller for a domain runs the resolver; callers arriving while
/// that resolution is in flight block on the same slot, and every later
/// caller reads the stored value. Entries are never removed or replaced.
pub struct DomainCache<R> {
    resolver: R,
    slots: DashMap<String, Slot>,
    lookups: AtomicUsize,
    hits: AtomicUsize,
}

impl<R: DomainResolver> DomainCache<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            slots: DashMap::new(),
            lookups: AtomicUsize::new(0),
            hits: AtomicUsize::new(0),
        }
    }

    pub fn resolve_domain(&self, domain: &str) -> Resolution {
        let slot = self.slot(domain);

        let mut ran = false;
        let resolution = slot
            .get_or_init(|| {
                ran = true;
                self.resolve_uncached(domain)
            })
            .clone();
        if !ran {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        resolution
    }

    /// Runs the resolver once. A panic is stored like any other error.
    fn resolve_uncached(&self, domain: &str) -> Resolution {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        debug!(domain, "resolving domain");
        match panic::catch_unwind(AssertUnwindSafe(|| self.resolver.resolve(domain))) {
            Ok(Ok(outcome)) => {
                debug!(domain, ?outcome, "domain resolved");
                Ok(Arc::new(outcome))
            }
            Ok(Err(err)) => {
                warn!(domain, error = %err, "resolver failed");
                Err(Arc::new(err))
            }
            Err(payload) => {
                let err = ResolverError::panicked(payload.as_ref());
                error!(domain, error = %err, "resolver panicked");
                Err(Arc::new(err))
            }
        }
    }

    /// The shard guard is released before the slot is initialized.
    fn slot(&self, domain: &str) -> Slot {
        Arc::clone(&self.slots.entry(domain.to_owned()).or_default())
    }

    /// Number of distinct domains seen so far.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of resolver invocations.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Calls answered from an already populated entry.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}
