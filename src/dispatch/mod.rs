//! Fan-out of a batch of addresses over a fixed pool of worker threads.

mod options;

pub use options::DispatchOptions;

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use tracing::{debug, error, info};

use crate::cache::DomainCache;
use crate::record::ResultRecord;
use crate::resolver::{DomainResolver, ResolverError, panic_message};
use crate::validator::check_syntax;

/// Owns the per-run [`DomainCache`] and hands it to its workers by reference.
pub struct Dispatcher<R> {
    cache: DomainCache<R>,
    options: DispatchOptions,
}

impl<R: DomainResolver> Dispatcher<R> {
    pub fn new(resolver: R, options: DispatchOptions) -> Self {
        Self {
            cache: DomainCache::new(resolver),
            options,
        }
    }

    pub fn options(&self) -> &DispatchOptions {
        &self.options
    }

    pub fn cache(&self) -> &DomainCache<R> {
        &self.cache
    }

    /// Checks every address and returns one record per address, in input
    /// order. Returns once all workers have finished.
    pub fn run<S>(&self, addresses: &[S]) -> Vec<ResultRecord>
    where
        S: AsRef<str> + Sync,
    {
        if addresses.is_empty() {
            return Vec::new();
        }

        let workers = self.options.effective_workers(addresses.len());
        info!(addresses = addresses.len(), workers, "dispatching batch");

        let next = AtomicUsize::new(0);
        let (tx, rx) = mpsc::channel();

        thread::scope(|scope| {
            for _ in 0..workers {
                let tx = tx.clone();
                let next = &next;
                scope.spawn(move || {
                    loop {
                        let index = next.fetch_add(1, Ordering::Relaxed);
                        let Some(address) = addresses.get(index) else {
                            break;
                        };
                        let record = self.check_guarded(address.as_ref());
                        if tx.send((index, record)).is_err() {
                            break;
                        }
                    }
                });
            }
        });
        drop(tx);

        let mut slots: Vec<Option<ResultRecord>> = vec![None; addresses.len()];
        for (index, record) in rx {
            slots[index] = Some(record);
        }

        info!(
            domains = self.cache.len(),
            lookups = self.cache.lookups(),
            cache_hits = self.cache.hits(),
            "batch finished"
        );

        slots
            .into_iter()
            .zip(addresses)
            .map(|(slot, address)| {
                slot.unwrap_or_else(|| {
                    ResultRecord::invalid(address.as_ref().trim(), "internal error: no result")
                })
            })
            .collect()
    }

    /// Syntax check, then domain resolution through the cache.
    pub fn check_address(&self, address: &str) -> ResultRecord {
        let email = address.trim();
        let syntax = check_syntax(email, self.options.validation_mode);

        let domain = match (syntax.is_valid, syntax.domain) {
            (true, Some(domain)) => domain,
            _ => {
                let reason = syntax
                    .reason
                    .unwrap_or_else(|| "invalid syntax".to_string());
                debug!(email, %reason, "syntax rejected");
                return ResultRecord::invalid(email, reason);
            }
        };

        let record = match self.cache.resolve_domain(&domain) {
            Ok(outcome) => match outcome.reason() {
                None => ResultRecord::valid(email, outcome.exchanges().join(", ")),
                Some(reason) => ResultRecord::invalid(email, reason),
            },
            Err(err) => match err.as_ref() {
                ResolverError::Panicked { message } => {
                    ResultRecord::invalid(email, format!("internal error: {message}"))
                }
                err => ResultRecord::invalid(email, format!("resolver error: {err}")),
            },
        };
        debug!(email, status = %record.status, "address checked");
        record
    }

    fn check_guarded(&self, address: &str) -> ResultRecord {
        match panic::catch_unwind(AssertUnwindSafe(|| self.check_address(address))) {
            Ok(record) => record,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!(address, %message, "address check panicked");
                ResultRecord::invalid(address.trim(), format!("internal error: {message}"))
            }
        }
    }
}
