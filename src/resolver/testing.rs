use std::collections::HashMap;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use super::{DomainOutcome, DomainResolver, ResolverError};

enum Scripted {
    Outcome(DomainOutcome),
    Error,
    Panic,
}

/// Deterministic resolver counting its invocations per domain.
/// Unknown domains resolve to [`DomainOutcome::NotFound`].
pub(crate) struct StubResolver {
    scripted: HashMap<String, Scripted>,
    calls: Mutex<HashMap<String, usize>>,
    delay: Duration,
}

impl StubResolver {
    pub(crate) fn new() -> Self {
        Self {
            scripted: HashMap::new(),
            calls: Mutex::new(HashMap::new()),
            delay: Duration::ZERO,
        }
    }

    pub(crate) fn with_mx(self, domain: &str, exchanges: &[&str]) -> Self {
        self.with_outcome(domain, DomainOutcome::mx(exchanges.iter().copied()))
    }

    pub(crate) fn with_outcome(mut self, domain: &str, outcome: DomainOutcome) -> Self {
        self.scripted
            .insert(domain.to_string(), Scripted::Outcome(outcome));
        self
    }

    pub(crate) fn failing(mut self, domain: &str) -> Self {
        self.scripted.insert(domain.to_string(), Scripted::Error);
        self
    }

    pub(crate) fn panicking(mut self, domain: &str) -> Self {
        self.scripted.insert(domain.to_string(), Scripted::Panic);
        self
    }

    /// Makes every resolution sleep, widening the window for concurrent callers.
    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn calls(&self, domain: &str) -> usize {
        self.calls.lock().unwrap().get(domain).copied().unwrap_or(0)
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

impl DomainResolver for StubResolver {
    fn resolve(&self, domain: &str) -> Result<DomainOutcome, ResolverError> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(domain.to_string())
            .or_insert(0) += 1;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        match self.scripted.get(domain) {
            Some(Scripted::Outcome(outcome)) => Ok(outcome.clone()),
            Some(Scripted::Error) => Err(ResolverError::EmptyDomain),
            Some(Scripted::Panic) => panic!("resolver blew up on {domain}"),
            None => Ok(DomainOutcome::NotFound),
        }
    }
}
