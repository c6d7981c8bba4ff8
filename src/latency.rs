//! Simulated network latency with per-key memoization.
//!
//! The first request for a key waits a random delay bounded by the
//! configured maximum; repeats of the same key return immediately until the
//! cache is reset. Share one simulator per session through an `Arc`.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rand::Rng;
use tracing::trace;

use crate::config::LatencyConfig;

/// Memoizing artificial-delay helper
#[derive(Debug)]
pub struct LatencySimulator {
    max_delay: Duration,
    seen: Mutex<HashSet<String>>,
}

impl LatencySimulator {
    /// Simulator whose delays are drawn uniformly from `0..=max_delay`
    #[must_use]
    pub fn new(max_delay: Duration) -> Self {
        Self {
            max_delay,
            seen: Mutex::new(HashSet::new()),
        }
    }

    /// Simulator that never sleeps but still tracks keys
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Build from configuration
    #[must_use]
    pub fn from_config(config: &LatencyConfig) -> Self {
        if config.enabled {
            Self::new(Duration::from_millis(config.max_delay_ms))
        } else {
            Self::disabled()
        }
    }

    /// Upper bound of a single delay
    #[must_use]
    pub const fn max_delay(&self) -> Duration {
        self.max_delay
    }

    /// Delay once per key; returns whether a delay was incurred.
    pub async fn delay(&self, key: &str) -> bool {
        let first_time = self
            .seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string());
        if !first_time {
            trace!(key, "latency memoized");
            return false;
        }
        self.sleep().await;
        true
    }

    /// Unconditional delay, used for mutations which are never memoized
    pub async fn delay_uncached(&self) {
        self.sleep().await;
    }

    /// Forget every memoized key.
    pub fn reset(&self) {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).clear();
        trace!("latency cache reset");
    }

    /// Whether `key` has already been delayed
    #[must_use]
    pub fn is_cached(&self, key: &str) -> bool {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }

    async fn sleep(&self) {
        if self.max_delay.is_zero() {
            return;
        }
        let millis = u64::try_from(self.max_delay.as_millis()).unwrap_or(u64::MAX);
        let delay = Duration::from_millis(rand::thread_rng().gen_range(0..=millis));
        trace!(delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX), "simulating latency");
        tokio::time::sleep(delay).await;
    }
}

impl Default for LatencySimulator {
    fn default() -> Self {
        Self::new(Duration::from_millis(800))
    }
}
