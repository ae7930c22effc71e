//! Lookup metrics and observability module.
//!
//! Tracks message-lookup traffic: how often the fallback locale had to
//! answer and how often a key was missing everywhere. Purely observational;
//! recording never affects lookup results.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global lookup metrics singleton.
pub struct LookupMetrics {
    /// Total number of message lookups
    lookups: AtomicUsize,

    /// Number of lookups answered by the fallback locale's tree
    fallback_hits: AtomicUsize,

    /// Number of lookups missing in both the active and fallback trees
    missing_keys: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    /// Get the global lookup metrics instance.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(|| LookupMetrics {
            lookups: AtomicUsize::new(0),
            fallback_hits: AtomicUsize::new(0),
            missing_keys: AtomicUsize::new(0),
        })
    }

    /// Record a message lookup.
    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that consulted the fallback locale's tree.
    pub fn record_fallback_hit(&self) {
        self.fallback_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a key missing in both the active and fallback trees.
    pub fn record_missing_key(&self) {
        self.missing_keys.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current lookup count.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Get the current fallback-hit count.
    pub fn fallback_hits(&self) -> usize {
        self.fallback_hits.load(Ordering::Relaxed)
    }

    /// Get the current missing-key count.
    pub fn missing_keys(&self) -> usize {
        self.missing_keys.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let fallback_hits = self.fallback_hits();
        let fallback_rate = if lookups > 0 {
            (fallback_hits as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            fallback_hits,
            missing_keys: self.missing_keys(),
            fallback_rate,
        }
    }
}

/// Snapshot of lookup metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub fallback_hits: usize,
    pub missing_keys: usize,

    /// Percentage of lookups answered by the fallback tree
    pub fallback_rate: f64,
}
