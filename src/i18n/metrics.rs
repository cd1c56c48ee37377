//! Translation run metrics.
//!
//! Counters are shared between the router (provider calls, fallbacks) and the
//! orchestrator (per-locale outcomes) through an `Arc<TranslationMetrics>`.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for one translation run.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of provider invocations (including fallbacks)
    provider_calls: AtomicUsize,

    /// Number of times DeepL output was rejected and OpenAI was asked instead
    fallbacks: AtomicUsize,

    /// Number of translations written to a locale file
    saved: AtomicUsize,

    /// Number of final translations rejected by the validator
    rejected: AtomicUsize,

    /// Number of locales skipped because of a store or provider error
    failed: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_provider_call(&self) {
        self.provider_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_saved(&self) {
        self.saved.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn provider_calls(&self) -> usize {
        self.provider_calls.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn saved(&self) -> usize {
        self.saved.load(Ordering::Relaxed)
    }

    pub fn rejected(&self) -> usize {
        self.rejected.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }

    /// Snapshot of the current counters.
    pub fn report(&self) -> MetricsReport {
        MetricsReport::new(
            self.provider_calls(),
            self.fallbacks(),
            self.saved(),
            self.rejected(),
            self.failed(),
        )
    }
}

/// Point-in-time view of [`TranslationMetrics`].
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub provider_calls: usize,
    pub fallbacks: usize,
    pub saved: usize,
    pub rejected: usize,
    pub failed: usize,

    /// Saved locales as a percentage (0-100) of attempted locales
    pub success_rate: f64,
}

impl MetricsReport {
    fn new(
        provider_calls: usize,
        fallbacks: usize,
        saved: usize,
        rejected: usize,
        failed: usize,
    ) -> Self {
        let attempted = saved + rejected + failed;
        let success_rate = if attempted > 0 {
            (saved as f64 / attempted as f64) * 100.0
        } else {
            0.0
        };

        Self {
            provider_calls,
            fallbacks,
            saved,
            rejected,
            failed,
            success_rate,
        }
    }

    /// Counters accumulated between `earlier` and this snapshot.
    ///
    /// # Arguments
    /// * `earlier` - A snapshot taken from the same metrics before this one
    ///
    /// # Returns
    /// A report covering only the work done in between, with its own success rate
    pub fn since(&self, earlier: &MetricsReport) -> MetricsReport {
        MetricsReport::new(
            self.provider_calls.saturating_sub(earlier.provider_calls),
            self.fallbacks.saturating_sub(earlier.fallbacks),
            self.saved.saturating_sub(earlier.saved),
            self.rejected.saturating_sub(earlier.rejected),
            self.failed.saturating_sub(earlier.failed),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let report = TranslationMetrics::new().report();
        assert_eq!(report.provider_calls, 0);
        assert_eq!(report.fallbacks, 0);
        assert_eq!(report.saved, 0);
        assert_eq!(report.success_rate, 0.0);
    }

    #[test]
    fn test_record_and_report() {
        let metrics = TranslationMetrics::new();
        metrics.record_provider_call();
        metrics.record_provider_call();
        metrics.record_provider_call();
        metrics.record_fallback();
        metrics.record_saved();
        metrics.record_rejected();
        metrics.record_failed();
        metrics.record_saved();

        let report = metrics.report();
        assert_eq!(report.provider_calls, 3);
        assert_eq!(report.fallbacks, 1);
        assert_eq!(report.saved, 2);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.failed, 1);
        assert!((report.success_rate - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = TranslationMetrics::new();
        metrics.record_saved();
        let json = serde_json::to_string(&metrics.report()).expect("Should serialize");
        assert!(json.contains("\"saved\":1"));
        assert!(json.contains("success_rate"));
    }

    #[test]
    fn test_report_since_earlier_snapshot() {
        let metrics = TranslationMetrics::new();
        metrics.record_provider_call();
        metrics.record_saved();
        let before = metrics.report();

        metrics.record_provider_call();
        metrics.record_provider_call();
        metrics.record_fallback();
        metrics.record_rejected();

        let delta = metrics.report().since(&before);
        assert_eq!(delta.provider_calls, 2);
        assert_eq!(delta.fallbacks, 1);
        assert_eq!(delta.saved, 0);
        assert_eq!(delta.rejected, 1);
        assert_eq!(delta.success_rate, 0.0);
    }
}
