//! Lightweight query timing utilities.
//!
//! Timing is off by default. Enable it programmatically or by setting the
//! `SP_TIMING` environment variable.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable query timing globally.
pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Check if timing is enabled.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed) || std::env::var("SP_TIMING").is_ok()
}

/// A simple timer that measures elapsed time.
pub struct Timer {
    start: Instant,
    enabled: bool,
}

impl Timer {
    /// Start a new timer. It records nothing if timing is disabled.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
            enabled: is_enabled(),
        }
    }

    /// Stop the timer and return elapsed time in seconds.
    /// If timing is disabled, returns None.
    pub fn stop(self) -> Option<f64> {
        if self.enabled {
            Some(self.start.elapsed().as_secs_f64())
        } else {
            None
        }
    }

    /// Stop the timer and add the elapsed time to `acc` if enabled.
    pub fn stop_into(self, acc: &AccumulatingTimer) {
        if let Some(elapsed) = self.stop() {
            acc.record(elapsed);
        }
    }
}

/// Accumulating timer for tracking total time across multiple calls.
pub struct AccumulatingTimer {
    total_ns: AtomicU64,
    count: AtomicU64,
}

impl Default for AccumulatingTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl AccumulatingTimer {
    /// Create a new accumulating timer.
    pub const fn new() -> Self {
        Self {
            total_ns: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Record a timing measurement.
    pub fn record(&self, duration_s: f64) {
        let nanos = (duration_s * 1e9) as u64;
        self.total_ns.fetch_add(nanos, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total time spent (in seconds).
    pub fn total_seconds(&self) -> f64 {
        self.total_ns.load(Ordering::Relaxed) as f64 / 1e9
    }

    /// Get number of calls.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Get average time per call (in seconds).
    pub fn average_seconds(&self) -> f64 {
        let count = self.count();
        if count > 0 {
            self.total_seconds() / count as f64
        } else {
            0.0
        }
    }
}

/// Process-wide query timers.
pub mod query_timing {
    use super::AccumulatingTimer;

    /// Time spent in point-to-point queries
    pub static FIND_CALLS: AccumulatingTimer = AccumulatingTimer::new();
    /// Time spent in single-source distance sweeps
    pub static DISTANCE_CALLS: AccumulatingTimer = AccumulatingTimer::new();

    /// Render a timing summary, or `None` if timing is disabled.
    pub fn summary() -> Option<String> {
        if !super::is_enabled() {
            return None;
        }

        let mut out = String::from("=== Query Timing ===\n");
        for (label, timer) in [("find", &FIND_CALLS), ("distances", &DISTANCE_CALLS)] {
            let count = timer.count();
            if count > 0 {
                out.push_str(&format!(
                    "{:<10} {} calls, {:.6}s total, {:.4}ms avg\n",
                    label,
                    count,
                    timer.total_seconds(),
                    timer.average_seconds() * 1000.0
                ));
            }
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulating_timer_averages() {
        let acc = AccumulatingTimer::new();
        assert_eq!(acc.average_seconds(), 0.0);
        acc.record(0.5);
        acc.record(1.5);
        assert_eq!(acc.count(), 2);
        assert!((acc.total_seconds() - 2.0).abs() < 1e-6);
        assert!((acc.average_seconds() - 1.0).abs() < 1e-6);
    }
}
