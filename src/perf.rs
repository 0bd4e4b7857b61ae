//! Timing instrumentation for the interaction paths.
//!
//! Enable with the `profiling` feature:
//! ```toml
//! [dependencies]
//! ideaboard = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn hit_test(...) {
//!     profile_scope!("hit_test");
//!     // ...
//! }
//! ```
//!
//! Without the feature `profile_scope!` expands to nothing and costs nothing.

use std::time::Instant;
use tracing::warn;

// ============================================================================
// Constants
// ============================================================================

/// Default threshold used by `profile_scope!` without an explicit threshold
pub const PROFILE_THRESHOLD_MS: f64 = 1.0;

// ============================================================================
// Profiling Macro (zero-cost when disabled)
// ============================================================================

/// Time the enclosing scope and warn if it runs past a threshold.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

// ============================================================================
// Scoped Timer
// ============================================================================

// Nesting depth, so nested scopes are indented in the log
thread_local! {
    static CURRENT_DEPTH: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// RAII timer: measures from construction to drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
    depth: usize,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        let depth = CURRENT_DEPTH.with(|d| {
            let current = d.get();
            d.set(current + 1);
            current
        });

        Self {
            name,
            start: Instant::now(),
            threshold_ms,
            depth,
        }
    }

    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, PROFILE_THRESHOLD_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        CURRENT_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));

        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            let indent = "  ".repeat(self.depth);
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "{}Slow operation",
                indent
            );
        }
    }
}
