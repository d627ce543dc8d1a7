//! Phase timing instrumentation.
//!
//! The validator wraps engine initialization and the check pass in a
//! [`StopWatch`] and logs the report at debug level. Nothing here is on the
//! caller-visible result path.

use std::time::{Duration, Instant};

/// Records named phases and their wall-clock durations.
#[derive(Debug, Default)]
pub struct StopWatch {
    phases: Vec<Phase>,
    running: Option<(String, Instant)>,
}

/// A completed phase.
#[derive(Debug, Clone)]
pub struct Phase {
    /// Phase name as given to [`StopWatch::start`].
    pub name: String,
    /// Elapsed wall-clock time.
    pub elapsed: Duration,
}

impl StopWatch {
    /// Creates an empty stopwatch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a phase, closing the previous one if it is still running.
    pub fn start(&mut self, name: impl Into<String>) {
        self.stop();
        self.running = Some((name.into(), Instant::now()));
    }

    /// Stops the running phase, if any.
    pub fn stop(&mut self) {
        if let Some((name, started)) = self.running.take() {
            self.phases.push(Phase {
                name,
                elapsed: started.elapsed(),
            });
        }
    }

    /// Completed phases in execution order.
    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Total time across completed phases.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.phases.iter().map(|p| p.elapsed).sum()
    }

    /// Formats a per-phase table: milliseconds, share of total, phase name.
    #[must_use]
    pub fn pretty_print(&self) -> String {
        use std::fmt::Write;

        let total = self.total();
        let mut out = String::new();
        let _ = writeln!(out, "total: {}ms", total.as_millis());
        let _ = writeln!(out, "ms       %        phase");
        for phase in &self.phases {
            let share = if total.is_zero() {
                0.0
            } else {
                phase.elapsed.as_secs_f64() / total.as_secs_f64() * 100.0
            };
            let _ = writeln!(
                out,
                "{:<8} {:<8.0} {}",
                phase.elapsed.as_millis(),
                share,
                phase.name
            );
        }
        out
    }
}
