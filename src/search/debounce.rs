//! Quiet-period timer for coalescing rapid input.

use std::time::Duration;

use tokio::time::Instant;

/// Default quiet period before a recomputation runs.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Cancel-and-reschedule timer.
///
/// Every [`schedule`](Self::schedule) pushes the deadline out by the quiet
/// period, so a burst of updates fires once, after the last one.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Debouncer {
    #[must_use]
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    #[must_use]
    pub const fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Whether a fire is pending.
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Restart the quiet period, superseding any pending fire.
    pub fn schedule(&mut self) {
        self.deadline = Some(Instant::now() + self.quiet);
    }

    /// Drop the pending fire, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Completes once the pending deadline passes; never completes while idle.
    ///
    /// Cancel safe: dropping the future before it completes leaves the
    /// deadline in place.
    pub async fn fired(&mut self) {
        match self.deadline {
            Some(deadline) => {
                tokio::time::sleep_until(deadline).await;
                self.deadline = None;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
