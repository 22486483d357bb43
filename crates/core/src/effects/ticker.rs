//! Repeating, cancelable timer.

use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Smallest period accepted by [`Ticker::new`].
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Fixed-period ticker that stops yielding once its token is cancelled.
///
/// The first tick completes immediately. Missed ticks are delayed rather
/// than bursted.
#[derive(Debug)]
pub struct Ticker {
    interval: Interval,
    cancel: CancellationToken,
}

impl Ticker {
    pub fn new(period: Duration, cancel: CancellationToken) -> Self {
        let mut interval = tokio::time::interval(period.max(MIN_PERIOD));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval, cancel }
    }

    /// Wait for the next tick. `None` once cancelled.
    pub async fn tick(&mut self) -> Option<Instant> {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => None,
            at = self.interval.tick() => Some(at),
        }
    }

    /// Make the next tick complete immediately.
    pub fn restart(&mut self) {
        self.interval.reset_immediately();
    }
}

/// Sleep until `deadline`. Returns `false` if `cancel` fired first.
pub async fn sleep_until_or_cancel(deadline: Instant, cancel: &CancellationToken) -> bool {
    tokio::select! {
        biased;
        () = cancel.cancelled() => false,
        () = tokio::time::sleep_until(deadline) => true,
    }
}
