//! Session timing: the stopwatch, the one-second display ticker, and the
//! `MM:SS` format.

use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Interval between display refreshes.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Formats seconds as zero-padded `MM:SS`, truncating fractions.
///
/// Minutes keep growing past 59; there is no hour field.
pub fn format_elapsed(seconds: f64) -> String {
    // Negative and NaN inputs clamp to zero.
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Stopwatch for one game.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionClock {
    started_at: Option<Instant>,
    frozen: Option<Duration>,
}

impl SessionClock {
    /// Starts timing from now, discarding any previous reading.
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
        self.frozen = None;
    }

    /// Freezes the reading and returns it. Stopping twice keeps the first value.
    pub fn stop(&mut self) -> Duration {
        let elapsed = self.elapsed();
        self.frozen = Some(elapsed);
        elapsed
    }

    /// Clears the clock back to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Time since start, or the frozen reading once stopped.
    pub fn elapsed(&self) -> Duration {
        match (self.frozen, self.started_at) {
            (Some(frozen), _) => frozen,
            (None, Some(start)) => start.elapsed(),
            (None, None) => Duration::ZERO,
        }
    }
}

/// Tick event sent by [`Ticker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Periodic tick task. Dropping the ticker aborts the task.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawns a task sending a [`Tick`] every `period`, first one after one
    /// full period. Must be called inside a tokio runtime.
    #[instrument(skip(tx))]
    pub fn spawn(period: Duration, tx: UnboundedSender<Tick>) -> Self {
        debug!("Starting ticker");
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(Tick).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        debug!("Stopping ticker");
        self.handle.abort();
    }
}
