//! Best-times leaderboard: the ten fastest wins, fastest first.

mod error;
mod store;

pub use error::StoreError;
pub use store::{JsonFileStore, ScoreStore, record_score};

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::clock::format_elapsed;

/// Maximum number of entries kept.
pub const CAPACITY: usize = 10;

/// One recorded win.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize, new)]
pub struct ScoreEntry {
    /// Name typed after the win.
    #[new(into)]
    name: String,
    /// Seconds from start to win, fractional.
    #[serde(rename = "time")]
    elapsed_seconds: f64,
}

/// Ordered best times, never longer than [`CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ScoreEntry>", into = "Vec<ScoreEntry>")]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Builds a leaderboard from arbitrary entries: sorts ascending by time and
    /// keeps the fastest [`CAPACITY`].
    #[instrument(skip(entries), fields(count = entries.len()))]
    pub fn from_entries(mut entries: Vec<ScoreEntry>) -> Self {
        entries.sort_by(|a, b| a.elapsed_seconds.total_cmp(&b.elapsed_seconds));
        if entries.len() > CAPACITY {
            debug!(dropped = entries.len() - CAPACITY, "Trimming leaderboard");
            entries.truncate(CAPACITY);
        }
        Self { entries }
    }

    /// Adds an entry, re-sorting and trimming.
    ///
    /// Ties keep insertion order, so a new entry with an equal time lands
    /// after the existing ones.
    #[instrument(skip(self))]
    pub fn insert(&mut self, entry: ScoreEntry) {
        let mut entries = std::mem::take(&mut self.entries);
        entries.push(entry);
        *self = Self::from_entries(entries);
    }

    /// Entries, fastest first.
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display rows: `"1. Name - MM:SS"`.
    pub fn rows(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{}. {} - {}", i + 1, e.name, format_elapsed(e.elapsed_seconds)))
            .collect()
    }
}

impl From<Vec<ScoreEntry>> for Leaderboard {
    fn from(entries: Vec<ScoreEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<Leaderboard> for Vec<ScoreEntry> {
    fn from(board: Leaderboard) -> Self {
        board.entries
    }
}
