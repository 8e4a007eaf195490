//! Leaderboard persistence.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use super::{Leaderboard, ScoreEntry, StoreError};

/// Loads and saves the leaderboard.
pub trait ScoreStore {
    /// Reads the stored leaderboard. Nothing stored yet is an empty board.
    fn load(&self) -> Result<Leaderboard, StoreError>;

    /// Replaces the stored leaderboard.
    fn save(&self, board: &Leaderboard) -> Result<(), StoreError>;
}

/// Leaderboard kept as a JSON array of `{name, time}` records.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Leaderboard, StoreError> {
        if !self.path.exists() {
            debug!("No leaderboard file yet");
            return Ok(Leaderboard::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Leaderboard::default());
        }
        let board: Leaderboard = serde_json::from_str(&content)?;
        debug!(entries = board.len(), "Leaderboard loaded");
        Ok(board)
    }

    #[instrument(skip(self, board), fields(path = %self.path.display(), entries = board.len()))]
    fn save(&self, board: &Leaderboard) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(board)?;
        std::fs::write(&self.path, json)?;
        debug!("Leaderboard saved");
        Ok(())
    }
}

/// Adds `entry` to the stored leaderboard and returns the saved result.
#[instrument(skip(store))]
pub fn record_score<S: ScoreStore + ?Sized>(
    store: &S,
    entry: ScoreEntry,
) -> Result<Leaderboard, StoreError> {
    let mut board = store.load()?;
    board.insert(entry);
    store.save(&board)?;
    info!(entries = board.len(), "Score recorded");
    Ok(board)
}
