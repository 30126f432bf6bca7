//! High-score persistence.
//!
//! The session only tracks the high-water mark in memory; the runner loads
//! the stored value at startup and writes it back after landings and at game
//! over through the [`HighScoreStore`] trait.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default file name, written to the working directory.
pub const DEFAULT_STORE_PATH: &str = "columns_highscore.json";

/// Key-value surface the core scoring relies on.
pub trait HighScoreStore {
    /// Stored high score; 0 when nothing was persisted yet.
    fn get_high_score(&self) -> u32;

    /// Persist a new high score.
    fn set_high_score(&mut self, value: u32) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct StoredScores {
    high_score: u32,
}

/// JSON-file backed store. A missing or unreadable file reads as 0.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    cached: u32,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let cached = Self::read_file(&path);
        Self { path, cached }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(path: &Path) -> u32 {
        // Corrupt or absent files fall back to 0 rather than erroring;
        // losing a high score must never block a new game.
        fs::read_to_string(path)
            .ok()
            .and_then(|raw| serde_json::from_str::<StoredScores>(&raw).ok())
            .map(|scores| scores.high_score)
            .unwrap_or(0)
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

impl HighScoreStore for JsonFileStore {
    fn get_high_score(&self) -> u32 {
        self.cached
    }

    fn set_high_score(&mut self, value: u32) -> Result<()> {
        let raw = serde_json::to_string_pretty(&StoredScores { high_score: value })?;
        fs::write(&self.path, raw)
            .with_context(|| format!("writing high score to {}", self.path.display()))?;
        self.cached = value;
        Ok(())
    }
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    high_score: u32,
}

impl MemoryStore {
    pub fn new(high_score: u32) -> Self {
        Self { high_score }
    }
}

impl HighScoreStore for MemoryStore {
    fn get_high_score(&self) -> u32 {
        self.high_score
    }

    fn set_high_score(&mut self, value: u32) -> Result<()> {
        self.high_score = value;
        Ok(())
    }
}

/// Merge the current score into the store if it beats the stored value.
/// Returns the resulting high score.
pub fn merge_high_score(store: &mut dyn HighScoreStore, score: u32) -> Result<u32> {
    let stored = store.get_high_score();
    if score > stored {
        store.set_high_score(score)?;
        Ok(score)
    } else {
        Ok(stored)
    }
}
