use std::fs;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use drift_core::GLOBAL_CONFIG;
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("score file does not hold a whole number: {0}")]
    Parse(#[from] ParseIntError),
}

pub type Result<T> = std::result::Result<T, ScoreError>;

/// A single counter kept as a bare decimal integer in a text file.
#[derive(Clone, Debug)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: impl AsRef<Path>) -> ScoreFile {
        ScoreFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_load(&self) -> Result<u64> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(contents.trim().parse()?)
    }

    // a missing or mangled file just means nobody has scored yet
    pub fn load(&self) -> u64 {
        match self.try_load() {
            Ok(score) => score,
            Err(ScoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no score file yet");
                0
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable score file");
                0
            }
        }
    }

    pub fn store(&self, score: u64) -> Result<()> {
        fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}

/// High score and lifetime total, each in its own file. Write failures are
/// logged and otherwise ignored so a full disk never stops a race.
#[derive(Clone, Debug)]
pub struct ScoreBook {
    high_score: u64,
    total_score: u64,
    // the high score as it stood when the current session began; the live
    // high score moves up mid-race
    session_start_high: u64,
    high_score_file: ScoreFile,
    total_score_file: ScoreFile,
}

impl ScoreBook {
    pub fn load(high_score_path: impl AsRef<Path>, total_score_path: impl AsRef<Path>) -> ScoreBook {
        let high_score_file = ScoreFile::new(high_score_path);
        let total_score_file = ScoreFile::new(total_score_path);
        let high_score = high_score_file.load();
        ScoreBook {
            high_score,
            total_score: total_score_file.load(),
            session_start_high: high_score,
            high_score_file,
            total_score_file,
        }
    }

    pub fn from_config() -> ScoreBook {
        ScoreBook::load(&GLOBAL_CONFIG.high_score_path, &GLOBAL_CONFIG.total_score_path)
    }

    // re-read both files, e.g. when coming back to the menu
    pub fn reload(&mut self) {
        self.high_score = self.high_score_file.load();
        self.total_score = self.total_score_file.load();
        self.session_start_high = self.high_score;
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    /// Saves `score` as the new high score if it beats the current one.
    /// Returns whether it did.
    pub fn offer_high_score(&mut self, score: u64) -> bool {
        if score <= self.high_score {
            return false;
        }
        self.high_score = score;
        if let Err(e) = self.high_score_file.store(score) {
            error!(path = %self.high_score_file.path().display(), error = %e, "could not save high score");
        }
        true
    }

    /// Folds a finished session's score into the lifetime total. Returns
    /// whether the session beat the high score it started against, even if
    /// that record was already saved mid-race.
    pub fn record_session(&mut self, score: u64) -> bool {
        let new_high_score = score > self.session_start_high;
        self.offer_high_score(score);
        self.total_score = self.total_score.saturating_add(score);
        if let Err(e) = self.total_score_file.store(self.total_score) {
            error!(path = %self.total_score_file.path().display(), error = %e, "could not save total score");
        }
        info!(
            score,
            high_score = self.high_score,
            total_score = self.total_score,
            new_high_score,
            "session recorded"
        );
        self.session_start_high = self.high_score;
        new_high_score
    }
}
