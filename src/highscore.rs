use crate::util::ErrorChain;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Somewhere to keep the single best score for this installation
pub(crate) trait ScoreStore: fmt::Debug {
    /// Read the stored high score.  A store that has never been written to
    /// reports 0.
    fn load(&self) -> Result<u32, LoadError>;

    /// Replace the stored high score with `score`
    fn save(&mut self, score: u32) -> Result<(), SaveError>;
}

/// A [`ScoreStore`] backed by a small JSON file
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub(crate) fn new(path: PathBuf) -> FileScoreStore {
        FileScoreStore { path }
    }

    /// Return the default high score file path
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("gridsnake").join("highscore.json"))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<u32, LoadError> {
        let src = match fs_err::read(&self.path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::read(e)),
        };
        serde_json::from_slice::<ScoreFile>(&src)
            .map(|sf| sf.high_score)
            .map_err(LoadError::deserialize)
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string(&ScoreFile { high_score: score })
            .map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(&self.path, &src).map_err(SaveError::write)?;
        Ok(())
    }
}

/// A [`ScoreStore`] that forgets everything when the program exits
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct MemoryScoreStore(u32);

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<u32, LoadError> {
        Ok(self.0)
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        self.0 = score;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
struct ScoreFile {
    #[serde(rename = "high-score")]
    high_score: u32,
}

/// The best score seen so far, together with the store it persists to.
///
/// Storage failures never reach the caller: a store that cannot be read
/// starts the record at 0, and a failed write leaves the in-memory record
/// updated but unsaved.
#[derive(Debug)]
pub(crate) struct HighScore {
    store: Box<dyn ScoreStore>,
    best: u32,
}

impl HighScore {
    pub(crate) fn load(store: Box<dyn ScoreStore>) -> HighScore {
        let best = match store.load() {
            Ok(best) => best,
            Err(e) => {
                warn!("{}; treating high score as 0", ErrorChain(&e));
                0
            }
        };
        info!("Loaded high score: {best}");
        HighScore { store, best }
    }

    pub(crate) fn best(&self) -> u32 {
        self.best
    }

    /// Offer the final score of a session.  If it beats the record, the
    /// record is updated and saved, and `true` is returned.
    pub(crate) fn submit(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(e) = self.store.save(score) {
            warn!("{}", ErrorChain(&e));
        }
        true
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize high score")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write high score file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize high score")]
    Deserialize(#[source] serde_json::Error),
}
