use crate::consts;
use crate::highscore::{FileScoreStore, MemoryScoreStore, ScoreStore};
use crate::sound::{Chime, Silence, TerminalBell};
use log::{info, warn, LevelFilter};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Size of the playing field
    #[serde(default)]
    pub(crate) grid: GridConfig,

    /// Gameplay settings
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Construct the high score store described by the configuration.  If
    /// saving is disabled, or no path is configured and the default path
    /// could not be determined, scores are only kept in memory.
    pub(crate) fn score_store(&self) -> Box<dyn ScoreStore> {
        if !self.files.save_high_score {
            return Box::new(MemoryScoreStore::default());
        }
        match self
            .files
            .high_score_file
            .clone()
            .or_else(FileScoreStore::default_path)
        {
            Some(path) => {
                let store = FileScoreStore::new(path);
                info!("Using high score file {}", store.path().display());
                Box::new(store)
            }
            None => {
                warn!("Failed to determine path to local data directory; high score will not be saved");
                Box::new(MemoryScoreStore::default())
            }
        }
    }

    pub(crate) fn chime(&self) -> Box<dyn Chime> {
        if self.game.sound {
            Box::new(TerminalBell::new(std::io::stdout()))
        } else {
            Box::new(Silence)
        }
    }

    /// Return the path of the file to log to, or `None` if logging is
    /// disabled or no path could be determined
    pub(crate) fn log_file(&self) -> Option<PathBuf> {
        if self.files.log_level == LevelFilter::Off {
            return None;
        }
        self.files.log_file.clone().or_else(|| {
            dirs::data_local_dir().map(|p| p.join("gridsnake").join("gridsnake.log"))
        })
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct GridConfig {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            width: consts::DEFAULT_GRID_WIDTH,
            height: consts::DEFAULT_GRID_HEIGHT,
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    /// Ticks per second before the level bonus is added
    pub(crate) base_speed: u32,

    /// Whether to ring the terminal bell when an apple is eaten
    pub(crate) sound: bool,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            base_speed: consts::DEFAULT_BASE_SPEED,
            sound: true,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawFileConfig")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    high_score_file: Option<PathBuf>,

    /// Whether to load & save the high score in a file
    save_high_score: bool,

    /// Path of the log file
    log_file: Option<PathBuf>,

    /// Most verbose level of messages to write to the log file
    pub(crate) log_level: LevelFilter,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawFileConfig {
    high_score_file: Option<PathBuf>,
    save_high_score: bool,
    log_file: Option<PathBuf>,
    log_level: String,
}

impl Default for RawFileConfig {
    fn default() -> RawFileConfig {
        RawFileConfig {
            high_score_file: None,
            save_high_score: true,
            log_file: None,
            log_level: String::from("info"),
        }
    }
}

impl TryFrom<RawFileConfig> for FileConfig {
    type Error = log::ParseLevelError;

    fn try_from(value: RawFileConfig) -> Result<FileConfig, log::ParseLevelError> {
        Ok(FileConfig {
            high_score_file: value.high_score_file,
            save_high_score: value.save_high_score,
            log_file: value.log_file,
            log_level: value.log_level.parse()?,
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
