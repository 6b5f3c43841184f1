//! Runtime settings read from an optional JSON file.
//!
//! The file is looked up at `$LIGHTS_OUT_CONFIG`, falling back to
//! `lights_out.json` in the working directory. A missing file means defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::GameError;
use crate::grid::WinCondition;

pub const CONFIG_ENV: &str = "LIGHTS_OUT_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "lights_out.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub title: String,
    /// Font used for the start and end screens. Common system monospace fonts
    /// are tried when unset.
    pub font_path: Option<PathBuf>,
    pub font_size: f32,
    /// Fixed puzzle seed, random when unset.
    pub seed: Option<u64>,
    pub win_condition: WinCondition,
    /// Leave the play screen as soon as the board is solved.
    pub finish_on_win: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Lights Out".to_string(),
            font_path: None,
            font_size: 32.0,
            seed: None,
            win_condition: WinCondition::Uniform,
            finish_on_win: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, GameError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, GameError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(GameError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = Self::parse(&text).map_err(|source| GameError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
