use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

pub const CONFIG_FILE_PATH: &str = "./rectboard.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub start_label: String,
    pub stop_label: String,
    pub toggle_width: f64,
    pub toggle_height: f64,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read config file:\n{0}")]
    Read(#[from] io::Error),

    #[error("Failed to deserialize config:\n{0}")]
    Deserialize(#[from] toml::de::Error),
}

impl Config {
    /// Loads the config next to the executable's working directory.
    /// A missing file is not an error.
    pub fn try_load() -> Result<Option<Self>, LoadError> {
        Self::try_load_from(Path::new(CONFIG_FILE_PATH))
    }

    pub fn try_load_from(path: &Path) -> Result<Option<Self>, LoadError> {
        let mut file = match fs::File::open(path) {
            Ok(file) => file,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Ok(Some(Self::parse(&contents)?))
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// `None` if `log_level` is not a level name.
    pub fn level(&self) -> Option<Level> {
        self.log_level.trim().parse().ok()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: String::from("Rectangle Board"),
            start_label: String::from("Start drawing"),
            stop_label: String::from("Stop drawing"),
            toggle_width: 150.0,
            toggle_height: 40.0,
            log_level: String::from("info"),
        }
    }
}
