//! The config file on disk.
//!
//! A [`ConfigFile`] names one `config.toml`: an explicit `--config` path or
//! the per-user one under the platform config directory. Reads fill
//! missing keys from defaults. Writes replace the file through a `.tmp`
//! sibling so a reader never sees half a file.

mod template;


use std::fs;
use std::path::{Path, PathBuf};

use simdesk_common::ConfigError;
use tracing::{debug, info};

use crate::schema::DesktopConfig;
use crate::validation;

const APP_DIR: &str = "simdesk";
const FILE_NAME: &str = "config.toml";

/// Location of a desktop config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/simdesk/config.toml`, e.g. `~/.config/simdesk/config.toml`
    /// on Linux.
    pub fn platform_default() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))?;
        Ok(Self::at(dir.join(APP_DIR).join(FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Parse the file. Values are not range-checked here.
    pub fn read(&self) -> Result<DesktopConfig, ConfigError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::FileNotFound(self.path.clone()));
            }
            Err(e) => return Err(self.io_error(e)),
        };
        let config: DesktopConfig = toml::from_str(&text).map_err(|e| {
            ConfigError::ParseError(format!("{}: {e}", self.path.display()))
        })?;
        info!(path = %self.path.display(), "config loaded");
        Ok(config)
    }

    /// Like [`read`](Self::read), but a missing file is replaced by the
    /// commented starter file and defaults are returned.
    pub fn read_or_init(&self) -> Result<DesktopConfig, ConfigError> {
        match self.read() {
            Err(ConfigError::FileNotFound(_)) => {
                self.init()?;
                Ok(DesktopConfig::default())
            }
            other => other,
        }
    }

    /// Write the commented starter file, replacing whatever is there.
    pub fn init(&self) -> Result<(), ConfigError> {
        self.replace_contents(template::STARTER)?;
        info!(path = %self.path.display(), "starter config written");
        Ok(())
    }

    /// Validate `config` and write it out. An invalid config leaves the
    /// file untouched.
    pub fn write(&self, config: &DesktopConfig) -> Result<(), ConfigError> {
        validation::validate(config)?;
        let text = toml::to_string_pretty(config)
            .map_err(|e| ConfigError::ParseError(format!("cannot serialize config: {e}")))?;
        self.replace_contents(&text)?;
        info!(path = %self.path.display(), "config written");
        Ok(())
    }

    fn replace_contents(&self, text: &str) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| ConfigError::Io {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }

        let staging = self.path.with_extension("toml.tmp");
        fs::write(&staging, text).map_err(|e| ConfigError::Io {
            path: staging.clone(),
            source: e,
        })?;
        if let Err(e) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(self.io_error(e));
        }
        debug!(path = %self.path.display(), bytes = text.len(), "config file replaced");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
