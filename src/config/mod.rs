use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_true")]
    pub show_icons: bool,
    #[serde(default = "default_true")]
    pub show_essential_badge: bool,
    #[serde(default = "default_progress_bar_width")]
    pub progress_bar_width: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_true() -> bool {
    true
}
fn default_progress_bar_width() -> usize {
    20
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_prompt() -> String {
    "packmybag> ".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_icons: default_true(),
            show_essential_badge: default_true(),
            progress_bar_width: default_progress_bar_width(),
            separator_char: default_separator_char(),
            prompt: default_prompt(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("packmybag")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".packmybag")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("packmybag.conf")
    }

    /// Resolve the config path, honouring a `--config` override.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom
            .map(PathBuf::from)
            .unwrap_or_else(Self::config_file)
    }

    /// Parse a YAML document. Missing keys take their default value.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content).map_err(|e| {
            warn!(path = %path.display(), error = %e, "configuration file could not be parsed");
            AppError::Config(format!("{}: {}", path.display(), e))
        })
    }

    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Write the default configuration. Returns false if the file already
    /// exists and `force` is not set.
    pub fn init_at(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(true)
    }
}
