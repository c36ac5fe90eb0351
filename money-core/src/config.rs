//! Application configuration.
//!
//! Every field has a default, so a config file only needs the keys it
//! overrides:
//!
//! ```toml
//! [window]
//! width = 800.0
//!
//! [text]
//! subtitle = "What shall we look at?"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid window size {width}x{height}: both sides must be positive")]
    InvalidWindowSize { width: f32, height: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowPreferences {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub close_label: String,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self {
            title: "MoneyAssistant".to_string(),
            width: 600.0,
            height: 400.0,
            close_label: "Close App".to_string(),
        }
    }
}

impl WindowPreferences {
    /// Initial size as `WIDTHxHEIGHT`, e.g. `600x400`.
    pub fn geometry(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// Rejects sizes no window can have: zero, negative, NaN or infinite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let usable = |side: f32| side.is_finite() && side > 0.0;
        if usable(self.width) && usable(self.height) {
            Ok(())
        } else {
            Err(ConfigError::InvalidWindowSize {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// User-facing strings of both screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenText {
    pub welcome: String,
    pub subtitle: String,
    pub upload_button: String,
    pub upload_label: String,
    pub select_button: String,
    pub dialog_title: String,
}

impl Default for ScreenText {
    fn default() -> Self {
        Self {
            welcome: "Welcome to your personal Money Assistant App".to_string(),
            subtitle: "How can we help you today".to_string(),
            upload_button: "Upload Bank Statement".to_string(),
            upload_label: crate::selection::DEFAULT_UPLOAD_LABEL.to_string(),
            select_button: "Select file".to_string(),
            dialog_title: "Select a file".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowPreferences,
    pub text: ScreenText,
    /// Image shown on the welcome screen. The UI falls back to its bundled asset.
    pub assistant_image: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.window.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading config");
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}
