//! CLI preferences stored at `~/.config/nova/cli.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI-specific preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliPrefs {
    /// Backend base URL.
    pub base_url: Option<String>,
    /// Persist REPL line history. On unless set to `false`.
    pub history: Option<bool>,
}

impl CliPrefs {
    /// Load preferences from the default path, returning defaults if missing.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    /// Load preferences from `path`, returning defaults if missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    /// Whether REPL history should be read and written.
    pub fn keep_history(&self) -> bool {
        self.history.unwrap_or(true)
    }

    /// Default path: `~/.config/nova/cli.toml`.
    pub fn path() -> PathBuf {
        config_dir().join("cli.toml")
    }
}

/// `~/.config/nova`, falling back to a relative `.config/nova`.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("nova")
}
