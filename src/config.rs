//! Configuration handling for the TUI

use crate::handoff::DEFAULT_CONTACT_NUMBER;
use crate::i18n::Locale;
use crate::state::HandoffSettings;
use anyhow::{bail, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Delay between submit and the messaging handoff
pub const DEFAULT_HANDOFF_DELAY_MS: u64 = 2500;
/// Interval between testimonial changes on the welcome screen
pub const DEFAULT_TESTIMONIAL_INTERVAL_MS: u64 = 4000;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Display language
    pub locale: Option<Locale>,
    /// Messaging contact that receives applications
    pub contact_number: Option<String>,
    /// Milliseconds to wait after submit before opening the messaging link
    pub handoff_delay_ms: Option<u64>,
    /// Milliseconds between testimonial rotations
    pub testimonial_interval_ms: Option<u64>,
    /// Set when the file on disk could not be read; saving is then refused
    #[serde(skip)]
    unreadable: bool,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "devfunds", "devfunds-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration, falling back to defaults that will not
    /// overwrite an unreadable file
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!("Ignoring unreadable config: {err}");
            Self::unreadable()
        })
    }

    /// Defaults standing in for a config file that failed to load
    pub fn unreadable() -> Self {
        Self {
            unreadable: true,
            ..Self::default()
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if self.unreadable {
            bail!("config file could not be read earlier; not overwriting it");
        }
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn save_allowed(&self) -> bool {
        !self.unreadable
    }

    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    pub fn handoff_settings(&self) -> HandoffSettings {
        HandoffSettings {
            contact_number: self
                .contact_number
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTACT_NUMBER.to_string()),
            delay: Duration::from_millis(self.handoff_delay_ms.unwrap_or(DEFAULT_HANDOFF_DELAY_MS)),
        }
    }

    pub fn testimonial_interval(&self) -> Duration {
        Duration::from_millis(
            self.testimonial_interval_ms
                .unwrap_or(DEFAULT_TESTIMONIAL_INTERVAL_MS)
                .max(1),
        )
    }
}
