//! Assistant configuration
//!
//! Timing knobs for the widget choreography. Values come from an optional
//! TOML file with environment variable overrides on top.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default simulated "thinking" delay before the assistant reply, in ms.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1500;

/// Suggested lifetime of a screen-reader announcement, in ms. The host owns
/// removal; this is carried so hosts share one value.
pub const DEFAULT_ANNOUNCEMENT_LIFETIME_MS: u64 = 1000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Delay between accepting a message and delivering the reply.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// How long the host should keep an announcement in the live region.
    #[serde(default = "default_announcement_lifetime_ms")]
    pub announcement_lifetime_ms: u64,
}

fn default_reply_delay_ms() -> u64 {
    DEFAULT_REPLY_DELAY_MS
}

fn default_announcement_lifetime_ms() -> u64 {
    DEFAULT_ANNOUNCEMENT_LIFETIME_MS
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            announcement_lifetime_ms: DEFAULT_ANNOUNCEMENT_LIFETIME_MS,
        }
    }
}

impl AssistantConfig {
    /// Load from a TOML file, then apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: AssistantConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Defaults plus environment overrides, for hosts without a config file.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Some(ms) = parse_ms_env("ASSISTANT_REPLY_DELAY_MS") {
            self.reply_delay_ms = ms;
        }
        if let Some(ms) = parse_ms_env("ASSISTANT_ANNOUNCEMENT_LIFETIME_MS") {
            self.announcement_lifetime_ms = ms;
        }
    }
}

fn parse_ms_env(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(ms),
        Err(_) => {
            tracing::warn!(%key, value = %raw, "ignoring non-numeric timing override");
            None
        }
    }
}
