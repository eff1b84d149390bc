//! Optional JSON configuration
//!
//! Every key is optional; anything missing falls back to the built-in defaults.
//! The file is looked up at `DEVAGENCY_CONFIG` if set, otherwise at
//! `.config/devagency.json` next to the working directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::CarouselConfig;

const DEFAULT_CONFIG_FILE: &str = ".config/devagency.json";
const CONFIG_ENV_VAR: &str = "DEVAGENCY_CONFIG";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactConfig {
    /// How long the simulated submission takes
    pub submit_delay: Duration,
    /// How long the success message stays before the form clears
    pub reset_after: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1500),
            reset_after: Duration::from_secs(3),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationConfig {
    pub enabled: bool,
    pub stagger: Duration,
    pub duration: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stagger: Duration::from_millis(50),
            duration: Duration::from_millis(500),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub carousel: CarouselConfig,
    pub contact: ContactConfig,
    pub animation: AnimationConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    carousel: RawCarousel,
    contact: RawContact,
    animation: RawAnimation,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawCarousel {
    interval_ms: Option<u64>,
    cooldown_ms: Option<u64>,
    drag_threshold: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawContact {
    submit_delay_ms: Option<u64>,
    reset_after_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawAnimation {
    enabled: Option<bool>,
    stagger_ms: Option<u64>,
    duration_ms: Option<u64>,
}

impl RawConfig {
    fn resolve(self) -> AppConfig {
        let defaults = AppConfig::default();
        let millis = |value: Option<u64>, fallback: Duration| {
            value.map(Duration::from_millis).unwrap_or(fallback)
        };

        AppConfig {
            carousel: CarouselConfig {
                interval: millis(self.carousel.interval_ms, defaults.carousel.interval),
                cooldown: millis(self.carousel.cooldown_ms, defaults.carousel.cooldown),
                drag_threshold: self
                    .carousel
                    .drag_threshold
                    .unwrap_or(defaults.carousel.drag_threshold),
            },
            contact: ContactConfig {
                submit_delay: millis(self.contact.submit_delay_ms, defaults.contact.submit_delay),
                reset_after: millis(self.contact.reset_after_ms, defaults.contact.reset_after),
            },
            animation: AnimationConfig {
                enabled: self.animation.enabled.unwrap_or(defaults.animation.enabled),
                stagger: millis(self.animation.stagger_ms, defaults.animation.stagger),
                duration: millis(self.animation.duration_ms, defaults.animation.duration),
            },
        }
    }
}

impl AppConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(content).context("invalid config JSON")?;
        let config = raw.resolve();
        if config.carousel.interval.is_zero() {
            anyhow::bail!("carousel.interval_ms must be greater than zero");
        }
        if config.carousel.drag_threshold == 0 {
            anyhow::bail!("carousel.drag_threshold must be at least one column");
        }
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("in {}", path.display()))
    }

    fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load the config file if there is one. A broken file falls back to the
    /// defaults; the returned message says why so the UI can show it.
    pub fn load_or_default() -> (Self, Option<String>) {
        let path = Self::default_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return (Self::default(), None);
        }

        match Self::load_from_path(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), ?config, "Config loaded");
                (config, None)
            }
            Err(e) => {
                let message = format!("{e:#}");
                tracing::warn!(error = %message, "Ignoring config file");
                (Self::default(), Some(format!("Config ignored: {}", message)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(
            r#"{"carousel":{"interval_ms":5000,"drag_threshold":50},"animation":{"enabled":false}}"#,
        )
        .unwrap();

        assert_eq!(config.carousel.interval, Duration::from_secs(5));
        assert_eq!(config.carousel.cooldown, Duration::from_secs(10));
        assert_eq!(config.carousel.drag_threshold, 50);
        assert!(!config.animation.enabled);
        assert_eq!(config.contact, ContactConfig::default());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(AppConfig::from_json(r#"{"carousel":{"speed":1}}"#).is_err());
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(AppConfig::from_json(r#"{"carousel":{"interval_ms":0}}"#).is_err());
    }

    #[test]
    fn test_zero_drag_threshold_rejected() {
        let err = AppConfig::from_json(r#"{"carousel":{"drag_threshold":0}}"#).unwrap_err();
        assert!(err.to_string().contains("drag_threshold"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(AppConfig::load_from_path(Path::new("/definitely/not/here.json")).is_err());
    }
}
