use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::render::diagram::playback::Speed;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "paradeck";

pub const KEYS: &[&str] = &[
    "defaults.fullscreen",
    "defaults.reduced_motion",
    "defaults.speed",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Request fullscreen when the presentation starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullscreen: Option<bool>,

    /// Start diagrams paused and skip entrance animations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,

    /// Initial diagram playback speed: 0.5, 1 or 2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `paradeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!(error = %e, "using default config");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# paradeck configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.fullscreen" => {
                let flag = parse_bool(key, value)?;
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .fullscreen = Some(flag);
            }
            "defaults.reduced_motion" => {
                let flag = parse_bool(key, value)?;
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .reduced_motion = Some(flag);
            }
            "defaults.speed" => {
                let speed: Speed = value.parse()?;
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .speed = Some(speed.multiplier().to_string());
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: {}",
                KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Whether fullscreen is requested on start; defaults to true.
    pub fn fullscreen(&self) -> bool {
        self.defaults
            .as_ref()
            .and_then(|d| d.fullscreen)
            .unwrap_or(true)
    }

    pub fn reduced_motion(&self) -> bool {
        self.defaults
            .as_ref()
            .and_then(|d| d.reduced_motion)
            .unwrap_or(false)
    }

    /// Configured diagram speed. An unreadable value falls back to normal speed.
    pub fn speed(&self) -> Speed {
        let Some(raw) = self.defaults.as_ref().and_then(|d| d.speed.as_deref()) else {
            return Speed::default();
        };
        raw.parse().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring defaults.speed");
            Speed::default()
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "yes" | "on" => Ok(true),
        "false" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("Invalid value for {key}: {value}. Must be 'true' or 'false'."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_when_empty() {
        let config = Config::default();
        assert!(config.fullscreen());
        assert!(!config.reduced_motion());
        assert_eq!(config.speed(), Speed::Normal);
    }

    #[rstest]
    #[case("defaults.fullscreen", "false")]
    #[case("defaults.reduced_motion", "true")]
    #[case("defaults.speed", "2")]
    #[case("defaults.speed", "0.5x")]
    fn test_set_accepts_valid_values(#[case] key: &str, #[case] value: &str) {
        let mut config = Config::default();
        assert!(config.set(key, value).is_ok());
        assert!(config.defaults.is_some());
    }

    #[rstest]
    #[case("defaults.fullscreen", "maybe")]
    #[case("defaults.reduced_motion", "1")]
    #[case("defaults.speed", "3")]
    #[case("defaults.theme", "dark")]
    fn test_set_rejects_invalid(#[case] key: &str, #[case] value: &str) {
        let mut config = Config::default();
        assert!(config.set(key, value).is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_set_speed_is_normalised() {
        let mut config = Config::default();
        config.set("defaults.speed", "2x").unwrap();
        assert_eq!(config.defaults.as_ref().unwrap().speed.as_deref(), Some("2"));
        assert_eq!(config.speed(), Speed::Double);
    }

    #[test]
    fn test_unreadable_speed_falls_back() {
        let config = Config {
            defaults: Some(DefaultsConfig {
                speed: Some("warp".to_string()),
                ..Default::default()
            }),
        };
        assert_eq!(config.speed(), Speed::Normal);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "defaults:\n  fullscreen: false\n  reduced_motion: true\n  speed: \"0.5\"\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(!config.fullscreen());
        assert!(config.reduced_motion());
        assert_eq!(config.speed(), Speed::Half);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("paradeck-config-{}", std::process::id()));
        let path = dir.join(FILENAME);
        let mut config = Config::default();
        config.set("defaults.reduced_motion", "true").unwrap();
        config.set("defaults.speed", "1").unwrap();
        config.save_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# paradeck configuration\n"));
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_friendly() {
        let path = std::env::temp_dir().join("paradeck-does-not-exist/config.yaml");
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("No config found"));
    }
}
