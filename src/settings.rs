//! Game settings and preferences
//!
//! Tuning knobs only, never gameplay state. When a settings file sits next to
//! the binary it is read once at startup; otherwise the defaults apply, and
//! malformed files degrade to the defaults with a logged warning.

use serde::{Deserialize, Serialize};

/// Runtime preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty the first round starts at
    pub start_level: f32,
    /// Let the sim steer the player (headless demo)
    pub autopilot: bool,
    /// Stop after this many rounds; `None` plays until a loss
    pub max_rounds: Option<u32>,
    /// Log every drained input event at debug level
    pub log_events: bool,
    /// Pace rounds at the real tick rate; off for headless runs
    pub paced: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_level: 1.0,
            autopilot: false,
            max_rounds: None,
            log_events: true,
            paced: true,
        }
    }
}

impl Settings {
    /// Settings file read at startup when present
    pub const FILE_NAME: &'static str = "crossy-rpg-settings.json";

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load from [`Self::FILE_NAME`], falling back to defaults
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE_NAME) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", Self::FILE_NAME);
                    settings
                }
                Err(err) => {
                    log::warn!("malformed {}: {err}; using defaults", Self::FILE_NAME);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write the current settings next to the binary
    pub fn save(&self) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(Self::FILE_NAME, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            start_level: 2.5,
            autopilot: true,
            max_rounds: Some(7),
            log_events: false,
            paced: false,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings = Settings::from_json(r#"{ "start_level": 3.0 }"#).unwrap();
        assert_eq!(settings.start_level, 3.0);
        assert_eq!(settings.max_rounds, None);
        assert!(settings.paced);
    }
}
