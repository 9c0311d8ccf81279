// Settings module
// User preferences loaded from the TOML config file

use serde::{Deserialize, Serialize};

/// Application settings. Everything here has a sensible default so a missing
/// or partial config file never blocks startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// IANA-style zone id used for event display and the topbar clock.
    pub timezone: String,
    /// Whether the filter side panel starts open.
    pub show_side_panel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timezone: "Asia/Karachi".to_string(),
            show_side_panel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.timezone, "Asia/Karachi");
        assert!(settings.show_side_panel);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("timezone = \"Europe/London\"").unwrap();
        assert_eq!(settings.timezone, "Europe/London");
        assert!(settings.show_side_panel);
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            timezone: "America/Denver".to_string(),
            show_side_panel: false,
            ..Settings::default()
        };
        let text = toml::to_string(&settings).unwrap();
        let loaded: Settings = toml::from_str(&text).unwrap();
        assert_eq!(loaded, settings);
    }
}
