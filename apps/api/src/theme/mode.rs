use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    /// Reads a persisted preference value.
    ///
    /// Anything stored counts as a preference: only `dark` selects dark mode,
    /// every other non-empty value renders light. An empty value means nothing
    /// was stored.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim() {
            "" => None,
            "dark" => Some(DisplayMode::Dark),
            _ => Some(DisplayMode::Light),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse for config and request input.
impl FromStr for DisplayMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(DisplayMode::Light),
            "dark" => Ok(DisplayMode::Dark),
            other => Err(AppError::Validation(format!(
                "unknown display mode '{other}', expected 'light' or 'dark'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(DisplayMode::Light.toggled(), DisplayMode::Dark);
        assert_eq!(DisplayMode::Dark.toggled().toggled(), DisplayMode::Dark);
    }

    #[test]
    fn test_from_stored_treats_unknown_values_as_light() {
        assert_eq!(DisplayMode::from_stored("dark"), Some(DisplayMode::Dark));
        assert_eq!(DisplayMode::from_stored("light"), Some(DisplayMode::Light));
        assert_eq!(DisplayMode::from_stored("sepia"), Some(DisplayMode::Light));
        assert_eq!(DisplayMode::from_stored(""), None);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("Dark".parse::<DisplayMode>().unwrap(), DisplayMode::Dark);
        assert!("sepia".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&DisplayMode::Dark).unwrap(),
            "\"dark\""
        );
        let m: DisplayMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(m, DisplayMode::Light);
    }
}
