use std::fs;
use std::path::Path;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Error, Result, SelectionMode};

const DEFAULT_WEEK_START: Weekday = Weekday::Sun;
pub const DEFAULT_MAX_EVENTS_PER_CELL: usize = 3;

/// User-facing calendar settings, stored as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    #[serde(with = "weekday_name")]
    pub week_starts_on: Weekday,
    pub selection_mode: SelectionMode,
    pub max_events_per_cell: usize,
    /// Render the padding days of the previous and next month.
    pub show_adjacent_days: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_starts_on: DEFAULT_WEEK_START,
            selection_mode: SelectionMode::default(),
            max_events_per_cell: DEFAULT_MAX_EVENTS_PER_CELL,
            show_adjacent_days: true,
        }
    }
}

impl CalendarConfig {
    /// Loads settings from `path`, falling back to defaults if the file
    /// does not exist yet.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            info!(
                "calendar settings not found at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: CalendarConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        info!("loaded calendar settings from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!("saved calendar settings to {}", path.display());
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.max_events_per_cell == 0 {
            return Err(Error::InvalidConfig(
                "max_events_per_cell must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Parses a weekday name such as `sunday`, `Sun` or `mon`.
pub fn parse_weekday(value: &str) -> Option<Weekday> {
    match value.trim().to_ascii_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tues" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thurs" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

mod weekday_name {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::weekday_name(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_weekday(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown weekday '{raw}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CalendarConfig::load(dir.path().join("calendar.json")).unwrap();
        assert_eq!(config, CalendarConfig::default());
        assert_eq!(config.week_starts_on, Weekday::Sun);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar.json");
        fs::write(&path, r#"{"week_starts_on": "Mon", "selection_mode": "range"}"#).unwrap();

        let config = CalendarConfig::load(&path).unwrap();
        assert_eq!(config.week_starts_on, Weekday::Mon);
        assert_eq!(config.selection_mode, SelectionMode::Range);
        assert_eq!(config.max_events_per_cell, DEFAULT_MAX_EVENTS_PER_CELL);
        assert!(config.show_adjacent_days);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings").join("calendar.json");
        let config = CalendarConfig {
            week_starts_on: Weekday::Sat,
            selection_mode: SelectionMode::Multiple,
            max_events_per_cell: 5,
            show_adjacent_days: false,
        };

        config.save(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains(r#""week_starts_on": "saturday""#));
        assert_eq!(CalendarConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar.json");

        fs::write(&path, r#"{"week_starts_on": "someday"}"#).unwrap();
        assert!(matches!(CalendarConfig::load(&path), Err(Error::Json(_))));

        fs::write(&path, r#"{"max_events_per_cell": 0}"#).unwrap();
        assert!(matches!(
            CalendarConfig::load(&path),
            Err(Error::InvalidConfig(_))
        ));
    }
}
