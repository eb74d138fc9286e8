//! Health events shown on the calendar.
//!
//! The grid only needs [`DomainEvent`]; [`HealthEvent`] is the concrete
//! record the event sources and UI work with.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

/// What the calendar core needs from an event: a stable key and the
/// calendar day it falls on.
pub trait DomainEvent {
    fn key(&self) -> &str;
    fn date(&self) -> NaiveDate;
}

impl<T: DomainEvent + ?Sized> DomainEvent for &T {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn date(&self) -> NaiveDate {
        (**self).date()
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A date as supplied by a data source, possibly with a time of day and a
/// UTC offset.
///
/// Only [`day`](Self::day) takes part in calendar placement. The day is the
/// one written in the source, so `2025-03-15T23:30:00-05:00` lands on
/// March 15 regardless of offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventDate {
    date: NaiveDate,
    time: Option<NaiveTime>,
    offset: Option<FixedOffset>,
}

impl EventDate {
    pub fn from_day(date: NaiveDate) -> Self {
        Self {
            date,
            time: None,
            offset: None,
        }
    }

    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self {
            date: datetime.date(),
            time: Some(datetime.time()),
            offset: None,
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }
}

impl From<NaiveDate> for EventDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_day(date)
    }
}

impl From<NaiveDateTime> for EventDate {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from_datetime(datetime)
    }
}

impl FromStr for EventDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            let local = dt.naive_local();
            return Ok(Self {
                date: local.date(),
                time: Some(local.time()),
                offset: Some(*dt.offset()),
            });
        }

        for format in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Self::from_datetime(dt));
            }
        }

        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self::from_day)
            .map_err(|_| Error::InvalidDate(s.to_string()))
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(time) = self.time else {
            return write!(f, "{}", self.date.format("%Y-%m-%d"));
        };

        // %.f is empty for whole seconds
        let datetime = self.date.and_time(time).format("%Y-%m-%dT%H:%M:%S%.f");
        match self.offset {
            Some(offset) => write!(f, "{datetime}{offset}"),
            None => write!(f, "{datetime}"),
        }
    }
}

impl Serialize for EventDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The kind of health record an event represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventCategory {
    Vaccination,
    Deworming,
    Parasite,
    Necropsy,
    Checkup,
    #[default]
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Vaccination,
        EventCategory::Deworming,
        EventCategory::Parasite,
        EventCategory::Necropsy,
        EventCategory::Checkup,
        EventCategory::Other,
    ];

    /// Unknown tags map to [`EventCategory::Other`].
    pub fn from_tag(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "vaccination" | "vaccine" => EventCategory::Vaccination,
            "deworming" => EventCategory::Deworming,
            "parasite" | "infestation" => EventCategory::Parasite,
            "necropsy" | "pathology" | "post-mortem" => EventCategory::Necropsy,
            "checkup" => EventCategory::Checkup,
            _ => EventCategory::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Vaccination => "vaccination",
            EventCategory::Deworming => "deworming",
            EventCategory::Parasite => "parasite",
            EventCategory::Necropsy => "necropsy",
            EventCategory::Checkup => "checkup",
            EventCategory::Other => "other",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            EventCategory::Vaccination => "Vaccination",
            EventCategory::Deworming => "Deworming",
            EventCategory::Parasite => "Parasite",
            EventCategory::Necropsy => "Necropsy",
            EventCategory::Checkup => "Checkup",
            EventCategory::Other => "Other",
        }
    }

    pub fn default_rgb(&self) -> [u8; 3] {
        match self {
            EventCategory::Vaccination => [0x3b, 0x82, 0xf6],
            EventCategory::Deworming => [0x10, 0xb9, 0x81],
            EventCategory::Parasite => [0xf5, 0x9e, 0x0b],
            EventCategory::Necropsy => [0x6b, 0x72, 0x80],
            EventCategory::Checkup => [0x8b, 0x5c, 0xf6],
            EventCategory::Other => [0x94, 0xa3, 0xb8],
        }
    }
}

impl Serialize for EventCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(EventCategory::from_tag(&raw))
    }
}

/// A scheduled or recorded livestock health event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthEvent {
    pub id: String,
    pub title: String,
    pub date: EventDate,
    #[serde(default)]
    pub category: EventCategory,
    /// Display color override, `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "clock_time"
    )]
    pub time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Animal or group tag the event applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal: Option<String>,
}

impl HealthEvent {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<EventDate>,
        category: EventCategory,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            category,
            color: None,
            time: None,
            description: None,
            animal: None,
        }
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_animal(mut self, animal: impl Into<String>) -> Self {
        self.animal = Some(animal.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The explicit time, falling back to the time carried by the date.
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        self.time.or(self.date.time())
    }

    /// The color override if it parses, otherwise the category color.
    pub fn rgb(&self) -> [u8; 3] {
        self.color
            .as_deref()
            .and_then(parse_hex_rgb)
            .unwrap_or_else(|| self.category.default_rgb())
    }
}

impl DomainEvent for HealthEvent {
    fn key(&self) -> &str {
        &self.id
    }

    fn date(&self) -> NaiveDate {
        self.date.day()
    }
}

/// Parses `#rrggbb` or `rrggbb`.
pub fn parse_hex_rgb(value: &str) -> Option<[u8; 3]> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |idx: usize| u8::from_str_radix(&hex[idx..idx + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// `HH:MM` with optional seconds on input, `HH:MM` on output.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => serializer.collect_str(&time.format("%H:%M")),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };

        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        NaiveTime::parse_from_str(raw, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
