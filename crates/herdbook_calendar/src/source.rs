//! Where calendar events come from.
//!
//! Pages are handed an [`EventSource`] rather than reaching for a global
//! client, so the calendar can be driven by seeded data in tests and demos
//! and by a file or remote backend in the app.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate, NaiveTime};
use serde_json::Value;
use tracing::{info, warn};

use crate::{Error, EventCategory, HealthEvent, Result};

pub trait EventSource {
    /// Short name for logs.
    fn name(&self) -> &str;

    fn load(&mut self) -> Result<Vec<HealthEvent>>;
}

/// Seeded events around an anchor date.
#[derive(Debug, Clone)]
pub struct MockEventSource {
    anchor: NaiveDate,
}

impl MockEventSource {
    pub fn new(anchor: NaiveDate) -> Self {
        Self { anchor }
    }

    fn day(&self, offset: i64) -> NaiveDate {
        self.anchor + Duration::days(offset)
    }
}

impl EventSource for MockEventSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn load(&mut self) -> Result<Vec<HealthEvent>> {
        let at = |h: u32, m: u32| NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default();

        let events = vec![
            HealthEvent::new(
                "vac-001",
                "Clostridial booster",
                self.day(-12),
                EventCategory::Vaccination,
            )
            .with_animal("Ewe flock A")
            .with_time(at(8, 30)),
            HealthEvent::new(
                "par-001",
                "Lice infestation noted",
                self.day(-9),
                EventCategory::Parasite,
            )
            .with_animal("Ram pen")
            .with_description("Moderate, treated with pour-on"),
            HealthEvent::new(
                "nec-001",
                "Post-mortem: calf #214",
                self.day(-4),
                EventCategory::Necropsy,
            )
            .with_description("Suspected pneumonia, samples sent to lab"),
            HealthEvent::new(
                "chk-001",
                "Herd health visit",
                self.day(0),
                EventCategory::Checkup,
            )
            .with_time(at(10, 0)),
            HealthEvent::new(
                "vac-002",
                "BVD vaccination",
                self.day(0),
                EventCategory::Vaccination,
            )
            .with_animal("Heifers")
            .with_time(at(14, 0)),
            HealthEvent::new(
                "dew-001",
                "Worm drench",
                self.day(3),
                EventCategory::Deworming,
            )
            .with_animal("Lambs"),
            HealthEvent::new(
                "par-002",
                "Fecal egg count",
                self.day(6),
                EventCategory::Parasite,
            ),
            HealthEvent::new(
                "vac-003",
                "Lamb vaccination, first dose",
                self.day(10),
                EventCategory::Vaccination,
            )
            .with_animal("Lambs"),
            HealthEvent::new(
                "vac-004",
                "Lamb vaccination, second dose",
                self.day(38),
                EventCategory::Vaccination,
            )
            .with_animal("Lambs"),
            HealthEvent::new(
                "oth-001",
                "Hoof trimming",
                self.day(17),
                EventCategory::Other,
            )
            .with_color("#a16207"),
        ];

        Ok(events)
    }
}

/// Events read from a JSON array on disk.
///
/// Records that fail to parse are skipped with a warning; one bad record
/// never prevents the rest of the calendar from loading.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSource for JsonFileSource {
    fn name(&self) -> &str {
        "json"
    }

    fn load(&mut self) -> Result<Vec<HealthEvent>> {
        let contents = fs::read_to_string(&self.path)?;
        let events = parse_event_list(&contents)?;
        info!(
            "loaded {} calendar events from {}",
            events.len(),
            self.path.display()
        );
        Ok(events)
    }
}

/// Parses a JSON array of event records, skipping malformed entries.
pub fn parse_event_list(json: &str) -> Result<Vec<HealthEvent>> {
    let Value::Array(records) = serde_json::from_str::<Value>(json)? else {
        return Err(Error::Generic("expected a JSON array of events".to_owned()));
    };

    let mut events = Vec::with_capacity(records.len());
    for (idx, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<HealthEvent>(record) {
            Ok(event) => events.push(event),
            Err(err) => warn!("skipping calendar event #{idx}: {err}"),
        }
    }

    Ok(events)
}
