//! Calendar core for the Herdbook livestock health pages.
//!
//! Builds the six-week month grid, places health events on their days,
//! evaluates date selections and steps between months. Rendering is left to
//! `herdbook_calendar_ui`.

mod binder;
mod config;
mod cursor;
mod error;
mod event;
mod grid;
mod navigation;
mod page;
mod selection;
mod source;

pub use binder::{bind_events, EventBuckets};
pub use config::{parse_weekday, CalendarConfig, DEFAULT_MAX_EVENTS_PER_CELL};
pub use cursor::{CalendarCursor, MAX_YEAR, MIN_YEAR};
pub use error::{Error, Result};
pub use event::{parse_hex_rgb, DomainEvent, EventCategory, EventDate, HealthEvent};
pub use grid::{
    days_from_week_start, month_grid_dates, weekday_labels, DayCell, MonthGrid, DAYS_PER_WEEK,
    GRID_DAYS, GRID_WEEKS,
};
pub use navigation::{next_month, previous_month};
pub use page::{CalendarAction, CalendarPage};
pub use selection::{is_selected, Selection, SelectionMode};
pub use source::{parse_event_list, EventSource, JsonFileSource, MockEventSource};

pub use chrono::{NaiveDate, Weekday};
