use chrono::{Local, NaiveDate, Weekday};
use tracing::{debug, info, warn};

use crate::navigation::{next_month, previous_month};
use crate::{
    CalendarConfig, CalendarCursor, DomainEvent, EventSource, HealthEvent, MonthGrid, Result,
    Selection, SelectionMode,
};

/// Things the user can do to a calendar page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarAction {
    PreviousMonth,
    NextMonth,
    Today,
    ClickDay(NaiveDate),
    SetSelectionMode(SelectionMode),
    Refresh,
}

/// State owned by a calendar page: the displayed month, the current
/// selection and the loaded events.
///
/// Everything the grid shows is derived from this on each call to
/// [`CalendarPage::grid`].
#[derive(Debug, Clone)]
pub struct CalendarPage {
    cursor: CalendarCursor,
    selection: Selection,
    events: Vec<HealthEvent>,
    config: CalendarConfig,
    today: NaiveDate,
}

impl CalendarPage {
    pub fn new(config: CalendarConfig) -> Self {
        Self::with_today(config, Local::now().date_naive())
    }

    /// A page whose notion of "today" is fixed, used by tests and previews.
    pub fn with_today(config: CalendarConfig, today: NaiveDate) -> Self {
        Self {
            cursor: CalendarCursor::from_date(today),
            selection: Selection::empty(config.selection_mode),
            events: Vec::new(),
            config,
            today,
        }
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: CalendarCursor) {
        self.cursor = cursor;
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn events(&self) -> &[HealthEvent] {
        &self.events
    }

    pub fn set_events(&mut self, events: Vec<HealthEvent>) {
        self.events = events;
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Moves "today" forward, e.g. when the app stays open past midnight.
    /// The cursor is left alone.
    pub fn set_today(&mut self, today: NaiveDate) {
        if self.today != today {
            debug!("calendar: today is now {today}");
            self.today = today;
        }
    }

    pub fn set_week_start(&mut self, week_start: Weekday) {
        self.config.week_starts_on = week_start;
    }

    /// Rebuilds the month grid from the current state.
    pub fn grid(&self) -> MonthGrid<'_, HealthEvent> {
        MonthGrid::build(
            self.cursor,
            self.config.week_starts_on,
            self.today,
            &self.events,
            &self.selection,
        )
    }

    /// Applies `action`. Returns true if the caller should reload events
    /// from its source.
    pub fn process_action(&mut self, action: CalendarAction) -> bool {
        debug!("calendar action: {action:?}");
        match action {
            CalendarAction::PreviousMonth => self.cursor = previous_month(self.cursor),
            CalendarAction::NextMonth => self.cursor = next_month(self.cursor),
            CalendarAction::Today => self.cursor = CalendarCursor::from_date(self.today),
            CalendarAction::ClickDay(day) => {
                self.selection = self.selection.clicked(day);
                if !self.cursor.contains(day) {
                    self.cursor = CalendarCursor::from_date(day);
                }
            }
            CalendarAction::SetSelectionMode(mode) => {
                self.config.selection_mode = mode;
                self.selection = self.selection.with_mode(mode);
            }
            CalendarAction::Refresh => return true,
        }
        false
    }

    /// Replaces the events with a fresh load from `source`. On failure the
    /// previously loaded events are kept.
    pub fn refresh(&mut self, source: &mut dyn EventSource) -> Result<usize> {
        match source.load() {
            Ok(events) => {
                info!(
                    "calendar: {} events from {} source",
                    events.len(),
                    source.name()
                );
                self.events = events;
                Ok(self.events.len())
            }
            Err(err) => {
                warn!("calendar: failed to load from {} source: {err}", source.name());
                Err(err)
            }
        }
    }

    /// Events on `day`, in load order.
    pub fn events_on(&self, day: NaiveDate) -> Vec<&HealthEvent> {
        self.events.iter().filter(|e| e.date() == day).collect()
    }

    /// Events on every selected day, in date order.
    pub fn selected_events(&self) -> Vec<&HealthEvent> {
        let mut selected: Vec<&HealthEvent> = self
            .events
            .iter()
            .filter(|e| self.selection.contains(e.date()))
            .collect();
        selected.sort_by_key(|e| e.date());
        selected
    }

    /// The next `limit` events on or after today, earliest first. Events on
    /// the same day keep their load order.
    pub fn upcoming(&self, limit: usize) -> Vec<&HealthEvent> {
        let mut upcoming: Vec<&HealthEvent> = self
            .events
            .iter()
            .filter(|e| e.date() >= self.today)
            .collect();
        upcoming.sort_by_key(|e| e.date());
        upcoming.truncate(limit);
        upcoming
    }
}
