//! Month grid construction.
//!
//! A month is always laid out as six full weeks so the calendar keeps the
//! same shape from month to month. The grid starts on the configured first
//! day of the week on or before the 1st, and is padded with days from the
//! neighbouring months.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::debug;

use crate::binder::bind_events;
use crate::event::DomainEvent;
use crate::selection::{is_selected, Selection};
use crate::CalendarCursor;

pub const DAYS_PER_WEEK: usize = 7;
pub const GRID_WEEKS: usize = 6;
pub const GRID_DAYS: usize = DAYS_PER_WEEK * GRID_WEEKS;

/// The 42 consecutive dates shown for `cursor`, starting on `week_start`.
pub fn month_grid_dates(cursor: CalendarCursor, week_start: Weekday) -> [NaiveDate; GRID_DAYS] {
    let first_day = cursor.first_day();
    let start_offset = days_from_week_start(first_day.weekday(), week_start) as i64;
    let grid_start = first_day - Duration::days(start_offset);

    std::array::from_fn(|idx| grid_start + Duration::days(idx as i64))
}

/// Position of `day` within a week beginning on `week_start`, 0..=6.
pub fn days_from_week_start(day: Weekday, week_start: Weekday) -> u32 {
    (7 + day.num_days_from_monday() - week_start.num_days_from_monday()) % 7
}

/// Short weekday names in column order for a week beginning on `week_start`.
pub fn weekday_labels(week_start: Weekday) -> [&'static str; DAYS_PER_WEEK] {
    let mut day = week_start;
    std::array::from_fn(|_| {
        let label = weekday_label(day);
        day = day.succ();
        label
    })
}

fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// One day of a [`MonthGrid`].
#[derive(Debug)]
pub struct DayCell<'a, E> {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    /// Events on this day, in the order they were supplied.
    pub events: Vec<&'a E>,
}

impl<E> DayCell<'_, E> {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// A fully evaluated month view: 42 day cells with selection, today and
/// event buckets filled in.
///
/// Grids are rebuilt wholesale whenever the cursor, the selection or the
/// event list changes; cells are never patched in place.
#[derive(Debug)]
pub struct MonthGrid<'a, E> {
    cursor: CalendarCursor,
    week_start: Weekday,
    cells: Vec<DayCell<'a, E>>,
}

impl<'a, E: DomainEvent> MonthGrid<'a, E> {
    pub fn build(
        cursor: CalendarCursor,
        week_start: Weekday,
        today: NaiveDate,
        events: &'a [E],
        selection: &Selection,
    ) -> Self {
        let dates = month_grid_dates(cursor, week_start);
        let mut buckets: BTreeMap<NaiveDate, Vec<&'a E>> = bind_events(&dates, events);

        let cells: Vec<DayCell<'a, E>> = dates
            .iter()
            .map(|&date| DayCell {
                date,
                is_current_month: cursor.contains(date),
                is_today: date == today,
                is_selected: is_selected(date, selection),
                events: buckets.remove(&date).unwrap_or_default(),
            })
            .collect();

        debug!(
            "calendar: built grid for {cursor} ({} events bound)",
            cells.iter().map(|cell| cell.events.len()).sum::<usize>()
        );

        Self {
            cursor,
            week_start,
            cells,
        }
    }
}

impl<'a, E> MonthGrid<'a, E> {
    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn cells(&self) -> &[DayCell<'a, E>] {
        &self.cells
    }

    /// The grid as six rows of seven days.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell<'a, E>]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell<'a, E>> {
        let first = self.first_date();
        if date < first {
            return None;
        }
        let idx = (date - first).num_days() as usize;
        self.cells.get(idx)
    }

    pub fn first_date(&self) -> NaiveDate {
        self.cells[0].date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.cells[GRID_DAYS - 1].date
    }

    pub fn weekday_labels(&self) -> [&'static str; DAYS_PER_WEEK] {
        weekday_labels(self.week_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventCategory, HealthEvent};
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cursor(y: i32, m: u32) -> CalendarCursor {
        CalendarCursor::new(y, m).unwrap()
    }

    #[test]
    fn march_2025_sunday_start() {
        let dates = month_grid_dates(cursor(2025, 3), Weekday::Sun);
        assert_eq!(dates[0], ymd(2025, 2, 23));
        assert_eq!(dates[41], ymd(2025, 4, 5));
    }

    #[test]
    fn march_2025_monday_start() {
        let dates = month_grid_dates(cursor(2025, 3), Weekday::Mon);
        assert_eq!(dates[0], ymd(2025, 2, 24));
        assert_eq!(dates[0].weekday(), Weekday::Mon);
        assert_eq!(dates[41], ymd(2025, 4, 6));
    }

    #[test]
    fn month_starting_on_week_start_has_no_leading_padding() {
        // June 2025 begins on a Sunday.
        let dates = month_grid_dates(cursor(2025, 6), Weekday::Sun);
        assert_eq!(dates[0], ymd(2025, 6, 1));
        assert_eq!(dates[41], ymd(2025, 7, 12));
    }

    #[test]
    fn december_rolls_into_january() {
        let dates = month_grid_dates(cursor(2024, 12), Weekday::Sun);
        assert_eq!(dates[0], ymd(2024, 12, 1));
        assert!(dates.contains(&ymd(2024, 12, 31)));
        assert!(dates.contains(&ymd(2025, 1, 1)));
    }

    #[test]
    fn weekday_labels_rotate() {
        assert_eq!(
            weekday_labels(Weekday::Sun),
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
        assert_eq!(
            weekday_labels(Weekday::Mon),
            ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
    }

    #[test]
    fn build_marks_cells() {
        let events = vec![
            HealthEvent::new("a", "Vaccinate lambs", ymd(2025, 3, 15), EventCategory::Vaccination),
            HealthEvent::new("b", "Lice check", ymd(2025, 4, 2), EventCategory::Parasite),
            HealthEvent::new("c", "Out of view", ymd(2025, 5, 20), EventCategory::Checkup),
        ];
        let selection = Selection::Single(Some(ymd(2025, 3, 20)));
        let grid = MonthGrid::build(
            cursor(2025, 3),
            Weekday::Sun,
            ymd(2025, 3, 10),
            &events,
            &selection,
        );

        assert_eq!(grid.cells().len(), GRID_DAYS);
        assert_eq!(grid.weeks().count(), GRID_WEEKS);

        let today = grid.cell(ymd(2025, 3, 10)).unwrap();
        assert!(today.is_today);
        assert!(today.is_current_month);

        let selected = grid.cell(ymd(2025, 3, 20)).unwrap();
        assert!(selected.is_selected);

        let padding = grid.cell(ymd(2025, 2, 23)).unwrap();
        assert!(!padding.is_current_month);

        let keys: Vec<&str> = grid
            .cells()
            .iter()
            .flat_map(|cell| cell.events.iter().map(|e| e.id.as_str()))
            .collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert!(grid.cell(ymd(2025, 4, 2)).unwrap().has_events());
    }

    #[test]
    fn cell_lookup_outside_grid() {
        let events: Vec<HealthEvent> = Vec::new();
        let grid = MonthGrid::build(
            cursor(2025, 3),
            Weekday::Sun,
            ymd(2025, 3, 10),
            &events,
            &Selection::default(),
        );
        assert!(grid.cell(ymd(2025, 2, 22)).is_none());
        assert!(grid.cell(ymd(2025, 4, 6)).is_none());
        assert_eq!(grid.first_date(), ymd(2025, 2, 23));
        assert_eq!(grid.last_date(), ymd(2025, 4, 5));
    }
}
