//! Month grid invariants checked across two centuries of months and every
//! week start.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use herdbook_calendar::{
    bind_events, is_selected, month_grid_dates, next_month, previous_month, CalendarCursor,
    DomainEvent, EventCategory, HealthEvent, MonthGrid, Selection, GRID_DAYS,
};

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn cursors() -> impl Iterator<Item = CalendarCursor> {
    (1900..=2100).flat_map(|year| (1..=12).map(move |month| CalendarCursor::new(year, month).unwrap()))
}

#[test]
fn grids_are_42_contiguous_week_aligned_days() {
    for cursor in cursors() {
        for week_start in WEEKDAYS {
            let dates = month_grid_dates(cursor, week_start);
            assert_eq!(dates.len(), GRID_DAYS);
            assert_eq!(dates[0].weekday(), week_start, "{cursor} {week_start}");
            for pair in dates.windows(2) {
                assert_eq!(pair[1], pair[0] + Duration::days(1), "{cursor}");
            }
        }
    }
}

#[test]
fn grids_cover_their_month() {
    let events: Vec<HealthEvent> = Vec::new();
    for cursor in cursors().step_by(7) {
        for week_start in [Weekday::Sun, Weekday::Mon] {
            let grid = MonthGrid::build(
                cursor,
                week_start,
                ymd(2000, 1, 1),
                &events,
                &Selection::default(),
            );

            let in_month: Vec<NaiveDate> = grid
                .cells()
                .iter()
                .filter(|cell| cell.is_current_month)
                .map(|cell| cell.date)
                .collect();

            assert_eq!(in_month.len() as u32, cursor.days_in_month(), "{cursor}");
            assert_eq!(in_month[0], cursor.first_day());
            assert_eq!(*in_month.last().unwrap(), cursor.last_day());
        }
    }
}

#[test]
fn navigation_round_trips_everywhere() {
    for cursor in cursors() {
        assert_eq!(previous_month(next_month(cursor)), cursor);
        assert_eq!(next_month(previous_month(cursor)), cursor);
    }
}

#[test]
fn binding_is_complete_and_exclusive() {
    let cursor = CalendarCursor::new(2024, 2).unwrap();
    let grid = month_grid_dates(cursor, Weekday::Sun);
    let events: Vec<HealthEvent> = (0..90)
        .map(|n| {
            HealthEvent::new(
                format!("e{n}"),
                "check",
                ymd(2024, 1, 1) + Duration::days(n),
                EventCategory::Checkup,
            )
        })
        .collect();

    let buckets = bind_events(&grid, &events);
    for event in &events {
        let found: Vec<NaiveDate> = buckets
            .iter()
            .filter(|(_, bucket)| bucket.iter().any(|e| e.key() == event.key()))
            .map(|(day, _)| *day)
            .collect();

        if grid.contains(&event.date()) {
            assert_eq!(found, vec![event.date()]);
        } else {
            assert!(found.is_empty());
        }
    }
}

#[test]
fn concrete_scenarios() {
    let march = CalendarCursor::new(2025, 3).unwrap();
    let dates = month_grid_dates(march, Weekday::Sun);
    assert_eq!(dates[0], ymd(2025, 2, 23));
    assert_eq!(dates[41], ymd(2025, 4, 5));

    let events = vec![
        HealthEvent::new(
            "late",
            "late",
            "2025-03-15T23:59:00".parse::<herdbook_calendar::EventDate>().unwrap(),
            EventCategory::Vaccination,
        ),
        HealthEvent::new(
            "early",
            "early",
            "2025-03-15T00:01:00".parse::<herdbook_calendar::EventDate>().unwrap(),
            EventCategory::Vaccination,
        ),
    ];
    let buckets = bind_events(&dates, &events);
    assert_eq!(buckets[&ymd(2025, 3, 15)].len(), 2);

    let reversed = Selection::range(ymd(2025, 3, 20), ymd(2025, 3, 10));
    assert!(is_selected(ymd(2025, 3, 15), &reversed));
}

#[test]
fn single_selection_distinguishes_days() {
    let start = ymd(2025, 1, 1);
    for n in 0..60 {
        let day = start + Duration::days(n);
        assert!(is_selected(day, &Selection::Single(Some(day))));
        assert!(!is_selected(day, &Selection::Single(Some(day + Duration::days(1)))));
    }
}
