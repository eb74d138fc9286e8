use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::trace;

use crate::event::DomainEvent;

/// Events grouped by calendar day.
pub type EventBuckets<'a, E> = BTreeMap<NaiveDate, Vec<&'a E>>;

/// Groups `events` by the day they fall on, keeping only days in `grid`.
///
/// `grid` must be sorted ascending (as produced by
/// [`month_grid_dates`](crate::month_grid_dates)). Each event lands in at
/// most one bucket and buckets keep the input order. Events outside the grid
/// are dropped.
pub fn bind_events<'a, E: DomainEvent>(grid: &[NaiveDate], events: &'a [E]) -> EventBuckets<'a, E> {
    let mut buckets: EventBuckets<'a, E> = BTreeMap::new();

    for event in events {
        let day = event.date();
        if grid.binary_search(&day).is_err() {
            trace!("calendar: event {} on {day} is outside the grid", event.key());
            continue;
        }

        buckets.entry(day).or_default().push(event);
    }

    buckets
}
