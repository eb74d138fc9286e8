//! Month-by-month navigation. The cursor itself lives with the page; these
//! functions only compute the next value.
//!
//! Both saturate at the supported range, so `next_month` of `9999-12` is
//! `9999-12` and `previous_month` of `0001-01` is `0001-01`.

use tracing::debug;

use crate::CalendarCursor;

pub fn next_month(cursor: CalendarCursor) -> CalendarCursor {
    let next = cursor.shift(1);
    debug!("calendar: next month {cursor} -> {next}");
    next
}

pub fn previous_month(cursor: CalendarCursor) -> CalendarCursor {
    let prev = cursor.shift(-1);
    debug!("calendar: previous month {cursor} -> {prev}");
    prev
}
