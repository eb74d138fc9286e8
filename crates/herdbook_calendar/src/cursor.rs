//! The month currently displayed by a calendar page.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::{Error, Result};

/// Earliest year a cursor may point at.
pub const MIN_YEAR: i32 = 1;

/// Latest year a cursor may point at.
pub const MAX_YEAR: i32 = 9999;

const MIN_INDEX: i64 = MIN_YEAR as i64 * 12;
const MAX_INDEX: i64 = MAX_YEAR as i64 * 12 + 11;

/// A year and month with no day component.
///
/// The year is bounded by [`MIN_YEAR`] and [`MAX_YEAR`] so that the
/// padding days of any month grid are always representable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarCursor {
    year: i32,
    month: u32,
}

impl CalendarCursor {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth(month));
        }

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::YearOutOfRange(year));
        }

        Ok(Self { year, month })
    }

    /// The month containing `date`. Dates outside the supported year range
    /// are clamped to the nearest supported month.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_index(month_index(date.year(), date.month()))
    }

    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("valid month start date")
    }

    /// The day before the first of the following month.
    pub fn last_day(&self) -> NaiveDate {
        self.first_day()
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .expect("valid month end date")
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Returns true if `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Month and year for headers, e.g. "March 2025".
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Shifts by whole months, rolling the year over at month boundaries.
    ///
    /// Returns `None` if the result would leave the supported year range.
    pub fn checked_shift(&self, months: i32) -> Option<Self> {
        let index = self.index() + months as i64;
        if !(MIN_INDEX..=MAX_INDEX).contains(&index) {
            return None;
        }
        Some(Self::from_index(index))
    }

    /// Like [`checked_shift`](Self::checked_shift) but saturates at the
    /// edges of the supported range.
    ///
    /// Saturation means shifting out and back is not an identity at the
    /// edges: `0001-01` shifted by -1 then +1 lands on `0001-02`, and
    /// `9999-12` shifted by +1 then -1 lands on `9999-11`. Everywhere else
    /// `shift(n).shift(-n)` returns the starting month.
    pub fn shift(&self, months: i32) -> Self {
        Self::from_index(self.index() + months as i64)
    }

    fn index(&self) -> i64 {
        month_index(self.year, self.month)
    }

    fn from_index(index: i64) -> Self {
        let index = index.clamp(MIN_INDEX, MAX_INDEX);
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }
}

impl Default for CalendarCursor {
    fn default() -> Self {
        Self::today()
    }
}

impl fmt::Display for CalendarCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Parses `YYYY-MM`.
impl FromStr for CalendarCursor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDate(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

fn month_index(year: i32, month: u32) -> i64 {
    year as i64 * 12 + (month as i64 - 1)
}
