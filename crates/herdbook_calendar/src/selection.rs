//! Date selection state and the rules for which days render as selected.
//!
//! The page owns the [`Selection`]. Evaluation is a pure read, and
//! [`Selection::clicked`] returns the new value instead of mutating so the
//! owner decides whether to apply it.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Multiple,
    Range,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(Option<NaiveDate>),
    Multiple(BTreeSet<NaiveDate>),
    /// An inclusive range. `to` absent means only `from` is picked; both
    /// absent means nothing is picked yet.
    Range {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Single(None)
    }
}

impl Selection {
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Selection::Single(None),
            SelectionMode::Multiple => Selection::Multiple(BTreeSet::new()),
            SelectionMode::Range => Selection::Range {
                from: None,
                to: None,
            },
        }
    }

    pub fn range(from: NaiveDate, to: NaiveDate) -> Self {
        Selection::Range {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Single(_) => SelectionMode::Single,
            Selection::Multiple(_) => SelectionMode::Multiple,
            Selection::Range { .. } => SelectionMode::Range,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Single(day) => day.is_none(),
            Selection::Multiple(days) => days.is_empty(),
            Selection::Range { from, to } => from.is_none() && to.is_none(),
        }
    }

    /// Swaps reversed range bounds. Other selections are returned as-is.
    pub fn normalized(&self) -> Self {
        match *self {
            Selection::Range {
                from: Some(from),
                to: Some(to),
            } if from > to => Selection::range(to, from),
            _ => self.clone(),
        }
    }

    /// Inclusive bounds of a range selection, normalized. A half-open range
    /// yields the same day twice.
    pub fn range_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let Selection::Range { from, to } = *self else {
            return None;
        };

        match (from, to) {
            (Some(a), Some(b)) => Some((a.min(b), a.max(b))),
            (Some(day), None) | (None, Some(day)) => Some((day, day)),
            (None, None) => None,
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        is_selected(day, self)
    }

    /// The selection that results from the user clicking `day`.
    ///
    /// Single mode selects the day. Multiple mode toggles it. Range mode
    /// anchors on the first click, closes the range on the second click
    /// (swapping bounds if the second day is earlier), and starts a new
    /// range on the third.
    pub fn clicked(&self, day: NaiveDate) -> Self {
        match self {
            Selection::Single(_) => Selection::Single(Some(day)),
            Selection::Multiple(days) => {
                let mut days = days.clone();
                if !days.remove(&day) {
                    days.insert(day);
                }
                Selection::Multiple(days)
            }
            Selection::Range {
                from: Some(from),
                to: None,
            } => Selection::range(*from, day).normalized(),
            Selection::Range { .. } => Selection::Range {
                from: Some(day),
                to: None,
            },
        }
    }

    /// Carries the selected days over into another mode where that makes
    /// sense, otherwise starts empty.
    pub fn with_mode(&self, mode: SelectionMode) -> Self {
        if self.mode() == mode {
            return self.clone();
        }

        match (self, mode) {
            (Selection::Single(Some(day)), SelectionMode::Multiple) => {
                Selection::Multiple(BTreeSet::from([*day]))
            }
            (Selection::Single(Some(day)), SelectionMode::Range) => Selection::Range {
                from: Some(*day),
                to: None,
            },
            _ => Selection::empty(mode),
        }
    }
}

/// Whether `day` renders as selected under `selection`.
///
/// Range bounds supplied in reverse order are treated as if swapped.
pub fn is_selected(day: NaiveDate, selection: &Selection) -> bool {
    match selection {
        Selection::Single(selected) => *selected == Some(day),
        Selection::Multiple(days) => days.contains(&day),
        Selection::Range { .. } => selection
            .range_bounds()
            .is_some_and(|(from, to)| from <= day && day <= to),
    }
}
