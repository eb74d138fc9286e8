use chrono::NaiveDate;
use egui::Color32;
use herdbook_calendar::{HealthEvent, Selection};

pub const TODAY_FILL: Color32 = Color32::from_rgba_premultiplied(0, 91, 187, 40);
pub const ADJACENT_FILL: Color32 = Color32::from_gray(20);
pub const CELL_STROKE: Color32 = Color32::from_gray(60);

pub fn event_color(event: &HealthEvent) -> Color32 {
    let [r, g, b] = event.rgb();
    Color32::from_rgb(r, g, b)
}

/// How many events don't fit in a cell showing at most `max`.
pub fn overflow_count(total: usize, max: usize) -> usize {
    total.saturating_sub(max)
}

/// e.g. "09:30 · Heifers"
pub fn event_subtitle(event: &HealthEvent) -> Option<String> {
    let time = event.time_of_day().map(|t| t.format("%H:%M").to_string());
    match (time, event.animal.as_deref()) {
        (Some(time), Some(animal)) => Some(format!("{time} · {animal}")),
        (Some(time), None) => Some(time),
        (None, Some(animal)) => Some(animal.to_owned()),
        (None, None) => None,
    }
}

pub fn selection_summary(selection: &Selection) -> String {
    match selection {
        Selection::Single(Some(day)) => format_day(*day),
        Selection::Multiple(days) if days.len() == 1 => days
            .iter()
            .next()
            .map(|day| format_day(*day))
            .unwrap_or_default(),
        Selection::Multiple(days) if !days.is_empty() => format!("{} days selected", days.len()),
        Selection::Range { .. } => match selection.range_bounds() {
            Some((from, to)) if from == to => format_day(from),
            Some((from, to)) => format!("{} – {}", from.format("%b %e"), format_day(to)),
            None => "No dates selected".to_owned(),
        },
        _ => "No date selected".to_owned(),
    }
}

fn format_day(day: NaiveDate) -> String {
    day.format("%b %e, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use herdbook_calendar::EventCategory;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn overflow() {
        assert_eq!(overflow_count(5, 3), 2);
        assert_eq!(overflow_count(2, 3), 0);
    }

    #[test]
    fn colors_follow_overrides() {
        let event = HealthEvent::new("a", "x", ymd(2025, 3, 1), EventCategory::Vaccination);
        assert_eq!(event_color(&event), Color32::from_rgb(0x3b, 0x82, 0xf6));

        let event = event.with_color("#102030");
        assert_eq!(event_color(&event), Color32::from_rgb(0x10, 0x20, 0x30));
    }

    #[test]
    fn subtitles() {
        let event = HealthEvent::new("a", "x", ymd(2025, 3, 1), EventCategory::Deworming);
        assert_eq!(event_subtitle(&event), None);

        let event = event
            .with_time(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
            .with_animal("Heifers");
        assert_eq!(event_subtitle(&event).as_deref(), Some("09:30 · Heifers"));
    }

    #[test]
    fn summaries() {
        assert_eq!(selection_summary(&Selection::Single(None)), "No date selected");
        assert_eq!(
            selection_summary(&Selection::Single(Some(ymd(2025, 3, 15)))),
            "Mar 15, 2025"
        );
        assert_eq!(
            selection_summary(&Selection::range(ymd(2025, 3, 20), ymd(2025, 3, 10))),
            "Mar 10 – Mar 20, 2025"
        );
        assert_eq!(
            selection_summary(&Selection::Multiple(BTreeSet::from([
                ymd(2025, 3, 1),
                ymd(2025, 3, 2)
            ]))),
            "2 days selected"
        );
    }
}
