use std::collections::BTreeSet;
use std::path::PathBuf;

use herdbook_calendar::{parse_weekday, CalendarCursor, Weekday};
use tracing::error;

#[derive(Debug, Default)]
pub struct Args {
    pub datapath: Option<String>,
    pub events: Option<PathBuf>,
    pub week_start: Option<Weekday>,
    pub month: Option<CalendarCursor>,
    pub light: bool,
}

impl Args {
    // parse arguments, return set of unrecognized args
    pub fn parse(args: &[String]) -> (Self, BTreeSet<String>) {
        let mut unrecognized_args = BTreeSet::new();
        let mut res = Args::default();

        let mut i = 0;
        let len = args.len();
        while i < len {
            let arg = &args[i];

            if arg == "--light" {
                res.light = true;
            } else if arg == "--dark" {
                res.light = false;
            } else if arg == "--datapath" {
                i += 1;
                let Some(path) = args.get(i) else {
                    error!("datapath argument missing?");
                    continue;
                };
                res.datapath = Some(path.clone());
            } else if arg == "--events" {
                i += 1;
                let Some(path) = args.get(i) else {
                    error!("events argument missing?");
                    continue;
                };
                res.events = Some(PathBuf::from(path));
            } else if arg == "--week-start" {
                i += 1;
                let Some(day) = args.get(i) else {
                    error!("week-start argument missing?");
                    continue;
                };
                match parse_weekday(day) {
                    Some(day) => res.week_start = Some(day),
                    None => error!("failed to parse week-start '{day}', expected a weekday name"),
                }
            } else if arg == "--month" {
                i += 1;
                let Some(month) = args.get(i) else {
                    error!("month argument missing?");
                    continue;
                };
                match month.parse::<CalendarCursor>() {
                    Ok(cursor) => res.month = Some(cursor),
                    Err(err) => error!("failed to parse month '{month}' (expected YYYY-MM): {err}"),
                }
            } else {
                unrecognized_args.insert(arg.clone());
            }

            i += 1;
        }

        (res, unrecognized_args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_known_flags() {
        let (parsed, unknown) = Args::parse(&args(&[
            "--light",
            "--datapath",
            "/tmp/herd",
            "--events",
            "events.json",
            "--week-start",
            "monday",
            "--month",
            "2025-03",
        ]));

        assert!(unknown.is_empty());
        assert!(parsed.light);
        assert_eq!(parsed.datapath.as_deref(), Some("/tmp/herd"));
        assert_eq!(parsed.events, Some(PathBuf::from("events.json")));
        assert_eq!(parsed.week_start, Some(Weekday::Mon));
        assert_eq!(parsed.month, Some(CalendarCursor::new(2025, 3).unwrap()));
    }

    #[test]
    fn collects_unknown_flags() {
        let (parsed, unknown) = Args::parse(&args(&["--frobnicate", "--dark", "extra"]));
        assert!(!parsed.light);
        assert_eq!(
            unknown,
            BTreeSet::from(["--frobnicate".to_string(), "extra".to_string()])
        );
    }

    #[test]
    fn bad_values_are_ignored() {
        let (parsed, unknown) =
            Args::parse(&args(&["--week-start", "someday", "--month", "March", "--events"]));
        assert!(unknown.is_empty());
        assert_eq!(parsed.week_start, None);
        assert_eq!(parsed.month, None);
        assert_eq!(parsed.events, None);
    }
}
