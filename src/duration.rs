// Time-spent strings such as `1d 4h 30m` converted to decimal hours.
use crate::util::round2;
use once_cell::sync::Lazy;
use regex::Regex;

/// Working hours in one tracked day.
pub const HOURS_PER_DAY: f64 = 8.0;

static DAYS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)d").expect("valid days pattern"));
static HOURS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)h").expect("valid hours pattern"));
static MINUTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)m").expect("valid minutes pattern"));

/// Convert a compound duration into hours rounded to two decimals.
///
/// Each of the `d`, `h` and `m` components is optional and looked up
/// independently, so order does not matter. Only the first match of each
/// unit counts, and only ASCII digits are read. Missing, blank or
/// unrecognised input yields `0.0`.
pub fn parse_hours(s: Option<&str>) -> f64 {
    let Some(s) = s else { return 0.0 };
    if s.trim().is_empty() {
        return 0.0;
    }
    let days = component(&DAYS, s);
    let hours = component(&HOURS, s);
    let minutes = component(&MINUTES, s);
    round2(days * HOURS_PER_DAY + hours + minutes / 60.0)
}

fn component(re: &Regex, s: &str) -> f64 {
    // Digit runs too long for u64 are treated like an absent component.
    re.captures(s)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .map(|n| n as f64)
        .unwrap_or(0.0)
}
