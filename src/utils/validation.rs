//! Centralized validation and helper functions.

use std::sync::OnceLock;

use regex::Regex;

/// Maximum number of records accepted from a single input (DOS protection)
pub const MAX_RECORDS: usize = 5_000_000;

/// Whether a collection already holding `count` records is full under `limit`.
///
/// Call this with the current count BEFORE adding a new record.
#[must_use]
pub fn record_limit_reached(count: usize, limit: usize) -> bool {
    count >= limit
}

fn digit_runs() -> &'static Regex {
    static DIGIT_RUNS: OnceLock<Regex> = OnceLock::new();
    DIGIT_RUNS.get_or_init(|| Regex::new(r"[0-9]+").expect("digit-run pattern is valid"))
}

/// Split out every maximal run of ASCII digits in `s`, in order.
///
/// # Examples
///
/// ```
/// use reident::utils::validation::numeric_runs;
///
/// assert_eq!(numeric_runs("14-12-1970"), vec!["14", "12", "1970"]);
/// assert_eq!(numeric_runs("3/3/1975"), vec!["3", "3", "1975"]);
/// assert!(numeric_runs("unknown").is_empty());
/// ```
#[must_use]
pub fn numeric_runs(s: &str) -> Vec<&str> {
    digit_runs().find_iter(s).map(|m| m.as_str()).collect()
}

/// Decompose a `DD-MM-YYYY` style date into (day, month, year).
///
/// Any separators are accepted, but the field must hold exactly three
/// numeric runs.
#[must_use]
pub fn split_birth_date(s: &str) -> Option<(&str, &str, &str)> {
    match numeric_runs(s).as_slice() {
        [day, month, year] => Some((*day, *month, *year)),
        _ => None,
    }
}
