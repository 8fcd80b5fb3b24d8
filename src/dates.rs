//! Season Calendar
//!
//! The fixed list of 2026 Lenten Fridays and date membership for
//! recurring and one-off fish fries.

use crate::models::FishFry;

/// One Friday of the season: display label plus ISO date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Friday {
    pub label: &'static str,
    pub value: &'static str,
}

/// Lenten Fridays 2026, Ash Wednesday through Good Friday week.
pub const LENTEN_FRIDAYS: [Friday; 7] = [
    Friday { label: "Feb 20", value: "2026-02-20" },
    Friday { label: "Feb 27", value: "2026-02-27" },
    Friday { label: "Mar 6", value: "2026-03-06" },
    Friday { label: "Mar 13", value: "2026-03-13" },
    Friday { label: "Mar 20", value: "2026-03-20" },
    Friday { label: "Mar 27", value: "2026-03-27" },
    Friday { label: "Apr 3", value: "2026-04-03" },
];

/// Display label for an ISO date, falling back to the date itself when
/// it is not one of the season Fridays.
pub fn friday_label(date: &str) -> &str {
    LENTEN_FRIDAYS
        .iter()
        .find(|f| f.value == date)
        .map(|f| f.label)
        .unwrap_or(date)
}

/// Whether a fish fry is on for the given ISO `YYYY-MM-DD` date.
///
/// Recurring entries match inside `start_date..=end_date` (lexicographic
/// comparison is correct for ISO dates). One-off entries match when the
/// date appears in the `specific_dates` list. Missing bounds or an
/// unparseable list mean no match, never an error.
pub fn fish_fry_on_date(fish_fry: &FishFry, date: &str) -> bool {
    if fish_fry.is_recurring {
        return match (&fish_fry.start_date, &fish_fry.end_date) {
            (Some(start), Some(end)) => date >= start.as_str() && date <= end.as_str(),
            _ => false,
        };
    }
    let dates: Vec<String> = fish_fry
        .specific_dates
        .as_deref()
        .and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or_default();
    dates.iter().any(|d| d == date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::make_entry;

    #[test]
    fn test_recurring_window_is_inclusive() {
        let entry = make_entry(1, 1, "St. Test");
        let ff = &entry.fish_fry;

        assert!(fish_fry_on_date(ff, "2026-02-20"));
        assert!(fish_fry_on_date(ff, "2026-03-06"));
        assert!(fish_fry_on_date(ff, "2026-04-03"));

        assert!(!fish_fry_on_date(ff, "2026-02-19"));
        assert!(!fish_fry_on_date(ff, "2026-04-04"));
    }

    #[test]
    fn test_recurring_without_bounds_never_matches() {
        let mut entry = make_entry(1, 1, "St. Test");
        entry.fish_fry.end_date = None;
        assert!(!fish_fry_on_date(&entry.fish_fry, "2026-03-06"));
    }

    #[test]
    fn test_one_off_matches_listed_dates_only() {
        let mut entry = make_entry(1, 1, "St. Test");
        entry.fish_fry.is_recurring = false;
        entry.fish_fry.specific_dates = Some(r#"["2026-02-27","2026-03-20"]"#.to_string());

        assert!(fish_fry_on_date(&entry.fish_fry, "2026-02-27"));
        assert!(fish_fry_on_date(&entry.fish_fry, "2026-03-20"));
        assert!(!fish_fry_on_date(&entry.fish_fry, "2026-03-06"));
    }

    #[test]
    fn test_one_off_with_missing_or_garbage_list() {
        let mut entry = make_entry(1, 1, "St. Test");
        entry.fish_fry.is_recurring = false;

        entry.fish_fry.specific_dates = None;
        assert!(!fish_fry_on_date(&entry.fish_fry, "2026-02-27"));

        entry.fish_fry.specific_dates = Some("not json".to_string());
        assert!(!fish_fry_on_date(&entry.fish_fry, "2026-02-27"));
    }

    #[test]
    fn test_friday_label() {
        assert_eq!(friday_label("2026-03-06"), "Mar 6");
        assert_eq!(friday_label("2026-12-25"), "2026-12-25");
    }
}
