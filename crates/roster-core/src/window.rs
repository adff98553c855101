//! The reconciliation window: the calendar month before the pass date.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// Inclusive date range used to detect hires and terminations.
///
/// Computed once per pass and threaded through every classification
/// call; deep logic never re-derives "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReconWindow {
    /// The calendar month before `as_of`, first through last day.
    ///
    /// Every `as_of` within one calendar month yields the same window,
    /// so re-running a pass inside the same month is idempotent by
    /// period.
    pub fn previous_month(as_of: NaiveDate) -> Self {
        let first_of_current =
            NaiveDate::from_ymd_opt(as_of.year(), as_of.month(), 1).unwrap_or(as_of);
        let end = first_of_current.pred_opt().unwrap_or(first_of_current);
        let start = NaiveDate::from_ymd_opt(end.year(), end.month(), 1).unwrap_or(end);
        Self { start, end }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl fmt::Display for ReconWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn mid_year_window_is_previous_month() {
        let window = ReconWindow::previous_month(date(2024, 3, 15));
        assert_eq!(window.start, date(2024, 2, 1));
        assert_eq!(window.end, date(2024, 2, 29));
    }

    #[test]
    fn january_window_crosses_year_boundary() {
        let window = ReconWindow::previous_month(date(2024, 1, 7));
        assert_eq!(window.start, date(2023, 12, 1));
        assert_eq!(window.end, date(2023, 12, 31));
    }

    #[test]
    fn same_month_yields_same_window() {
        let early = ReconWindow::previous_month(date(2024, 3, 1));
        let late = ReconWindow::previous_month(date(2024, 3, 31));
        assert_eq!(early, late);
    }

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let window = ReconWindow::previous_month(date(2024, 3, 15));
        assert!(window.contains(date(2024, 2, 1)));
        assert!(window.contains(date(2024, 2, 29)));
        assert!(!window.contains(date(2024, 1, 31)));
        assert!(!window.contains(date(2024, 3, 1)));
    }
}
