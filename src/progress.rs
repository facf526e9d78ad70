//! Session Progress Tracker
//!
//! A progress log is the set of distinct calendar dates on which the user
//! marked a workout complete within one session. Appends are idempotent
//! per date; the cumulative series is derived fresh from the log on every
//! call rather than kept incrementally.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ordered set of distinct completion dates for one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressLog {
    dates: Vec<NaiveDate>,
}

/// One point of the cumulative progress series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Number of completed days up to and including this date
    pub cumulative: u32,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a workout completion for `date`
    ///
    /// Appends only when `completed` is true and the date is not already
    /// present, so repeated calls for the same day are no-ops. Returns
    /// whether the log changed.
    pub fn record_completion(&mut self, date: NaiveDate, completed: bool) -> bool {
        if !completed || self.dates.contains(&date) {
            return false;
        }

        self.dates.push(date);
        true
    }

    /// Cumulative completed-day count per date, ascending by date
    ///
    /// Each date contributes exactly one completion (duplicates are
    /// impossible by construction), so the series is 1, 2, 3, ... over
    /// the sorted dates. An empty log yields an empty series; the caller
    /// renders an explicit "no data yet" state for that case.
    pub fn compute_series(&self) -> Vec<SeriesPoint> {
        let mut sorted = self.dates.clone();
        sorted.sort_unstable();

        sorted
            .into_iter()
            .enumerate()
            .map(|(i, date)| SeriesPoint {
                date,
                cumulative: (i + 1) as u32,
            })
            .collect()
    }

    /// Completion dates in append order
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Number of distinct completed days
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_record_completion_is_idempotent() {
        let mut log = ProgressLog::new();

        assert!(log.record_completion(date("2024-01-01"), true));
        assert!(!log.record_completion(date("2024-01-01"), true));

        assert_eq!(log.dates(), &[date("2024-01-01")]);
    }

    #[test]
    fn test_record_completion_false_never_mutates() {
        let mut log = ProgressLog::new();

        assert!(!log.record_completion(date("2024-01-01"), false));
        assert!(log.is_empty());

        log.record_completion(date("2024-01-01"), true);
        assert!(!log.record_completion(date("2024-01-02"), false));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_series_is_cumulative_in_date_order() {
        let mut log = ProgressLog::new();
        log.record_completion(date("2024-01-01"), true);
        log.record_completion(date("2024-01-02"), true);

        let series = log.compute_series();
        assert_eq!(
            series,
            vec![
                SeriesPoint { date: date("2024-01-01"), cumulative: 1 },
                SeriesPoint { date: date("2024-01-02"), cumulative: 2 },
            ]
        );
    }

    #[test]
    fn test_series_sorts_out_of_order_appends() {
        let mut log = ProgressLog::new();
        log.record_completion(date("2024-03-05"), true);
        log.record_completion(date("2024-03-01"), true);
        log.record_completion(date("2024-03-03"), true);

        let dates: Vec<NaiveDate> = log.compute_series().iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date("2024-03-01"), date("2024-03-03"), date("2024-03-05")]);

        let counts: Vec<u32> = log.compute_series().iter().map(|p| p.cumulative).collect();
        assert_eq!(counts, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_log_yields_empty_series() {
        let log = ProgressLog::new();
        assert!(log.compute_series().is_empty());
    }
}
