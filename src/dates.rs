use chrono::NaiveDate;

/// Every calendar day from `start` through `end`, both inclusive.
///
/// Empty when `start` is after `end`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}
