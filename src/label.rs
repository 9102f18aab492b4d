//! Date label appended to every output filename in a run.

use chrono::NaiveDate;

/// Format a date as "Mon-YYYY", e.g. "Mar-2024".
///
/// The caller supplies the date (the orchestrator uses today's local
/// date), so two runs on different days name their outputs differently
/// for identical input.
pub fn month_year(date: NaiveDate) -> String {
    date.format("%b-%Y").to_string()
}
