//! Progress analytics

use super::text::is_blank;

/// Percentage of activities that are not blank
///
/// `round(non_empty / total * 100)`, or 0 for an empty list. Since the planner
/// refuses blank drafts this reads 0% or 100% in practice.
pub fn progress_percent<S: AsRef<str>>(activities: &[S]) -> u8 {
    let total = activities.len();
    if total == 0 {
        return 0;
    }
    let non_empty = activities.iter().filter(|a| !is_blank(a.as_ref())).count();
    // Halves round up, matching Math.round for non-negative values
    ((non_empty as f64 / total as f64) * 100.0).round() as u8
}
