use chrono::NaiveDate;

/// Inclusive day count of a leave range: the same day counts as one.
///
/// The range is treated as unordered, so a reversed pair still previews a
/// positive count; submission rejects reversed ranges separately. A missing
/// end of the range counts as zero.
pub fn calculate_leave_days(start: Option<NaiveDate>, end: Option<NaiveDate>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => (end - start).num_days().abs() + 1,
        _ => 0,
    }
}
