/// Number formatting helpers.
///
/// This module renders `f64` results for the transcript in a
/// culture-invariant way: `.` as the decimal separator, no grouping, and
/// fixed spellings for the IEEE special values.
pub mod num;
