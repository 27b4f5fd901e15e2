//! Non-destructive month/day filtering of a loaded dataset.

use crate::models::{DayFilter, MonthFilter, TripDataset};

/// Narrow `dataset` to the rows matching both filters.
///
/// Produces a new dataset; the input is untouched and survivor order is
/// the input's row order. Re-applying the same filters to the result
/// yields the same rows (idempotent).
pub fn apply(dataset: &TripDataset, month: &MonthFilter, day: &DayFilter) -> TripDataset {
    let trips = dataset
        .iter()
        .filter(|t| month.matches(t.month_name) && day.matches(t.weekday_name))
        .cloned()
        .collect();

    TripDataset::new(
        dataset.city,
        trips,
        dataset.has_gender,
        dataset.has_birth_year,
    )
}
