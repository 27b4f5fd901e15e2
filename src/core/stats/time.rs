use super::mode_by;
use crate::models::{DayFilter, MonthFilter, TripDataset};

/// Most frequent times of travel over a filtered dataset.
///
/// `month` / `day` are reported only when the corresponding filter is
/// "all": filtering on a single month makes its mode a foregone
/// conclusion. The start hour is always reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub most_common_month: Option<&'static str>,
    pub most_common_day: Option<&'static str>,
    pub most_common_hour: u32,
}

pub fn time_stats(
    dataset: &TripDataset,
    month: &MonthFilter,
    day: &DayFilter,
) -> Option<TimeStats> {
    if dataset.is_empty() {
        return None;
    }

    let most_common_month = if month.is_all() {
        mode_by(dataset.iter().map(|t| t.month_name))
    } else {
        None
    };

    let most_common_day = if day.is_all() {
        mode_by(dataset.iter().map(|t| t.weekday_name))
    } else {
        None
    };

    let most_common_hour = mode_by(dataset.iter().map(|t| t.hour_of_day))?;

    Some(TimeStats {
        most_common_month,
        most_common_day,
        most_common_hour,
    })
}
