use super::mode_by;
use crate::models::TripDataset;

/// Most popular stations and trip over a filtered dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub most_common_start: String,
    pub most_common_end: String,
    /// Most frequent (start, end) combination, counted as a compound key.
    pub most_common_trip: (String, String),
}

pub fn station_stats(dataset: &TripDataset) -> Option<StationStats> {
    if dataset.is_empty() {
        return None;
    }

    let most_common_start = mode_by(dataset.iter().map(|t| t.start_station.as_str()))?;
    let most_common_end = mode_by(dataset.iter().map(|t| t.end_station.as_str()))?;
    let most_common_trip = mode_by(
        dataset
            .iter()
            .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
    )?;

    Some(StationStats {
        most_common_start: most_common_start.to_string(),
        most_common_end: most_common_end.to_string(),
        most_common_trip: (
            most_common_trip.0.to_string(),
            most_common_trip.1.to_string(),
        ),
    })
}
