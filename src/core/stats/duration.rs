use crate::models::TripDataset;

/// Total and mean travel time, in the source's own unit (seconds).
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

pub fn duration_stats(dataset: &TripDataset) -> Option<DurationStats> {
    if dataset.is_empty() {
        return None;
    }

    let total_seconds: f64 = dataset.iter().map(|t| t.trip_duration).sum();
    let mean_seconds = total_seconds / dataset.len() as f64;

    Some(DurationStats {
        total_seconds,
        mean_seconds,
    })
}
