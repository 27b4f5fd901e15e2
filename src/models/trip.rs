use crate::utils::date;
use chrono::NaiveDateTime;

/// One row of a city's source dataset, with the time-part columns derived
/// once at construction and retained for the lifetime of the dataset.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Trip length in seconds, as stored in the source (may be fractional).
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    /// Present only for cities whose schema carries the column; a blank
    /// cell inside a carrying city is None as well.
    pub gender: Option<String>,
    /// Stored fractional in the source ("1992.0"); truncated on display.
    pub birth_year: Option<f64>,

    // Derived from start_time at load time.
    pub month_name: &'static str,
    pub weekday_name: &'static str,
    pub hour_of_day: u32,
}

impl Trip {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        trip_duration: f64,
        start_station: String,
        end_station: String,
        user_type: String,
        gender: Option<String>,
        birth_year: Option<f64>,
    ) -> Self {
        let month_name = date::month_name(&start_time);
        let weekday_name = date::weekday_name(&start_time);
        let hour_of_day = date::hour_of_day(&start_time);
        Self {
            start_time,
            end_time,
            trip_duration,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
            month_name,
            weekday_name,
            hour_of_day,
        }
    }

    pub fn start_time_str(&self) -> String {
        self.start_time.format(date::SOURCE_TIMESTAMP_FORMAT).to_string()
    }

    pub fn end_time_str(&self) -> String {
        self.end_time.format(date::SOURCE_TIMESTAMP_FORMAT).to_string()
    }
}
