//! Dataset loading: CSV ingestion, schema validation, derived columns.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{City, Trip, TripDataset};
use crate::utils::date;
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

const COL_START_TIME: &str = "Start Time";
const COL_END_TIME: &str = "End Time";
const COL_TRIP_DURATION: &str = "Trip Duration";
const COL_START_STATION: &str = "Start Station";
const COL_END_STATION: &str = "End Station";
const COL_USER_TYPE: &str = "User Type";
const COL_GENDER: &str = "Gender";
const COL_BIRTH_YEAR: &str = "Birth Year";

/// Columns every city must provide. Gender / Birth Year are optional and
/// only recorded as schema flags.
struct Columns {
    start_time: usize,
    end_time: usize,
    trip_duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord, file: &Path) -> AppResult<Self> {
        let required = |name: &str| -> AppResult<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| AppError::MissingColumn {
                    column: name.to_string(),
                    file: file.display().to_string(),
                })
        };
        let optional = |name: &str| headers.iter().position(|h| h.trim() == name);

        Ok(Self {
            start_time: required(COL_START_TIME)?,
            end_time: required(COL_END_TIME)?,
            trip_duration: required(COL_TRIP_DURATION)?,
            start_station: required(COL_START_STATION)?,
            end_station: required(COL_END_STATION)?,
            user_type: required(COL_USER_TYPE)?,
            gender: optional(COL_GENDER),
            birth_year: optional(COL_BIRTH_YEAR),
        })
    }
}

/// Load the full trip dataset for `city` from the configured data
/// directory. No filtering happens here; every row must parse, and a row
/// with an unreadable timestamp aborts the load rather than being dropped.
pub fn load(cfg: &Config, city: City) -> AppResult<TripDataset> {
    let path = cfg.data_file(city);
    if !path.exists() {
        return Err(AppError::DataSource(format!(
            "source file for {} not found: {}",
            city.label(),
            path.display()
        )));
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(&path)?;
    let headers = reader.headers()?.clone();
    let cols = Columns::resolve(&headers, &path)?;

    let mut trips = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = idx + 1;
        trips.push(parse_row(&record, &cols, row)?);
    }

    Ok(TripDataset::new(
        city,
        trips,
        cols.gender.is_some(),
        cols.birth_year.is_some(),
    ))
}

fn parse_row(record: &StringRecord, cols: &Columns, row: usize) -> AppResult<Trip> {
    let field = |idx: usize| record.get(idx).unwrap_or_default();

    let start_raw = field(cols.start_time);
    let start_time = date::parse_timestamp(start_raw).map_err(|e| AppError::Timestamp {
        row,
        value: start_raw.to_string(),
        reason: e.to_string(),
    })?;

    let end_raw = field(cols.end_time);
    let end_time = date::parse_timestamp(end_raw).map_err(|e| AppError::Timestamp {
        row,
        value: end_raw.to_string(),
        reason: e.to_string(),
    })?;

    let duration_raw = field(cols.trip_duration);
    let trip_duration: f64 = duration_raw
        .trim()
        .parse()
        .map_err(|_| AppError::Duration {
            row,
            value: duration_raw.to_string(),
        })?;

    let gender = cols.gender.and_then(|idx| {
        let v = field(idx).trim();
        if v.is_empty() {
            None
        } else {
            Some(v.to_string())
        }
    });

    // A blank or non-numeric cell in a carrying city is simply no value;
    // the column-level flag already told the reports the data exists.
    let birth_year = cols
        .birth_year
        .and_then(|idx| field(idx).trim().parse::<f64>().ok());

    Ok(Trip::new(
        start_time,
        end_time,
        trip_duration,
        field(cols.start_station).to_string(),
        field(cols.end_station).to_string(),
        field(cols.user_type).to_string(),
        gender,
        birth_year,
    ))
}
