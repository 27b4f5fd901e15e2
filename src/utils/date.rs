use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// English full month names, indexed by `month - 1`.
/// Static tables keep the derived columns locale-invariant: `%B`-style
/// formatting would honor whatever locale the process runs under.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English full weekday names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn month_name(ts: &NaiveDateTime) -> &'static str {
    MONTH_NAMES[ts.month0() as usize]
}

pub fn weekday_name(ts: &NaiveDateTime) -> &'static str {
    match ts.weekday() {
        Weekday::Mon => WEEKDAY_NAMES[0],
        Weekday::Tue => WEEKDAY_NAMES[1],
        Weekday::Wed => WEEKDAY_NAMES[2],
        Weekday::Thu => WEEKDAY_NAMES[3],
        Weekday::Fri => WEEKDAY_NAMES[4],
        Weekday::Sat => WEEKDAY_NAMES[5],
        Weekday::Sun => WEEKDAY_NAMES[6],
    }
}

pub fn hour_of_day(ts: &NaiveDateTime) -> u32 {
    ts.hour()
}

/// Fixed textual format of the source datasets ("2017-01-01 00:07:57").
pub const SOURCE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s.trim(), SOURCE_TIMESTAMP_FORMAT)
}
