#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bst() -> Command {
    cargo_bin_cmd!("bikestats")
}

/// Chicago fixture: full schema, leading unnamed index column like the
/// original datasets. Six rows chosen so every report has a known answer:
/// month mode January (4), day mode Monday (4), hour mode 8 (3),
/// start-station mode A (3), end-station mode D (3), trip combo tie
/// between A->B and C->D resolved to A->B by first occurrence,
/// durations summing to 2520 (mean 420), Subscriber 4 / Customer 2,
/// Male 3 / Female 2 with one blank cell, birth years 1975..2000 with
/// mode 1989.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:00:00,2017-01-02 08:05:00,300,A,B,Subscriber,Male,1989.0
1,2017-01-02 08:30:00,2017-01-02 08:36:00,360,A,B,Subscriber,Female,1992.0
2,2017-01-03 09:00:00,2017-01-03 09:10:00,600,C,D,Customer,Male,1989.0
3,2017-02-06 10:00:00,2017-02-06 10:04:00,240,A,D,Subscriber,,
4,2017-06-05 08:00:00,2017-06-05 08:15:00,900,B,A,Subscriber,Female,1975.0
5,2017-01-04 23:00:00,2017-01-04 23:02:00,120,C,D,Customer,Male,2000.0
";

/// New York City fixture: full schema, one fractional birth year to
/// exercise display truncation.
pub const NEW_YORK_CITY_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-06 14:00:00,2017-01-06 14:03:20,200,G,H,Subscriber,Female,1990.0
1,2017-05-10 15:00:00,2017-05-10 15:06:40,400,H,G,Customer,Male,1985.5
";

/// Washington fixture: no Gender / Birth Year columns, fractional
/// durations, Registered/Casual user types, as in the original dataset.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-03-01 07:00:00,2017-03-01 07:24:41,1481.0,E,F,Registered
1,2017-03-01 07:30:00,2017-03-01 07:35:00,300.5,E,F,Casual
2,2017-04-04 12:00:00,2017-04-04 12:10:00,600.0,F,E,Registered
";

/// Create a unique data directory inside the system temp dir holding the
/// three city fixtures, removing any leftover from a previous run.
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikestats_data", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");
    fs::write(path.join("chicago.csv"), CHICAGO_CSV).expect("write chicago fixture");
    fs::write(path.join("new_york_city.csv"), NEW_YORK_CITY_CSV)
        .expect("write new york city fixture");
    fs::write(path.join("washington.csv"), WASHINGTON_CSV).expect("write washington fixture");
    path.to_string_lossy().to_string()
}

/// Data dir with only the files given, for load-failure scenarios.
pub fn setup_partial_data_dir(name: &str, files: &[(&str, &str)]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikestats_data", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");
    for (file, content) in files {
        fs::write(path.join(file), content).expect("write fixture");
    }
    path.to_string_lossy().to_string()
}
