use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{bst, setup_data_dir, setup_partial_data_dir};

#[test]
fn test_full_session_chicago_all_all() {
    let data_dir = setup_data_dir("full_session_chicago");

    bst()
        .args(["--data-dir", &data_dir])
        .write_stdin("chicago\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Hello! Let's explore some US bikeshare data!"))
        .stdout(contains("The most common month is"))
        .stdout(contains("January"))
        .stdout(contains("The most common day of week is"))
        .stdout(contains("Monday"))
        .stdout(contains("The most common start hour is"))
        .stdout(contains("The most commonly used start station is"))
        .stdout(contains("The total travel time is"))
        .stdout(contains("2520"))
        .stdout(contains("The mean travel time is"))
        .stdout(contains("420"))
        .stdout(contains("Count by user type:"))
        .stdout(contains("Subscriber"))
        .stdout(contains("Count by clientele gender:"))
        .stdout(contains("The oldest client was born in"))
        .stdout(contains("1975"))
        .stdout(contains("The youngest client was born in"))
        .stdout(contains("2000"))
        .stdout(contains("The most common year of birth of the clientele is"))
        .stdout(contains("1989"))
        .stdout(contains("This took"));
}

#[test]
fn test_trip_combination_tie_breaks_by_first_occurrence() {
    let data_dir = setup_data_dir("trip_combo_tie");

    // A->B and C->D both appear twice; A->B was seen first.
    bst()
        .args(["--data-dir", &data_dir])
        .write_stdin("chicago\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains(
            "The most frequent combination of start station and end station trip",
        ))
        .stdout(
            predicates::str::is_match(r"is from \x1b\[1mA\x1b\[0m to \x1b\[1mB\x1b\[0m")
                .expect("valid regex"),
        );
}

#[test]
fn test_month_filter_skips_mode_line_and_narrows_rows() {
    let data_dir = setup_data_dir("month_filter");

    // January keeps rows 0,1,2,5: 300+360+600+120 = 1380 total.
    bst()
        .args(["--data-dir", &data_dir])
        .write_stdin("chicago\njanuary\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("The most common month is").not())
        .stdout(contains("The most common day of week is"))
        .stdout(contains("1380"));
}

#[test]
fn test_day_filter_skips_day_mode_line() {
    let data_dir = setup_data_dir("day_filter");

    // Monday keeps rows 0,1,3,4: 300+360+240+900 = 1800 total.
    bst()
        .args(["--data-dir", &data_dir])
        .write_stdin("chicago\nall\nmonday\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("The most common month is"))
        .stdout(contains("The most common day of week is").not())
        .stdout(contains("1800"));
}

#[test]
fn test_empty_filter_combination_reports_no_data() {
    let data_dir = setup_data_dir("empty_filter");

    // The only June row is a Monday, so june+sunday matches nothing.
    bst()
        .args(["--data-dir", &data_dir])
        .write_stdin("chicago\njune\nsunday\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("No data available for this filter combination."))
        .stdout(contains("The most common start hour is").not())
        .stdout(contains("The total travel time is").not());
}

#[test]
fn test_washington_has_no_gender_or_birth_data() {
    let data_dir = setup_data_dir("washington_schema");

    bst()
        .args(["--data-dir", &data_dir])
        .write_stdin("washington\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Count by user type:"))
        .stdout(contains("Registered"))
        .stdout(contains("Gender data for Washington city is NOT available."))
        .stdout(contains("Birth data for Washington city is NOT available."))
        .stdout(contains("Count by clientele gender:").not());
}

#[test]
fn test_fractional_birth_year_is_truncated_on_display() {
    let data_dir = setup_data_dir("fractional_birth_year");

    bst()
        .args(["--data-dir", &data_dir])
        .write_stdin("new york city\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("The oldest client was born in"))
        .stdout(contains("1985"))
        .stdout(contains("1985.5").not());
}

#[test]
fn test_invalid_input_reprompts_with_rejected_text() {
    let data_dir = setup_data_dir("invalid_input");

    bst()
        .args(["--data-dir", &data_dir])
        .write_stdin("denver\nchicago\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("denver is not a valid input. Please try again."));
}

#[test]
fn test_city_input_is_case_insensitive() {
    let data_dir = setup_data_dir("case_insensitive");

    bst()
        .args(["--data-dir", &data_dir])
        .write_stdin("ChIcAgO\nAll\nALL\nNo\nNO\n")
        .assert()
        .success()
        .stdout(contains("The most common start hour is"));
}

#[test]
fn test_raw_data_pagination_runs_out_of_rows() {
    let data_dir = setup_data_dir("raw_pagination");

    // 6 rows: first page shows 5, second shows 1, third request finds
    // nothing left and the viewer stops on its own.
    bst()
        .args(["--data-dir", &data_dir])
        .write_stdin("chicago\nall\nall\nyes\nyes\nyes\nno\n")
        .assert()
        .success()
        .stdout(contains("Start Time"))
        .stdout(contains("Would you like to display 5 more lines?"))
        .stdout(contains("No more raw data to display."));
}

#[test]
fn test_raw_data_declined_skips_table() {
    let data_dir = setup_data_dir("raw_declined");

    bst()
        .args(["--data-dir", &data_dir])
        .write_stdin("washington\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Would you like to display 5 lines of raw data?"))
        .stdout(contains("Trip Duration  ").not());
}

#[test]
fn test_restart_runs_a_second_session() {
    let data_dir = setup_data_dir("restart");

    bst()
        .args(["--data-dir", &data_dir])
        .write_stdin("chicago\nall\nall\nno\nyes\nwashington\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Count by clientele gender:"))
        .stdout(contains("Gender data for Washington city is NOT available."));
}

#[test]
fn test_missing_source_file_is_fatal() {
    let data_dir = setup_partial_data_dir("missing_source", &[]);

    bst()
        .args(["--data-dir", &data_dir])
        .write_stdin("chicago\nall\nall\n")
        .assert()
        .failure()
        .stderr(contains("Data source error"))
        .stderr(contains("chicago.csv"));
}

#[test]
fn test_malformed_timestamp_is_fatal() {
    let csv = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-01-02 08:00:00,2017-01-02 08:05:00,300,A,B,Subscriber
1,not-a-timestamp,2017-01-02 08:36:00,360,A,B,Subscriber
";
    let data_dir = setup_partial_data_dir("bad_timestamp", &[("chicago.csv", csv)]);

    bst()
        .args(["--data-dir", &data_dir])
        .write_stdin("chicago\nall\nall\n")
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"))
        .stderr(contains("not-a-timestamp"))
        .stderr(contains("row 2"));
}

#[test]
fn test_missing_required_column_is_fatal() {
    let csv = "\
,Start Time,End Time,Start Station,End Station,User Type
0,2017-01-02 08:00:00,2017-01-02 08:05:00,A,B,Subscriber
";
    let data_dir = setup_partial_data_dir("missing_column", &[("chicago.csv", csv)]);

    bst()
        .args(["--data-dir", &data_dir])
        .write_stdin("chicago\nall\nall\n")
        .assert()
        .failure()
        .stderr(contains("Missing required column 'Trip Duration'"));
}
