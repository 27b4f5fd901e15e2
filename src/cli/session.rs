//! Session controller: one full prompt → load → filter → report →
//! paginate run, repeated until the user declines the restart offer.

use crate::cli::prompt::Prompter;
use crate::config::Config;
use crate::core::stats::duration::duration_stats;
use crate::core::stats::station::station_stats;
use crate::core::stats::time::time_stats;
use crate::core::stats::user::user_stats;
use crate::core::{filter, loader};
use crate::errors::{AppError, AppResult};
use crate::models::{City, DayFilter, MonthFilter, TripDataset};
use crate::ui::messages;
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::{bold, pad_right, secs2readable};
use crate::utils::table::Table;
use ansi_term::Colour;
use std::time::Instant;

const CITY_PROMPT: &str = "Enter the city you would like to analyze data for;\n\
                           VALID INPUTS ARE: Chicago, New York City, Washington";
const MONTH_PROMPT: &str = "\nSpecify the month you would like to analyze data for;\n\
                            VALID INPUTS ARE: All or January, February, March, April, May, June";
const DAY_PROMPT: &str = "\nSpecify the day you would like to analyze data for;\n\
                          VALID INPUTS ARE: All or Monday, Tuesday, Wednesday, Thursday, Friday, \
                          Saturday, Sunday";
const RAW_PROMPT_FIRST: &str = "\nWould you like to display 5 lines of raw data?\n\
                                VALID INPUTS ARE: Yes, No";
const RAW_PROMPT_MORE: &str = "\nWould you like to display 5 more lines?\n\
                               VALID INPUTS ARE: Yes, No";
const RESTART_PROMPT: &str = "\nWould you like to restart?\nVALID INPUTS ARE: Yes, No";

const YES_NO: [&str; 2] = ["yes", "no"];

const NO_DATA_MSG: &str = "No data available for this filter combination.";

/// Rows per page of the raw-data viewer.
const RAW_PAGE_SIZE: usize = 5;

pub struct Session<'a> {
    cfg: &'a Config,
    prompter: Prompter,
}

impl<'a> Session<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        let prompter = Prompter::new(&cfg.error_template);
        Self { cfg, prompter }
    }

    /// Run session iterations until the user declines to restart.
    /// A data-source failure propagates out; everything else recovers
    /// locally (re-prompt or substituted message).
    pub fn run(&self) -> AppResult<()> {
        loop {
            let (city, month, day) = self.get_filters()?;
            messages::rule();

            let dataset = loader::load(self.cfg, city)?;
            let filtered = filter::apply(&dataset, &month, &day);

            self.print_time_stats(&filtered, &month, &day);
            self.print_station_stats(&filtered);
            self.print_duration_stats(&filtered);
            self.print_user_stats(&filtered);

            self.ask_to_display_data(&filtered)?;

            let restart = self.prompter.ask(&YES_NO, RESTART_PROMPT)?;
            if restart != "yes" {
                break;
            }
        }
        Ok(())
    }

    /// Ask the user to specify a city, month, and day to analyze.
    fn get_filters(&self) -> AppResult<(City, MonthFilter, DayFilter)> {
        println!("Hello! Let's explore some US bikeshare data!");

        let city_ans = self.prompter.ask(&City::INPUT_NAMES, CITY_PROMPT)?;
        let city = City::parse(&city_ans)?;

        let month_ans = self.prompter.ask(&MonthFilter::INPUT_NAMES, MONTH_PROMPT)?;
        let month = MonthFilter::parse(&month_ans)
            .ok_or_else(|| AppError::Config(format!("unvalidated month answer '{month_ans}'")))?;

        let day_ans = self.prompter.ask(&DayFilter::INPUT_NAMES, DAY_PROMPT)?;
        let day = DayFilter::parse(&day_ans)
            .ok_or_else(|| AppError::Config(format!("unvalidated day answer '{day_ans}'")))?;

        Ok((city, month, day))
    }

    fn print_time_stats(&self, dataset: &TripDataset, month: &MonthFilter, day: &DayFilter) {
        report_header("Calculating The Most Frequent Times of Travel...");
        let started = Instant::now();

        match time_stats(dataset, month, day) {
            Some(stats) => {
                if let Some(m) = stats.most_common_month {
                    println!("The most common month is {}", bold(m));
                }
                if let Some(d) = stats.most_common_day {
                    println!("The most common day of week is {}", bold(d));
                }
                println!(
                    "The most common start hour is {}\n",
                    bold(&stats.most_common_hour.to_string())
                );
            }
            None => messages::warning(NO_DATA_MSG),
        }

        print_latency(started);
        messages::rule();
    }

    fn print_station_stats(&self, dataset: &TripDataset) {
        report_header("Calculating The Most Popular Stations and Trip...");
        let started = Instant::now();

        match station_stats(dataset) {
            Some(stats) => {
                println!(
                    "The most commonly used start station is {}",
                    bold(&stats.most_common_start)
                );
                println!(
                    "The most commonly used end station is {}",
                    bold(&stats.most_common_end)
                );
                println!(
                    "The most frequent combination of start station and end station trip \
                     is from {} to {}\n",
                    bold(&stats.most_common_trip.0),
                    bold(&stats.most_common_trip.1)
                );
            }
            None => messages::warning(NO_DATA_MSG),
        }

        print_latency(started);
        messages::rule();
    }

    fn print_duration_stats(&self, dataset: &TripDataset) {
        report_header("Calculating Trip Duration...");
        let started = Instant::now();

        match duration_stats(dataset) {
            Some(stats) => {
                println!("The total travel time is {}", bold(&stats.total_seconds.to_string()));
                println!("The mean travel time is {}\n", bold(&stats.mean_seconds.to_string()));
            }
            None => messages::warning(NO_DATA_MSG),
        }

        print_latency(started);
        messages::rule();
    }

    fn print_user_stats(&self, dataset: &TripDataset) {
        report_header("Calculating User Stats...");
        let started = Instant::now();
        let city = dataset.city.label();

        match user_stats(dataset) {
            Some(stats) => {
                println!("Count by user type:");
                print_counts(&stats.user_type_counts);
                println!();

                match &stats.gender_counts {
                    Some(counts) => {
                        println!("Count by clientele gender:");
                        print_counts(counts);
                        println!();
                    }
                    None => println!("Gender data for {} city is NOT available.\n", city),
                }

                match &stats.birth_years {
                    Some(birth) => {
                        println!("The oldest client was born in {}", bold(&birth.earliest.to_string()));
                        println!(
                            "The youngest client was born in {}",
                            bold(&birth.most_recent.to_string())
                        );
                        println!(
                            "The most common year of birth of the clientele is {}\n",
                            bold(&birth.most_common.to_string())
                        );
                    }
                    None => println!("Birth data for {} city is NOT available.\n", city),
                }
            }
            None => messages::warning(NO_DATA_MSG),
        }

        print_latency(started);
        messages::rule();
    }

    /// Ask whether to show raw data, then page through it 5 rows at a time.
    fn ask_to_display_data(&self, dataset: &TripDataset) -> AppResult<()> {
        let answer = self.prompter.ask(&YES_NO, RAW_PROMPT_FIRST)?;
        if answer == "yes" {
            self.display_raw_data(dataset)?;
        }
        Ok(())
    }

    fn display_raw_data(&self, dataset: &TripDataset) -> AppResult<()> {
        let mut offset = 0;
        loop {
            if offset >= dataset.len() {
                messages::info("No more raw data to display.");
                break;
            }

            let end = (offset + RAW_PAGE_SIZE).min(dataset.len());
            println!("\n{}", render_raw_page(dataset, offset, end));

            let more = self.prompter.ask(&YES_NO, RAW_PROMPT_MORE)?;
            if more != "yes" {
                break;
            }
            offset += RAW_PAGE_SIZE;
        }
        Ok(())
    }
}

fn report_header(title: &str) {
    println!("\n{}\n", Colour::Cyan.bold().paint(title));
}

fn print_latency(started: Instant) {
    println!(
        "This took {} seconds.",
        secs2readable(started.elapsed().as_secs_f64())
    );
}

/// Aligned (category, count) lines, widest label first column.
fn print_counts(counts: &[(String, usize)]) {
    let width = counts.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, count) in counts {
        println!("{} {}", pad_right(name, width), count);
    }
}

fn render_raw_page(dataset: &TripDataset, start: usize, end: usize) -> String {
    let mut headers = vec![
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if dataset.has_gender {
        headers.push("Gender");
    }
    if dataset.has_birth_year {
        headers.push("Birth Year");
    }

    let mut table = Table::new(headers);
    for trip in &dataset.trips[start..end] {
        let mut row = vec![
            trip.start_time_str(),
            trip.end_time_str(),
            trip.trip_duration.to_string(),
            trip.start_station.clone(),
            trip.end_station.clone(),
            trip.user_type.clone(),
        ];
        if dataset.has_gender {
            row.push(colorize_optional(trip.gender.as_deref().unwrap_or("-")));
        }
        if dataset.has_birth_year {
            let year = trip
                .birth_year
                .map(|y| (y as i32).to_string())
                .unwrap_or_else(|| "-".to_string());
            row.push(colorize_optional(&year));
        }
        table.add_row(row);
    }
    table.render()
}
