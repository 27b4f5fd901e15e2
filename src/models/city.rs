use crate::errors::{AppError, AppResult};

/// The three supported cities and their fixed source files.
/// The mapping is process-wide and immutable; only the data directory
/// it is resolved against comes from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Canonical lower-case names accepted at the prompt.
    pub const INPUT_NAMES: [&'static str; 3] = ["chicago", "new york city", "washington"];

    /// Parse the prompter's normalized (lower-case) answer.
    pub fn parse(input: &str) -> AppResult<Self> {
        match input {
            "chicago" => Ok(City::Chicago),
            "new york city" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            other => Err(AppError::UnknownCity(other.to_string())),
        }
    }

    /// Source file name inside the configured data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Display label ("Chicago", "New York City", "Washington").
    pub fn label(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }
}
