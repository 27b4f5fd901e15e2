//! Typed month/day filter selections.
//!
//! Only January through June are selectable as month filters: the source
//! datasets cover the first half of the year, and a specific month filter
//! intentionally drops any trip outside that range. "all" keeps every row.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// Accepted (lower-case) prompt answers.
    pub const INPUT_NAMES: [&'static str; 7] = [
        "all", "january", "february", "march", "april", "may", "june",
    ];

    /// Parse the prompter's normalized answer. Returns None for values the
    /// prompter would never let through.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "all" => Some(MonthFilter::All),
            "january" => Some(MonthFilter::Only(Month::January)),
            "february" => Some(MonthFilter::Only(Month::February)),
            "march" => Some(MonthFilter::Only(Month::March)),
            "april" => Some(MonthFilter::Only(Month::April)),
            "may" => Some(MonthFilter::Only(Month::May)),
            "june" => Some(MonthFilter::Only(Month::June)),
            _ => None,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, MonthFilter::All)
    }

    /// Does a trip's derived month name pass this filter?
    pub fn matches(&self, month_name: &str) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => month_name.eq_ignore_ascii_case(m.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Day),
}

impl DayFilter {
    pub const INPUT_NAMES: [&'static str; 8] = [
        "all",
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "all" => Some(DayFilter::All),
            "monday" => Some(DayFilter::Only(Day::Monday)),
            "tuesday" => Some(DayFilter::Only(Day::Tuesday)),
            "wednesday" => Some(DayFilter::Only(Day::Wednesday)),
            "thursday" => Some(DayFilter::Only(Day::Thursday)),
            "friday" => Some(DayFilter::Only(Day::Friday)),
            "saturday" => Some(DayFilter::Only(Day::Saturday)),
            "sunday" => Some(DayFilter::Only(Day::Sunday)),
            _ => None,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, DayFilter::All)
    }

    pub fn matches(&self, weekday_name: &str) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => weekday_name.eq_ignore_ascii_case(d.name()),
        }
    }
}
