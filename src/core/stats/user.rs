use super::{counts_by, mode_by};
use crate::models::TripDataset;

/// Earliest / most recent / modal year of birth, truncated to integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Rider demographics over a filtered dataset.
///
/// `gender_counts` is None when the city's schema has no Gender column;
/// `birth_years` is None when Birth Year is absent, or present but blank
/// on every surviving row. Blank cells never count as a category.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_type_counts: Vec<(String, usize)>,
    pub gender_counts: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

pub fn user_stats(dataset: &TripDataset) -> Option<UserStats> {
    if dataset.is_empty() {
        return None;
    }

    let user_type_counts = counts_by(
        dataset
            .iter()
            .map(|t| t.user_type.as_str())
            .filter(|u| !u.trim().is_empty()),
    )
    .into_iter()
    .map(|(u, n)| (u.to_string(), n))
    .collect();

    let gender_counts = if dataset.has_gender {
        Some(
            counts_by(
                dataset
                    .iter()
                    .filter_map(|t| t.gender.as_deref())
                    .filter(|g| !g.trim().is_empty()),
            )
            .into_iter()
            .map(|(g, n)| (g.to_string(), n))
            .collect(),
        )
    } else {
        None
    };

    let birth_years = if dataset.has_birth_year {
        birth_year_stats(dataset)
    } else {
        None
    };

    Some(UserStats {
        user_type_counts,
        gender_counts,
        birth_years,
    })
}

fn birth_year_stats(dataset: &TripDataset) -> Option<BirthYearStats> {
    let years: Vec<f64> = dataset.iter().filter_map(|t| t.birth_year).collect();
    if years.is_empty() {
        return None;
    }

    let earliest = years.iter().cloned().fold(f64::INFINITY, f64::min);
    let most_recent = years.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    // Years are whole-valued in the source even when stored as floats,
    // so truncating the f64 key is safe for the mode count.
    let most_common = mode_by(years.iter().map(|y| *y as i64))?;

    Some(BirthYearStats {
        earliest: earliest as i32,
        most_recent: most_recent as i32,
        most_common: most_common as i32,
    })
}
