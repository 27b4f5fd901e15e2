use super::city::City;
use super::trip::Trip;

/// An ordered collection of trips sharing one city's schema.
///
/// Row order is source order. The optional-column flags are a dataset
/// property decided once at load time: either every row of a city may
/// carry the value, or none does.
#[derive(Debug, Clone)]
pub struct TripDataset {
    pub city: City,
    pub trips: Vec<Trip>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl TripDataset {
    pub fn new(city: City, trips: Vec<Trip>, has_gender: bool, has_birth_year: bool) -> Self {
        Self {
            city,
            trips,
            has_gender,
            has_birth_year,
        }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }
}
