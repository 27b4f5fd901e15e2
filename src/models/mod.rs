pub mod city;
pub mod dataset;
pub mod filters;
pub mod trip;

pub use city::City;
pub use dataset::TripDataset;
pub use filters::{DayFilter, MonthFilter};
pub use trip::Trip;
