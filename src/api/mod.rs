pub mod client;
pub mod geocode;
pub mod places;

pub use client::{GeoClient, check_status};
pub use geocode::{geocode_address, reverse_geocode_point};
pub use places::place_by_name;
