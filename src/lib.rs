//! gmaps-lookup - Coordinates and place metadata from the Google Maps geocoding and places APIs

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod response;

pub use api::{GeoClient, check_status};
pub use config::GeocoderConfig;
pub use domain::{AddressField, GeoResult, LatLng};
pub use error::GeoError;
pub use response::{parse_find_place, parse_response};
