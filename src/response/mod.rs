pub mod parser;
pub mod raw;

pub use parser::{find_place_result, geocode_result, parse_find_place, parse_response};
pub use raw::{FindPlaceResponse, GeocodeResponse};
