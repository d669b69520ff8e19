pub mod address;
pub mod geo_result;
pub mod lat_lng;

pub use address::AddressField;
pub use geo_result::GeoResult;
pub use lat_lng::LatLng;
