use super::GeoClient;
use crate::config::GeocoderConfig;
use crate::domain::{GeoResult, LatLng};
use crate::error::Result;
use crate::response::geocode_result;

impl GeoClient {
    /// Geocode a free-form address (country, city, postcode, street...)
    /// and return the most relevant result.
    pub fn forward_geocode(&self, address: &str) -> Result<GeoResult> {
        let response = self.get(&self.config().geocode_url, &[("address", address)])?;
        geocode_result(response)
    }

    /// Reverse geocode a coordinate pair and return the most relevant result.
    pub fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<GeoResult> {
        let latlng = LatLng::new(lat, lng).to_string();
        let response = self.get(&self.config().geocode_url, &[("latlng", latlng.as_str())])?;
        geocode_result(response)
    }
}

/// One-shot forward geocode with the given configuration
pub fn geocode_address(address: &str, config: &GeocoderConfig) -> Result<GeoResult> {
    GeoClient::new(config.clone())?.forward_geocode(address)
}

/// One-shot reverse geocode with the given configuration
pub fn reverse_geocode_point(point: LatLng, config: &GeocoderConfig) -> Result<GeoResult> {
    GeoClient::new(config.clone())?.reverse_geocode(point.lat, point.lng)
}
