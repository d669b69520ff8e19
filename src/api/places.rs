use super::GeoClient;
use crate::config::GeocoderConfig;
use crate::domain::GeoResult;
use crate::error::Result;
use crate::response::find_place_result;

const PLACE_FIELDS: &str = "name,geometry,formatted_address";
const INPUT_TYPE: &str = "textquery";

impl GeoClient {
    /// Find a place by name (a restaurant, bar, monument...) and return the
    /// first candidate.
    ///
    /// The place search endpoint gives no address breakdown, so only
    /// `lat`, `lng` and `address` are set on the result.
    pub fn find_place_by_name(&self, name: &str) -> Result<GeoResult> {
        let response = self.get(
            &self.config().find_place_url,
            &[
                ("input", name),
                ("fields", PLACE_FIELDS),
                ("inputtype", INPUT_TYPE),
            ],
        )?;
        find_place_result(response)
    }
}

/// One-shot place search with the given configuration
pub fn place_by_name(name: &str, config: &GeocoderConfig) -> Result<GeoResult> {
    GeoClient::new(config.clone())?.find_place_by_name(name)
}
