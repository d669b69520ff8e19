use serde::Deserialize;

/// Body of a geocoding (forward or reverse) response
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<LocationEntry>>,
}

/// Body of a find-place-from-text response
#[derive(Debug, Deserialize)]
pub struct FindPlaceResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub candidates: Option<Vec<LocationEntry>>,
}

/// One geocoding result or place candidate.
///
/// Every key is optional here so that the parser can report which one is
/// missing instead of a generic decode failure.
#[derive(Debug, Deserialize)]
pub struct LocationEntry {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub address_components: Option<Vec<AddressComponent>>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<Location>,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct AddressComponent {
    #[serde(default)]
    pub long_name: Option<String>,
    pub types: Vec<String>,
}
