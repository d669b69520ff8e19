use super::raw::{FindPlaceResponse, GeocodeResponse, LocationEntry};
use crate::domain::{AddressField, GeoResult};
use crate::error::{GeoError, Result};

/// Whether a location entry carries an address component breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Components {
    Available,
    Unavailable,
}

/// Parse a geocoding response body into a [`GeoResult`]
pub fn parse_response(body: &str) -> Result<GeoResult> {
    let response: GeocodeResponse = serde_json::from_str(body)?;
    geocode_result(response)
}

/// Extract the first geocoding result
///
/// # Algorithm
/// 1. Take the first entry of `results`
/// 2. Read coordinates from `geometry.location` and `formatted_address`
/// 3. For each address component, classify its first type tag and store
///    `long_name` in the matching field (later components overwrite earlier)
pub fn geocode_result(response: GeocodeResponse) -> Result<GeoResult> {
    let entry = first_entry(
        response.results,
        "results",
        response.status,
        response.error_message,
    )?;
    extract_location(entry, Components::Available)
}

/// Parse a find-place-from-text response body into a [`GeoResult`]
pub fn parse_find_place(body: &str) -> Result<GeoResult> {
    let response: FindPlaceResponse = serde_json::from_str(body)?;
    find_place_result(response)
}

/// Extract the first place candidate.
///
/// Place candidates have no address components, so only `lat`, `lng` and
/// `address` are ever set.
pub fn find_place_result(response: FindPlaceResponse) -> Result<GeoResult> {
    let entry = first_entry(
        response.candidates,
        "candidates",
        response.status,
        response.error_message,
    )?;
    extract_location(entry, Components::Unavailable)
}

fn first_entry(
    entries: Option<Vec<LocationEntry>>,
    key: &str,
    status: Option<String>,
    error_message: Option<String>,
) -> Result<LocationEntry> {
    let entries =
        entries.ok_or_else(|| GeoError::MalformedResponse(format!("missing `{}` list", key)))?;

    entries.into_iter().next().ok_or_else(|| {
        let mut message = format!("empty `{}` list", key);
        if let Some(status) = status {
            message.push_str(&format!(" (status: {})", status));
        }
        if let Some(detail) = error_message {
            message.push_str(&format!(": {}", detail));
        }
        GeoError::MalformedResponse(message)
    })
}

fn extract_location(entry: LocationEntry, components: Components) -> Result<GeoResult> {
    let location = entry
        .geometry
        .ok_or_else(|| missing("geometry"))?
        .location
        .ok_or_else(|| missing("geometry.location"))?;
    let address = entry
        .formatted_address
        .ok_or_else(|| missing("formatted_address"))?;

    let mut result = GeoResult::new(location.lat, location.lng, address);

    if components == Components::Unavailable {
        return Ok(result);
    }

    let address_components = entry
        .address_components
        .ok_or_else(|| missing("address_components"))?;

    for component in address_components {
        // Only the first tag counts, secondary tags such as "political" are ignored
        let tag = component.types.first().ok_or_else(|| {
            GeoError::MalformedResponse("address component has an empty `types` list".to_string())
        })?;
        let field = match AddressField::from_type_tag(tag) {
            Some(f) => f,
            None => continue,
        };

        let long_name = component.long_name.ok_or_else(|| {
            GeoError::MalformedResponse(format!(
                "address component `{}` has no long_name",
                field.as_str()
            ))
        })?;

        result.set_field(field, long_name);
    }

    Ok(result)
}

fn missing(key: &str) -> GeoError {
    GeoError::MalformedResponse(format!("missing `{}`", key))
}
