use serde::Serialize;

use super::{AddressField, LatLng};

/// Location data extracted from a single geocoding or place search result.
///
/// The extended fields are only filled when the API reported an address
/// component whose first type tag maps onto them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoResult {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_town: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrative_area_level_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrative_area_level_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
}

impl GeoResult {
    pub fn new(lat: f64, lng: f64, address: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            address: address.into(),
            postal_town: None,
            administrative_area_level_2: None,
            administrative_area_level_1: None,
            country: None,
            route: None,
        }
    }

    pub fn location(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    pub fn field(&self, field: AddressField) -> Option<&str> {
        match field {
            AddressField::PostalTown => self.postal_town.as_deref(),
            AddressField::AdministrativeAreaLevel2 => self.administrative_area_level_2.as_deref(),
            AddressField::AdministrativeAreaLevel1 => self.administrative_area_level_1.as_deref(),
            AddressField::Country => self.country.as_deref(),
            AddressField::Route => self.route.as_deref(),
        }
    }

    /// Store an address component value, replacing any earlier one
    pub(crate) fn set_field(&mut self, field: AddressField, value: String) {
        let slot = match field {
            AddressField::PostalTown => &mut self.postal_town,
            AddressField::AdministrativeAreaLevel2 => &mut self.administrative_area_level_2,
            AddressField::AdministrativeAreaLevel1 => &mut self.administrative_area_level_1,
            AddressField::Country => &mut self.country,
            AddressField::Route => &mut self.route,
        };
        *slot = Some(value);
    }

    /// True when none of the address component fields are set
    pub fn has_no_components(&self) -> bool {
        self.postal_town.is_none()
            && self.administrative_area_level_2.is_none()
            && self.administrative_area_level_1.is_none()
            && self.country.is_none()
            && self.route.is_none()
    }
}
