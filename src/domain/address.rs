/// Address component types that are carried into a [`GeoResult`](super::GeoResult).
///
/// Any other type tag reported by the geocoding API (postal_code, locality,
/// street_number, ...) is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    PostalTown,
    AdministrativeAreaLevel2,
    AdministrativeAreaLevel1,
    Country,
    Route,
}

impl AddressField {
    /// Classify the first type tag of an address component
    pub fn from_type_tag(tag: &str) -> Option<AddressField> {
        match tag {
            "postal_town" => Some(AddressField::PostalTown),
            "administrative_area_level_2" => Some(AddressField::AdministrativeAreaLevel2),
            "administrative_area_level_1" => Some(AddressField::AdministrativeAreaLevel1),
            "country" => Some(AddressField::Country),
            "route" => Some(AddressField::Route),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressField::PostalTown => "postal_town",
            AddressField::AdministrativeAreaLevel2 => "administrative_area_level_2",
            AddressField::AdministrativeAreaLevel1 => "administrative_area_level_1",
            AddressField::Country => "country",
            AddressField::Route => "route",
        }
    }
}
