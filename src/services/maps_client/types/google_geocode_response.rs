use serde::{Deserialize, Serialize};

use super::service_status::ServiceStatus;
use crate::types::lat_lng::LatLng;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GoogleGeocodeResponseAddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GoogleGeocodeResponseGeometry {
    pub location: LatLng,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
}

/// One geocoding match. Consumers mostly care about `place_id` and
/// `geometry.location`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GeocodeResult {
    pub place_id: String,
    #[serde(default)]
    pub formatted_address: String,
    pub geometry: GoogleGeocodeResponseGeometry,
    #[serde(default)]
    pub address_components: Vec<GoogleGeocodeResponseAddressComponent>,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GoogleGeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    pub status: ServiceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
