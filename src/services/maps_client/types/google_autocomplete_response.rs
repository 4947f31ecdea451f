use serde::{Deserialize, Serialize};

use super::service_status::ServiceStatus;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GoogleAutocompleteResponsePredictionStructuredFormatting {
    pub main_text: String,
    #[serde(default)]
    pub secondary_text: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GoogleAutocompleteResponsePrediction {
    pub description: String,
    pub place_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_formatting: Option<GoogleAutocompleteResponsePredictionStructuredFormatting>,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GoogleAutocompleteResponse {
    #[serde(default)]
    pub predictions: Vec<GoogleAutocompleteResponsePrediction>,
    pub status: ServiceStatus,
}
