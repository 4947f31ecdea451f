use serde::{Deserialize, Serialize};

use crate::services::maps_client::types::google_autocomplete_response::GoogleAutocompleteResponsePrediction;

/// A candidate place shown in the dropdown.
///
/// Two suggestions are considered the same entry when their labels match; the
/// places backend is known to return the same description under different ids.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub id: String,
}

impl Suggestion {
    pub fn new(label: &str, id: &str) -> Self {
        Suggestion {
            label: label.to_string(),
            id: id.to_string(),
        }
    }
}

impl From<GoogleAutocompleteResponsePrediction> for Suggestion {
    fn from(prediction: GoogleAutocompleteResponsePrediction) -> Self {
        Suggestion {
            label: prediction.description,
            id: prediction.place_id,
        }
    }
}
