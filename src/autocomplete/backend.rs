use async_trait::async_trait;

use crate::services::maps_client::{
    maps_service::AutocompletionRequest,
    types::google_autocomplete_response::GoogleAutocompleteResponse,
};

/// Source of place predictions for the autocomplete controller.
///
/// Implementations never fail outright: transport problems are reported
/// through the response status like any other non-`OK` answer.
#[async_trait]
pub trait SuggestionBackend: Send + Sync {
    async fn get_place_predictions(
        &self,
        request: AutocompletionRequest,
    ) -> GoogleAutocompleteResponse;
}
