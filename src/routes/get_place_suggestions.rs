use std::sync::Arc;

use crate::{
    autocomplete::{
        controller::AutocompleteController,
        options::{AutocompleteOptions, AutocompleteProps},
        view::AutocompleteView,
    },
    services::maps_client::maps_service::AutocompletionRequest,
    types::{app_state::AppState, lat_lng::LatLng, suggestion::Suggestion},
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetPlaceSuggestionsPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub input: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: Option<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct GetPlaceSuggestionsResponse {
    pub data: AutocompleteView,
}

/// Renders the component for one keystroke: mounts a controller over the
/// maps service, feeds it the input and waits for the predictions.
#[cfg_attr(test, debug_handler)]
pub async fn get_place_suggestions(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetPlaceSuggestionsPayload>,
) -> Result<Response, AppError> {
    let location = match (payload.lat, payload.lng) {
        (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)),
        (None, None) => None,
        _ => return Err(AppError::bad_request("lat and lng must be given together")),
    };

    if location.is_some_and(|l| !l.is_finite()) {
        return Err(AppError::bad_request("lat and lng must be finite numbers"));
    }

    let options = AutocompleteOptions {
        create_request: Some(Arc::new(move |input: &str| AutocompletionRequest {
            location,
            ..AutocompletionRequest::new(input)
        })),
        ..Default::default()
    };
    let props = AutocompleteProps::new(
        Box::new(|suggestion: &Suggestion| debug!("Selected {}", suggestion.id)),
        Box::new(|| json!({ "type": "submit", "label": "Search" })),
    )
    .with_options(options);

    let mut controller = AutocompleteController::mount(Arc::new(state.maps_service), props);
    controller.on_input_change(&payload.input);
    controller.next_response().await;

    Ok((
        StatusCode::OK,
        Json(GetPlaceSuggestionsResponse {
            data: controller.render(),
        }),
    )
        .into_response())
}
