use crate::{
    geocode::geocode_by_coordinates,
    types::{app_state::AppState, lat_lng::LatLng},
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::error;
use validator::Validate;

use super::get_geocode_by_place_id::GetGeocodeResponse;

#[derive(Validate, Deserialize)]
pub struct GetGeocodeByCoordinatesPayload {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

pub async fn get_geocode_by_coordinates(
    State(state): State<AppState>,
    ValidatedQuery(GetGeocodeByCoordinatesPayload { lat, lng }): ValidatedQuery<
        GetGeocodeByCoordinatesPayload,
    >,
) -> Result<Response, AppError> {
    let location = LatLng::new(lat, lng);
    if !location.is_finite() {
        return Err(AppError::bad_request("lat and lng must be finite numbers"));
    }

    let results = geocode_by_coordinates(&state.maps_config, location)
        .await
        .map_err(|e| {
            error!("{}", e);
            AppError::from(e)
        })?;

    Ok((StatusCode::OK, Json(GetGeocodeResponse::from_results(results))).into_response())
}
