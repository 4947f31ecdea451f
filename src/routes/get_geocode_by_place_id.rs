use crate::{
    geocode::{geocode_by_place_id, get_lat_lng},
    services::maps_client::types::google_geocode_response::GeocodeResult,
    types::{app_state::AppState, lat_lng::LatLng},
    utils::app_error::AppError,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Serialize, Deserialize)]
pub struct GetGeocodeResponseData {
    pub results: Vec<GeocodeResult>,
    pub location: Option<LatLng>,
}

#[derive(Serialize, Deserialize)]
pub struct GetGeocodeResponse {
    pub data: GetGeocodeResponseData,
}

impl GetGeocodeResponse {
    pub fn from_results(results: Vec<GeocodeResult>) -> Self {
        GetGeocodeResponse {
            data: GetGeocodeResponseData {
                location: get_lat_lng(&results),
                results,
            },
        }
    }
}

pub async fn get_geocode_by_place_id(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
) -> Result<Response, AppError> {
    let results = geocode_by_place_id(&state.maps_config, &place_id)
        .await
        .map_err(|e| {
            error!("{}", e);
            AppError::from(e)
        })?;

    Ok((StatusCode::OK, Json(GetGeocodeResponse::from_results(results))).into_response())
}
