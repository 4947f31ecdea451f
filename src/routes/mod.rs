use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_geocode_by_coordinates;
mod get_geocode_by_place_id;
mod get_place_suggestions;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/suggestions",
        get(get_place_suggestions::get_place_suggestions),
    )
    .route(
        "/geocode/place/:place_id",
        get(get_geocode_by_place_id::get_geocode_by_place_id),
    )
    .route(
        "/geocode/coordinates",
        get(get_geocode_by_coordinates::get_geocode_by_coordinates),
    )
}
