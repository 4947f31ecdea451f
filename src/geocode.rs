//! Resolving suggestions and coordinates into geocoded places.
//!
//! Every call builds its own [`MapsService`] and makes exactly one request.

use tracing::{debug, error};

use crate::{
    services::maps_client::{
        maps_service::{GeocodeRequest, MapsService, MapsServiceConfig},
        types::{
            google_geocode_response::GeocodeResult, maps_service_error::MapsServiceError,
            service_status::ServiceStatus,
        },
    },
    types::{lat_lng::LatLng, suggestion::Suggestion},
};

#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeError {
    PlaceId {
        place_id: String,
        status: ServiceStatus,
    },
    Coordinates {
        location: LatLng,
        status: ServiceStatus,
    },
    /// The geocoder never gave a readable answer.
    Transport { query: String, message: String },
}

impl GeocodeError {
    /// Status reported by the geocoder, `None` when it never answered.
    pub fn status(&self) -> Option<&ServiceStatus> {
        match self {
            GeocodeError::PlaceId { status, .. } | GeocodeError::Coordinates { status, .. } => {
                Some(status)
            }
            GeocodeError::Transport { .. } => None,
        }
    }
}

fn describe_place_id(place_id: &str) -> String {
    format!("a place with an ID of '{}'", place_id)
}

fn describe_coordinates(location: &LatLng) -> String {
    format!("coordinates '{}, {}'", location.lng, location.lat)
}

impl std::fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GeocodeError::PlaceId { place_id, status } => write!(
                f,
                "Geocoding query for {} failed - response status: {}",
                describe_place_id(place_id),
                status
            ),
            GeocodeError::Coordinates { location, status } => write!(
                f,
                "Geocoding query for {} failed - response status: {}",
                describe_coordinates(location),
                status
            ),
            GeocodeError::Transport { query, message } => {
                write!(f, "Geocoding query for {} failed - {}", query, message)
            }
        }
    }
}

impl std::error::Error for GeocodeError {}

enum GeocodeFailure {
    Status(ServiceStatus),
    Transport(MapsServiceError),
}

async fn geocode(
    config: &MapsServiceConfig,
    request: GeocodeRequest,
) -> Result<Vec<GeocodeResult>, GeocodeFailure> {
    let service = MapsService::new(config.clone());

    let body = service.geocode(request).await.map_err(|e| {
        error!("Failed to geocode: {}", e);
        GeocodeFailure::Transport(e)
    })?;

    if body.status.is_zero_results() {
        debug!("Geocoding returned no results");
        return Ok(vec![]);
    }

    if !body.status.is_ok() {
        if let Some(message) = body.error_message {
            debug!("Geocoder error message: {}", message);
        }
        return Err(GeocodeFailure::Status(body.status));
    }

    Ok(body.results)
}

/// Looks up a place by id. `ZERO_RESULTS` resolves to an empty list; any other
/// non-`OK` status is an error naming the id.
pub async fn geocode_by_place_id(
    config: &MapsServiceConfig,
    place_id: &str,
) -> Result<Vec<GeocodeResult>, GeocodeError> {
    geocode(config, GeocodeRequest::PlaceId(place_id.to_string()))
        .await
        .map_err(|failure| match failure {
            GeocodeFailure::Status(status) => GeocodeError::PlaceId {
                place_id: place_id.to_string(),
                status,
            },
            GeocodeFailure::Transport(e) => GeocodeError::Transport {
                query: describe_place_id(place_id),
                message: e.to_string(),
            },
        })
}

pub async fn geocode_by_suggestion(
    config: &MapsServiceConfig,
    suggestion: &Suggestion,
) -> Result<Vec<GeocodeResult>, GeocodeError> {
    geocode_by_place_id(config, &suggestion.id).await
}

pub async fn geocode_by_coordinates(
    config: &MapsServiceConfig,
    location: LatLng,
) -> Result<Vec<GeocodeResult>, GeocodeError> {
    geocode(config, GeocodeRequest::Location(location))
        .await
        .map_err(|failure| match failure {
            GeocodeFailure::Status(status) => GeocodeError::Coordinates { location, status },
            GeocodeFailure::Transport(e) => GeocodeError::Transport {
                query: describe_coordinates(&location),
                message: e.to_string(),
            },
        })
}

/// Coordinates of the first result, if any.
pub fn get_lat_lng(results: &[GeocodeResult]) -> Option<LatLng> {
    results.first().map(|r| r.geometry.location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::maps_client::types::google_geocode_response::{
        GoogleGeocodeResponse, GoogleGeocodeResponseGeometry,
    };

    const SPACE_NEEDLE_PLACE_ID: &str = "ChIJ2cTu4UUVkFQRM-XCxwhyzEQ";

    fn config_for(server: &mockito::ServerGuard) -> MapsServiceConfig {
        MapsServiceConfig {
            api_key: "key".to_string(),
            host: server.url(),
        }
    }

    fn space_needle() -> GeocodeResult {
        GeocodeResult {
            place_id: SPACE_NEEDLE_PLACE_ID.to_string(),
            formatted_address: "400 Broad St, Seattle, WA 98109, USA".to_string(),
            geometry: GoogleGeocodeResponseGeometry {
                location: LatLng::new(47.6205063, -122.3492774),
                location_type: Some("ROOFTOP".to_string()),
            },
            address_components: vec![],
            types: vec!["premise".to_string()],
        }
    }

    #[tokio::test]
    async fn test_geocode_by_place_id_resolves() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/maps/api/geocode/json")
            .match_query(mockito::Matcher::UrlEncoded(
                "place_id".into(),
                SPACE_NEEDLE_PLACE_ID.into(),
            ))
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::to_string(&GoogleGeocodeResponse {
                    results: vec![space_needle()],
                    status: ServiceStatus::ok(),
                    error_message: None,
                })
                .unwrap(),
            )
            .expect(1)
            .create_async()
            .await;

        let results = geocode_by_place_id(&config_for(&server), SPACE_NEEDLE_PLACE_ID)
            .await
            .unwrap();

        mock.assert_async().await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].place_id, SPACE_NEEDLE_PLACE_ID);
        assert_eq!(
            get_lat_lng(&results),
            Some(LatLng::new(47.6205063, -122.3492774))
        );
    }

    #[tokio::test]
    async fn test_geocode_by_place_id_rejects_on_error_status() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/maps/api/geocode/json")
            .match_query(mockito::Matcher::Any)
            .with_body(r#"{"results": [], "status": "INVALID_REQUEST", "error_message": "Invalid request."}"#)
            .create_async()
            .await;

        let err = geocode_by_place_id(&config_for(&server), "invalid-id")
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(&ServiceStatus::new("INVALID_REQUEST")));
        assert!(err.to_string().contains("'invalid-id'"));
        assert!(err.to_string().contains("INVALID_REQUEST"));
    }

    #[tokio::test]
    async fn test_zero_results_is_empty_not_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/maps/api/geocode/json")
            .match_query(mockito::Matcher::Any)
            .with_body(r#"{"results": [], "status": "ZERO_RESULTS"}"#)
            .create_async()
            .await;

        let results = geocode_by_place_id(&config_for(&server), "nowhere")
            .await
            .unwrap();

        assert!(results.is_empty());
        assert_eq!(get_lat_lng(&results), None);
    }

    #[tokio::test]
    async fn test_unreadable_response_is_transport_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/maps/api/geocode/json")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .with_body("unavailable")
            .create_async()
            .await;

        let err = geocode_by_place_id(&config_for(&server), "abc")
            .await
            .unwrap_err();

        assert_eq!(err.status(), None);
        assert!(matches!(err, GeocodeError::Transport { .. }));
        let message = err.to_string();
        assert!(message.starts_with("Geocoding query for a place with an ID of 'abc' failed - "));
        assert!(!message.contains("response status"));
    }

    #[tokio::test]
    async fn test_geocode_by_suggestion_uses_its_id() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/maps/api/geocode/json")
            .match_query(mockito::Matcher::UrlEncoded(
                "place_id".into(),
                SPACE_NEEDLE_PLACE_ID.into(),
            ))
            .with_body(
                serde_json::to_string(&GoogleGeocodeResponse {
                    results: vec![space_needle()],
                    status: ServiceStatus::ok(),
                    error_message: None,
                })
                .unwrap(),
            )
            .create_async()
            .await;

        let suggestion = Suggestion::new("Space Needle, Broad Street, Seattle, WA, USA", SPACE_NEEDLE_PLACE_ID);
        let results = geocode_by_suggestion(&config_for(&server), &suggestion)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(results[0].place_id, suggestion.id);
    }

    #[tokio::test]
    async fn test_geocode_by_coordinates() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/maps/api/geocode/json")
            .match_query(mockito::Matcher::UrlEncoded(
                "latlng".into(),
                "47.6205063,-122.3492774".into(),
            ))
            .with_body(
                serde_json::to_string(&GoogleGeocodeResponse {
                    results: vec![space_needle()],
                    status: ServiceStatus::ok(),
                    error_message: None,
                })
                .unwrap(),
            )
            .create_async()
            .await;

        server
            .mock("GET", "/maps/api/geocode/json")
            .match_query(mockito::Matcher::UrlEncoded("latlng".into(), "0,0".into()))
            .with_body(r#"{"results": [], "status": "REQUEST_DENIED"}"#)
            .create_async()
            .await;

        let config = config_for(&server);

        let results = geocode_by_coordinates(&config, LatLng::new(47.6205063, -122.3492774))
            .await
            .unwrap();
        assert_eq!(results[0].place_id, SPACE_NEEDLE_PLACE_ID);

        let err = geocode_by_coordinates(&config, LatLng::new(0.0, 0.0))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Geocoding query for coordinates '0, 0' failed - response status: REQUEST_DENIED"
        );
    }
}
