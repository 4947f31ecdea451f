use async_trait::async_trait;
use tracing::{debug, error};
use urlencoding::encode;

use super::types::{
    google_autocomplete_response::GoogleAutocompleteResponse,
    google_geocode_response::GoogleGeocodeResponse, maps_service_error::MapsServiceError,
    service_status::ServiceStatus,
};
use crate::{autocomplete::backend::SuggestionBackend, types::lat_lng::LatLng};

pub const DEFAULT_MAPS_HOST: &str = "https://maps.googleapis.com";

#[derive(Clone, Debug)]
pub struct MapsServiceConfig {
    pub api_key: String,
    pub host: String,
}

#[derive(Clone)]
pub struct MapsService {
    config: MapsServiceConfig,
    client: reqwest::Client,
}

/// Parameters of one place predictions lookup. Only `input` is required.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AutocompletionRequest {
    pub input: String,
    pub location: Option<LatLng>,
    pub radius: Option<u32>,
    pub language: Option<String>,
    /// Component filter such as `country:us`.
    pub components: Option<String>,
    pub types: Option<String>,
    pub session_token: Option<String>,
}

impl AutocompletionRequest {
    pub fn new(input: &str) -> Self {
        AutocompletionRequest {
            input: input.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GeocodeRequest {
    PlaceId(String),
    Location(LatLng),
}

impl MapsService {
    pub fn new(config: MapsServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn autocomplete_url(&self, input: &AutocompletionRequest) -> String {
        let mut url = format!(
            "{}/maps/api/place/autocomplete/json?input={}&key={}",
            self.config.host,
            encode(&input.input),
            self.config.api_key
        );

        if let Some(location) = input.location {
            url.push_str(&format!("&location={}", location));
            url.push_str(&format!("&radius={}", input.radius.unwrap_or(500)));
        }
        if let Some(ref language) = input.language {
            url.push_str(&format!("&language={}", encode(language)));
        }
        if let Some(ref components) = input.components {
            url.push_str(&format!("&components={}", encode(components)));
        }
        if let Some(ref types) = input.types {
            url.push_str(&format!("&types={}", encode(types)));
        }
        if let Some(ref token) = input.session_token {
            url.push_str(&format!("&sessiontoken={}", encode(token)));
        }

        url
    }

    fn geocode_url(&self, input: &GeocodeRequest) -> String {
        let query = match input {
            GeocodeRequest::PlaceId(place_id) => format!("place_id={}", encode(place_id)),
            GeocodeRequest::Location(location) => format!("latlng={}", location),
        };

        format!(
            "{}/maps/api/geocode/json?{}&key={}",
            self.config.host, query, self.config.api_key
        )
    }

    pub async fn get_autocomplete(
        &self,
        input: AutocompletionRequest,
    ) -> Result<GoogleAutocompleteResponse, MapsServiceError> {
        debug!("Requesting place predictions for '{}'", input.input);

        let resp = self
            .client
            .get(&self.autocomplete_url(&input))
            .send()
            .await
            .map_err(|e| MapsServiceError::Request(e.to_string()))?;

        resp.json::<GoogleAutocompleteResponse>()
            .await
            .map_err(|e| MapsServiceError::Decode(e.to_string()))
    }

    pub async fn geocode(
        &self,
        input: GeocodeRequest,
    ) -> Result<GoogleGeocodeResponse, MapsServiceError> {
        debug!("Requesting geocode for {:?}", input);

        let resp = self
            .client
            .get(&self.geocode_url(&input))
            .send()
            .await
            .map_err(|e| MapsServiceError::Request(e.to_string()))?;

        resp.json::<GoogleGeocodeResponse>()
            .await
            .map_err(|e| MapsServiceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl SuggestionBackend for MapsService {
    async fn get_place_predictions(
        &self,
        request: AutocompletionRequest,
    ) -> GoogleAutocompleteResponse {
        match self.get_autocomplete(request).await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to fetch place predictions: {}", e);
                GoogleAutocompleteResponse {
                    predictions: vec![],
                    status: ServiceStatus::unknown_error(),
                }
            }
        }
    }
}
