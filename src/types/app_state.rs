use crate::services::maps_client::maps_service::{MapsService, MapsServiceConfig};

#[derive(Clone)]
pub struct AppState {
    pub maps_config: MapsServiceConfig,
    pub maps_service: MapsService,
    pub auth_key: Option<String>,
}
