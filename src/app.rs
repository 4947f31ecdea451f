use crate::{
    config::AppConfig, middlewares::auth::auth_middleware, routes::apply_routes,
    services::maps_client::maps_service::MapsService, types::app_state::AppState,
};
use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

pub fn gen_app(config: &AppConfig) -> Router {
    let cors_middleware = CorsLayer::permissive();
    let state = AppState {
        maps_config: config.maps.clone(),
        maps_service: MapsService::new(config.maps.clone()),
        auth_key: config.auth_key.clone(),
    };

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}

async fn root() -> &'static str {
    "places-autocomplete"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub google_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app_with_auth(auth_key: Option<String>) -> MockApp {
    use crate::services::maps_client::maps_service::MapsServiceConfig;

    let google_server = mockito::Server::new_async().await;

    let app = gen_app(&AppConfig {
        maps: MapsServiceConfig {
            api_key: "key".to_string(),
            host: google_server.url(),
        },
        auth_key,
        bind_addr: "127.0.0.1:0".to_string(),
    });

    MockApp { app, google_server }
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    gen_mock_app_with_auth(None).await
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn root_responds() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
