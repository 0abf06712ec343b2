use std::sync::Arc;

use axum::{
    extract::{FromRef, MatchedPath},
    http::{header, HeaderValue, Method, Request},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::configuration::{CorsSettings, Settings};
use crate::routes::{check_health, create_lead, list_leads};
use crate::store::LeadStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LeadStore>,
    pub cors: CorsSettings,
}

impl FromRef<AppState> for Arc<LeadStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

pub fn get_app_state(configuration: &Settings) -> AppState {
    AppState {
        store: Arc::new(LeadStore::new()),
        cors: configuration.application.cors.clone(),
    }
}

pub async fn run(listener: TcpListener, state: AppState) {
    let app = router(state);

    axum::serve(listener, app)
        .await
        .expect("Failed to start up the application");
}

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors);

    Router::new()
        .route("/api/v1/leads", post(create_lead).get(list_leads))
        .with_state(state)
        .route("/health", get(check_health))
        .layer(
            // Refer to https://github.com/tokio-rs/axum/blob/main/examples/tracing-aka-logging/Cargo.toml
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str);
                tracing::info_span!(
                    "Starting HTTP request",
                    method = ?request.method(),
                    path,
                    request_id = %Uuid::new_v4(),
                )
            }),
        )
        .layer(cors)
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    // A literal "*" entry selects the wide-open policy explicitly.
    if settings.origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins = settings
        .origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .expect("Failed to parse an allowed origin from CORS configuration");

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
