//! Lingo API - HTTP server
//!
//! Provides HTTP endpoints for sentence analysis, spelling correction and
//! word lookup.
//!
//! Author: hephaex@gmail.com

pub mod cache;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

use lingo_core::config::{AppConfig, LoggingConfig};

use crate::handlers::health;
use crate::state::AppState;

/// OpenAPI document for the public endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::parse::parse_handler,
        handlers::spellcheck::spellcheck_handler,
        handlers::word::word_handler,
    ),
    components(schemas(
        error::ApiError,
        handlers::health::HealthResponse,
        handlers::spellcheck::SpellcheckResponse,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "nlp", description = "Parsing, spelling and lexical lookup")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);
    let cors = cors_layer(&state.config.server.cors_origins);

    Router::new()
        .route("/", get(health::health_check))
        .route("/health", get(health::health_check))
        .route("/metrics", get(health::metrics))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/nlp", routes::nlp_routes())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .with_state(state)
}

/// Router over fixture backends
#[cfg(any(test, feature = "test-utils"))]
pub fn create_router_for_testing() -> Router {
    create_router(Arc::new(testing::fixture_state()))
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("{},lingo_api=debug,tower_http=debug", logging.level).into()
    });

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.json_format {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Load every backend and serve until the process stops
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let state = Arc::new(AppState::load(config).await?);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Lingo API Server starting on http://{}", addr);
    info!("OpenAPI document at http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
