//! # Eager Birds API
//!
//! HTTP surface of the Eager Birds scheduler: the teacher dashboard, the admin
//! slot table and session introspection. All slot rules live in
//! `eagerbirds-core`; this crate only resolves the caller and maps results to
//! HTTP.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Turn requests into access-layer calls
//! - **Middleware**: Caller resolution and error mapping
//! - **Config**: Environment configuration

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eagerbirds_core::{access::SlotAccess, session::TokenVerifier};
use eyre::Result;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Slot access rules over the configured store
    pub access: Arc<SlotAccess>,
    /// Resolves bearer tokens to principals
    pub verifier: Arc<dyn TokenVerifier>,
}

/// Installs the global tracing subscriber at `level`.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Builds the application router with all routes attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Session introspection
        .merge(routes::session::routes())
        // Teacher dashboard endpoints
        .merge(routes::slots::routes())
        // Admin view
        .merge(routes::admin::routes())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_origin(origins)
        .allow_credentials(true)
}

/// Starts the API server with the provided configuration and state
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # use eagerbirds_api::{ApiState, config::ApiConfig, start_server};
/// # async fn run(state: Arc<ApiState>) -> eyre::Result<()> {
/// let config = ApiConfig::from_env()?;
/// start_server(config, state).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, state: Arc<ApiState>) -> Result<()> {
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(axum::error_handling::HandleErrorLayer::new(
                |_: tower::BoxError| async { axum::http::StatusCode::REQUEST_TIMEOUT },
            ))
            .timeout(Duration::from_secs(config.request_timeout))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
