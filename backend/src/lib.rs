//! # Timetable Backend
//!
//! Non-UI logic for the university timetable.
//!
//! The backend follows a layered architecture:
//! ```text
//! Client (browser table / calendar views)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (parsing, recurrence expansion, services)
//!     ↓
//! Storage Layer (in-memory entry store)
//! ```
//!
//! Services are created once at startup and handed to the handlers through
//! Axum state; nothing lives in global variables.

pub mod config;
pub mod domain;
pub mod io;
pub mod logging;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{ServerConfig, Settings};
use crate::domain::{CalendarService, TimetableService};
use crate::storage::MemoryConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub timetable_service: TimetableService<MemoryConnection>,
    pub calendar_service: CalendarService,
}

/// Initialize the backend with all required services
pub fn initialize_backend(settings: &Settings) -> Result<AppState> {
    info!("Setting up in-memory timetable store");
    let connection = Arc::new(MemoryConnection::new());

    info!("Setting up domain model");
    let policy = settings.entry_policy();
    info!(
        "Recurrence horizons: named={}, legacy weekly={}, strict formats={}",
        policy.recurrence_horizon, policy.legacy_weekly_horizon, policy.strict_formats
    );
    let timetable_service = TimetableService::new(connection, policy);
    let calendar_service = CalendarService::new();

    Ok(AppState {
        timetable_service,
        calendar_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, server: &ServerConfig) -> Result<Router> {
    let origin = server
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin '{}'", server.cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Ok(Router::new()
        .route("/health", get(io::health_apis::health))
        .nest("/api", io::timetable_apis::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use shared::HealthResponse;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health() -> Result<(), Box<dyn std::error::Error>> {
        let settings = Settings::default();
        let app = create_router(initialize_backend(&settings)?, &settings.server)?;

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let health: HealthResponse = serde_json::from_slice(&body)?;
        assert_eq!(health.status, "ok");
        Ok(())
    }

    #[test]
    fn test_invalid_cors_origin_is_an_error() {
        let mut settings = Settings::default();
        settings.server.cors_origin = "bad\norigin".to_string();

        let state = initialize_backend(&settings).unwrap();
        assert!(create_router(state, &settings.server).is_err());
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
        let settings = Settings::default();
        let app = create_router(initialize_backend(&settings)?, &settings.server)?;

        let response = app
            .oneshot(Request::builder().uri("/api/unknown").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }
}
