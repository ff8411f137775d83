//! # REST API for the Timetable
//!
//! - `GET  /api/timetable`             stored entries, insertion order
//! - `POST /api/timetable`             add an entry
//! - `GET  /api/timetable/occurrences` expanded calendar sessions, optionally for one month

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use shared::{CreateTimetableEntryRequest, CreateTimetableEntryResponse, OccurrenceListResponse, TimetableListResponse};
use tracing::{error, info, warn};

use crate::domain::commands::timetable::MonthQuery;
use crate::io::rest::error::ApiError;
use crate::io::rest::mappers::entry_mapper::EntryMapper;
use crate::io::rest::mappers::occurrence_mapper::OccurrenceMapper;
use crate::AppState;

pub const CREATED_MESSAGE: &str = "Timetable entry added successfully!";

// Query parameters for the occurrence listing
#[derive(Debug, Deserialize)]
pub struct OccurrenceQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// Create a router for the timetable APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/timetable", get(list_entries).post(create_entry))
        .route("/timetable/occurrences", get(list_occurrences))
}

/// List all stored entries
pub async fn list_entries(State(state): State<AppState>) -> Response {
    info!("GET /api/timetable");

    match state.timetable_service.list_entries().await {
        Ok(entries) => {
            let response = TimetableListResponse {
                data: EntryMapper::to_dto_list(entries),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list timetable entries: {:#}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Add a new entry
pub async fn create_entry(
    State(state): State<AppState>,
    body: Bytes,
) -> Response {
    // Content-Type is not required
    let request: CreateTimetableEntryRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("POST /api/timetable - malformed body: {}", e);
            return ApiError::MalformedRequest(e.to_string()).into_response();
        }
    };
    info!("POST /api/timetable - request: {:?}", request);

    match state.timetable_service.create_entry(EntryMapper::to_command(request)).await {
        Ok(entry) => {
            let response = CreateTimetableEntryResponse {
                message: CREATED_MESSAGE.to_string(),
                data: EntryMapper::to_dto(entry),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            let api_error = ApiError::from(e);
            if api_error.status().is_server_error() {
                error!("Failed to create timetable entry: {:?}", api_error);
            } else {
                warn!("Rejected timetable entry: {:?}", api_error);
            }
            api_error.into_response()
        }
    }
}

/// List expanded occurrences sorted by start time
pub async fn list_occurrences(
    State(state): State<AppState>,
    query: Result<Query<OccurrenceQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return ApiError::BadQuery(rejection.body_text()).into_response(),
    };
    info!("GET /api/timetable/occurrences - query: {:?}", query);

    let month_query = match (query.month, query.year) {
        (Some(month), Some(year)) => Some(MonthQuery { month, year }),
        (None, None) => None,
        _ => {
            return ApiError::BadQuery("month and year must be given together".to_string()).into_response();
        }
    };

    let window = match month_query {
        Some(q) => match state.calendar_service.month_window(q.month, q.year) {
            Some(window) => Some(window),
            None => return ApiError::BadQuery("Invalid month/year".to_string()).into_response(),
        },
        None => None,
    };

    let entries = match state.timetable_service.list_entries().await {
        Ok(entries) => entries,
        Err(e) => {
            error!("Failed to get entries for calendar: {:#}", e);
            return ApiError::from(e).into_response();
        }
    };

    let occurrences = state.calendar_service.occurrences(&entries, window);
    let response = OccurrenceListResponse {
        data: OccurrenceMapper::to_dto_list(occurrences),
    };
    (StatusCode::OK, Json(response)).into_response()
}
