//! # REST API Interface Layer
//!
//! HTTP endpoints for the timetable. This layer only translates: it maps
//! the `shared` DTOs onto domain commands, calls the services, and turns
//! domain results and errors into JSON responses with the right status codes.

pub mod error;
pub mod health_apis;
pub mod mappers;
pub mod timetable_apis;
