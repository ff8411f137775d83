//! # IO Module
//!
//! Interface layer between clients and the domain logic. Currently a REST
//! API served with Axum; handlers receive the services through Axum state.

pub mod rest;

pub use rest::*;
