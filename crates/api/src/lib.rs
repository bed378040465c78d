//! HTTP surface of the landing-page order backend.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
