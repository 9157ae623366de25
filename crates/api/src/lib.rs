//! HTTP layer for the notes service.
//!
//! Exposed as a library so integration tests can build the exact router
//! (with the full middleware stack) that the binary serves.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
