//! Client library for the league backend.
//!
//! Everything that is not UI lives here: the HTTP client and its transports, the
//! endpoint map, typed services per resource, DTOs, and the pure logic the dashboard
//! runs client-side (match-sheet validation, form validation, listing helpers,
//! notification bookkeeping, and route access).

pub mod access;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod listing;
pub mod model;
pub mod notification;
pub mod service;
pub mod storage;
pub mod validation;

pub use client::{ApiClient, SessionHandler};
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
