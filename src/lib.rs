//! webservice - a RESTful web service for managing D&D character data
//!
//! The service exposes:
//! - Liveness and readiness probes
//! - CRUD endpoints for characters under `/api/v1`
//! - An OpenAPI description with Swagger UI
//!
//! Characters are stored through the [`storage::CharacterStore`] seam. The
//! default backend retains nothing, so reads miss and writes are echoed.

pub mod api;
pub mod config;
pub mod error;
pub mod service;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
