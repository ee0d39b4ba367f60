//! Axum web adapter for the roster service.
//!
//! Exposes the roster over HTTP/JSON under `/api`:
//!
//! | Method | Path | |
//! |---|---|---|
//! | GET | `/api/classmates` | list |
//! | POST | `/api/classmates` | create (201) |
//! | GET/PUT/DELETE | `/api/classmates/{id}` | read, overwrite, delete |
//! | POST | `/api/classmates/batch` | upsert by ID |
//! | GET | `/api/statistics` | counts per country and city |
//!
//! Errors are `{"error": <message>}` with 400 or 404, or 500 for storage
//! failures outside the batch path.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for test infrastructure
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, DEFAULT_PORT, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::{create_router, create_spa_router};
pub use state::AppState;
