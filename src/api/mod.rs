//! HTTP JSON API.
//!
//! `POST /api/summarize` and `POST /api/narrative` take
//! `{"medical_report": "..."}`; `GET /api/health` is a liveness check.
//! The router is composable: `api_router()` returns a `Router` that can
//! be mounted on any axum server.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use server::{start_server, ApiServer, ServerError, ServerSession};
pub use types::ApiContext;
