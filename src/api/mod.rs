//! API Module
//!
//! HTTP handlers and routing for the notes server REST API.
//!
//! # Endpoints
//! - `GET /notes`, `POST /notes` - Index and creation
//! - `GET /notes/:id`, `PUT /notes/:id`, `DELETE /notes/:id` - Single note
//! - `GET /recent` - Recently viewed notes
//! - `GET /health`, `GET /health/cache` - Health checks

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
