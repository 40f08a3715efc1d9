//! HTTP surface of the CMS backend.
//!
//! Thin axum handlers over the `service` crate: JSON CRUD per content
//! type, multipart uploads for media, and static file serving for the
//! storage root.

pub mod errors;
pub mod extract;
pub mod openapi;
pub mod routes;
pub mod startup;

pub use routes::ServerState;
pub use startup::run;
