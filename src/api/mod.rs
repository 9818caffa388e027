//! HTTP API layer.
//!
//! Route registration, request handlers, middleware, and the DTOs that
//! shape the JSON surface.

pub mod doc;
pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
