//! Machine-facing endpoints and shared HTTP middleware.
//!
//! # Modules
//!
//! - [`dto`] - JSON response bodies
//! - [`handlers`] - Health check handler
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
