//! Browser-facing wiki pages.
//!
//! Server-side rendered HTML using Askama templates.
//!
//! # Modules
//!
//! - [`dto`] - Form and query data submitted by the browser
//! - [`handlers`] - Page handlers
//! - [`routes`] - The route table

pub mod dto;
pub mod handlers;
pub mod routes;
