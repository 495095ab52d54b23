//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for entry storage and Markdown rendering.
//!
//! # Modules
//!
//! - [`markdown`] - Markdown-to-HTML rendering
//! - [`persistence`] - File-system and in-memory entry stores

pub mod markdown;
pub mod persistence;
