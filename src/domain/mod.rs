//! Domain layer containing the wiki's entities and storage contracts.
//!
//! The domain layer has no dependency on HTTP, templates or the file system.
//!
//! # Architecture
//!
//! - [`entities`] - Entries, form submissions and their invariants
//! - [`repositories`] - The entry store trait implemented by the infrastructure layer
//!
//! Business rules that combine the two live in
//! [`crate::application::services::EntryService`].

pub mod entities;
pub mod repositories;
