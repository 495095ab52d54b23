//! Application layer services implementing the wiki's behavior.
//!
//! Services consume the repository and renderer traits and give HTTP
//! handlers and the admin CLI one API for every operation.
//!
//! # Available Services
//!
//! - [`services::entry_service::EntryService`] - Entry listing, viewing, saving, random pick and search

pub mod services;
