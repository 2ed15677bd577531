//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports and domain logic. They don't know
//! about concrete implementations.

mod movie_catalog;

pub use movie_catalog::{MovieCatalogService, NO_MOVIES_AVAILABLE, NO_MOVIES_FOUND};
