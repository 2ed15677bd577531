#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
pub mod procedures;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::{Related, TestDb};

pub use repositories::SqliteMovieStore;

// Store handle type for adapters that own its lifecycle
pub use sqlx::SqlitePool;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
