#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! `SQLite` storage for the administrative hierarchy.
//!
//! Uses `switchy_database` for all statements. [`loader::BulkLoader`] is
//! the only writer of the four hierarchy tables; [`queries`] and [`runs`]
//! cover reads and the run history.

pub mod constraints;
pub mod db;
pub mod loader;
pub mod queries;
pub mod runs;

pub use wilayah_database_models as models;

/// Errors that can occur during database operations.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A database query or command failed.
    #[error("Database error: {0}")]
    Database(String),

    /// An I/O operation failed (e.g., creating the database directory).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Emptying a table failed.
    #[error("Failed to truncate table {table}: {message}")]
    Truncate {
        /// Table that could not be emptied.
        table: &'static str,
        /// Underlying database error.
        message: String,
    },

    /// A batch insert failed. Earlier batches stay committed.
    #[error("Failed to insert batch {batch} into {table}: {message}")]
    Insert {
        /// Target table.
        table: &'static str,
        /// Zero-based index of the failing batch.
        batch: usize,
        /// Underlying database error.
        message: String,
    },

    /// A column value could not be converted to the expected type.
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },

    /// Toggling foreign-key enforcement failed.
    #[error("Failed to set foreign key enforcement: {message}")]
    Constraint {
        /// Underlying database error.
        message: String,
    },
}

impl From<switchy_database::DatabaseError> for DbError {
    fn from(e: switchy_database::DatabaseError) -> Self {
        Self::Database(e.to_string())
    }
}
