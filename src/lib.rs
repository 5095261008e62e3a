//! # Routes - Departure Ledger
//!
//! Records bus route departures in a local SQLite database and queries them back.
//!
//! Routes provides:
//! - A two-table relational model (destinations, departures)
//! - `RouteLedger`, the SQLite-backed store with add / list / filter operations
//! - TOML configuration for the default database location
//! - Table and JSON rendering for the command-line front end

pub mod route;
pub mod storage;
pub mod config;
pub mod output;
pub mod ui;

// Re-exports for convenient access
pub use route::{Departure, Destination, LedgerStats, Route};
pub use storage::RouteLedger;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ledger operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
