//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - destinations(id, name)
//! - departures(id, route_number, destination_id, time)

pub mod schema;
pub mod sqlite;

pub use sqlite::RouteLedger;
