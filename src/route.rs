//! Ledger record types
//!
//! - `Destination`: a named endpoint, deduplicated by exact name
//! - `Departure`: one stored trip row pointing at a destination
//! - `Route`: a departure joined with its destination name, as shown to users

use serde::{Deserialize, Serialize};

/// A named endpoint referenced by one or more departures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: i64,
    pub name: String,
}

/// One scheduled trip as stored in the `departures` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departure {
    pub id: i64,
    pub route_number: i64,
    pub destination_id: i64,
    /// Free-form text, expected to be `HH:MM`
    pub time: String,
}

/// A departure joined with its destination name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub number: i64,
    pub destination: String,
    pub time: String,
}

impl Route {
    pub fn new(number: i64, destination: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            number,
            destination: destination.into(),
            time: time.into(),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} to {} at {}", self.number, self.destination, self.time)
    }
}

/// Row counts for the ledger tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub destinations: usize,
    pub departures: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_display() {
        let route = Route::new(7, "Moscow", "10:00");
        assert_eq!(route.to_string(), "#7 to Moscow at 10:00");
    }

    #[test]
    fn test_route_serializes_flat() {
        let route = Route::new(2, "Kiev", "14:30");
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["number"], 2);
        assert_eq!(json["destination"], "Kiev");
        assert_eq!(json["time"], "14:30");
    }
}
