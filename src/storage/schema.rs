//! Database schema definitions

/// SQL to create the destinations table
pub const CREATE_DESTINATIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS destinations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
)
"#;

/// SQL to create the departures table
pub const CREATE_DEPARTURES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS departures (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    route_number INTEGER NOT NULL,
    destination_id INTEGER NOT NULL,
    time TEXT NOT NULL,
    FOREIGN KEY(destination_id) REFERENCES destinations(id)
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_destinations_name ON destinations(name)",
    "CREATE INDEX IF NOT EXISTS idx_departures_destination ON departures(destination_id)",
];

/// Names of the tables owned by the ledger
pub const TABLES: &[&str] = &["destinations", "departures"];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_DESTINATIONS_TABLE, CREATE_DEPARTURES_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
