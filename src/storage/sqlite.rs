//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params, OptionalExtension};
use crate::Result;
use crate::route::{Departure, Destination, LedgerStats, Route};
use super::schema;

const SELECT_ROUTES: &str = r#"
SELECT departures.route_number, destinations.name, departures.time
FROM departures
INNER JOIN destinations ON destinations.id = departures.destination_id
"#;

/// SQLite-backed ledger of destinations and departures
pub struct RouteLedger {
    conn: Connection,
}

impl RouteLedger {
    /// Open a database file, creating it and any missing parent directories
    pub fn open(path: &Path) -> Result<Self> {
        tracing::debug!("Opening ledger at {}", path.display());
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        let ledger = Self { conn };
        ledger.initialize()?;
        Ok(ledger)
    }

    /// Create the ledger tables if they are absent. Safe to call repeatedly.
    pub fn initialize(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        tracing::debug!("Schema ready");
        Ok(())
    }

    /// Names of the ledger tables present in the database, sorted.
    pub fn tables(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN (?1, ?2) ORDER BY name",
        )?;
        let names = stmt
            .query_map(params![schema::TABLES[0], schema::TABLES[1]], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }

    // ========== Destination Operations ==========

    /// Find a destination by exact name (no case folding or trimming)
    pub fn find_destination(&self, name: &str) -> Result<Option<Destination>> {
        self.conn
            .query_row(
                "SELECT id, name FROM destinations WHERE name = ?1 ORDER BY id LIMIT 1",
                [name],
                |row| Ok(Destination { id: row.get(0)?, name: row.get(1)? }),
            )
            .optional()
            .map_err(Into::into)
    }

    /// All destinations in insertion order
    pub fn destinations(&self) -> Result<Vec<Destination>> {
        let mut stmt = self.conn.prepare("SELECT id, name FROM destinations ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| Ok(Destination { id: row.get(0)?, name: row.get(1)? }))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    // ========== Departure Operations ==========

    /// Record a departure, creating the destination on first use.
    ///
    /// Neither `time` nor `route_number` is validated. Returns the stored row.
    pub fn add(&mut self, route_number: i64, destination: &str, time: &str) -> Result<Route> {
        let tx = self.conn.transaction()?;

        let existing: Option<i64> = tx
            .query_row(
                "SELECT id FROM destinations WHERE name = ?1 ORDER BY id LIMIT 1",
                [destination],
                |row| row.get(0),
            )
            .optional()?;

        let destination_id = match existing {
            Some(id) => id,
            None => {
                tx.execute("INSERT INTO destinations (name) VALUES (?1)", [destination])?;
                let id = tx.last_insert_rowid();
                tracing::debug!("Created destination {:?} with id {}", destination, id);
                id
            }
        };

        tx.execute(
            "INSERT INTO departures (route_number, destination_id, time) VALUES (?1, ?2, ?3)",
            params![route_number, destination_id, time],
        )?;
        tx.commit()?;

        let route = Route::new(route_number, destination, time);
        tracing::debug!("Added route {}", route);
        Ok(route)
    }

    /// All departures joined with destination names, in insertion order
    pub fn list_all(&self) -> Result<Vec<Route>> {
        let sql = format!("{SELECT_ROUTES} ORDER BY departures.id");
        let mut stmt = self.conn.prepare(&sql)?;
        let routes = stmt
            .query_map([], Self::row_to_route)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        tracing::debug!("Selected {} routes", routes.len());
        Ok(routes)
    }

    /// Departures whose `HH:MM` time is later than the threshold's `HH:MM`.
    ///
    /// Both sides go through `strftime('%H:%M', ...)`, so stored values that are
    /// not times never match. There is no wraparound past midnight.
    pub fn list_after(&self, threshold: &str) -> Result<Vec<Route>> {
        let sql = format!(
            "{SELECT_ROUTES} WHERE strftime('%H:%M', departures.time) > strftime('%H:%M', ?1) ORDER BY departures.id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let routes = stmt
            .query_map([threshold], Self::row_to_route)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        tracing::debug!("Selected {} routes after {:?}", routes.len(), threshold);
        Ok(routes)
    }

    /// The most recently added departure, if any
    pub fn latest(&self) -> Result<Option<Route>> {
        let sql = format!("{SELECT_ROUTES} ORDER BY departures.id DESC LIMIT 1");
        self.conn
            .query_row(&sql, [], Self::row_to_route)
            .optional()
            .map_err(Into::into)
    }

    /// Raw departure rows for a destination id
    pub fn departures_for(&self, destination_id: i64) -> Result<Vec<Departure>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, route_number, destination_id, time FROM departures WHERE destination_id = ?1 ORDER BY id",
        )?;
        let rows = stmt
            .query_map([destination_id], |row| {
                Ok(Departure {
                    id: row.get(0)?,
                    route_number: row.get(1)?,
                    destination_id: row.get(2)?,
                    time: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Helper to convert a joined row to a Route
    fn row_to_route(row: &rusqlite::Row) -> rusqlite::Result<Route> {
        Ok(Route {
            number: row.get(0)?,
            destination: row.get(1)?,
            time: row.get(2)?,
        })
    }

    // ========== Statistics ==========

    /// Row counts for both tables
    pub fn stats(&self) -> Result<LedgerStats> {
        let destinations: i64 = self.conn.query_row("SELECT COUNT(*) FROM destinations", [], |row| row.get(0))?;
        let departures: i64 = self.conn.query_row("SELECT COUNT(*) FROM departures", [], |row| row.get(0))?;
        Ok(LedgerStats {
            destinations: destinations as usize,
            departures: departures as usize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> RouteLedger {
        let mut ledger = RouteLedger::open_in_memory().unwrap();
        ledger.add(2, "Moscow", "10:00").unwrap();
        ledger.add(3, "Kiev", "08:00").unwrap();
        ledger
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let ledger = RouteLedger::open_in_memory().unwrap();
        ledger.initialize().unwrap();
        ledger.initialize().unwrap();
        assert_eq!(ledger.tables().unwrap(), vec!["departures", "destinations"]);
    }

    #[test]
    fn test_add_new_destination() {
        let mut ledger = RouteLedger::open_in_memory().unwrap();
        ledger.add(5, "Minsk", "12:15").unwrap();

        let stats = ledger.stats().unwrap();
        assert_eq!(stats.destinations, 1);
        assert_eq!(stats.departures, 1);

        let dest = ledger.find_destination("Minsk").unwrap().unwrap();
        let departures = ledger.departures_for(dest.id).unwrap();
        assert_eq!(departures.len(), 1);
        assert_eq!(departures[0].route_number, 5);
        assert_eq!(departures[0].time, "12:15");
    }

    #[test]
    fn test_add_reuses_destination() {
        let mut ledger = RouteLedger::open_in_memory().unwrap();
        ledger.add(1, "Moscow", "07:00").unwrap();
        let first = ledger.find_destination("Moscow").unwrap().unwrap();
        ledger.add(4, "Moscow", "19:30").unwrap();

        assert_eq!(ledger.destinations().unwrap().len(), 1);
        assert_eq!(ledger.departures_for(first.id).unwrap().len(), 2);
    }

    #[test]
    fn test_destination_match_is_exact() {
        let mut ledger = RouteLedger::open_in_memory().unwrap();
        ledger.add(1, "Moscow", "07:00").unwrap();
        ledger.add(1, "moscow", "07:00").unwrap();
        ledger.add(1, " Moscow", "07:00").unwrap();

        assert_eq!(ledger.stats().unwrap().destinations, 3);
    }

    #[test]
    fn test_list_after() {
        let ledger = fixture();
        let routes = ledger.list_after("09:00").unwrap();
        assert_eq!(routes, vec![Route::new(2, "Moscow", "10:00")]);
    }

    #[test]
    fn test_list_after_is_strict() {
        let ledger = fixture();
        assert!(ledger.list_after("10:00").unwrap().is_empty());
    }

    #[test]
    fn test_list_after_skips_non_times() {
        let mut ledger = fixture();
        ledger.add(9, "Nowhere", "soon").unwrap();
        let routes = ledger.list_after("00:00").unwrap();
        assert_eq!(routes.len(), 2);
        assert!(routes.iter().all(|r| r.destination != "Nowhere"));
    }

    #[test]
    fn test_list_all_in_insertion_order() {
        let ledger = fixture();
        let routes = ledger.list_all().unwrap();
        assert_eq!(
            routes,
            vec![Route::new(2, "Moscow", "10:00"), Route::new(3, "Kiev", "08:00")]
        );
    }

    #[test]
    fn test_latest_without_validation() {
        let mut ledger = fixture();
        let stored = ledger.add(1, "text", "text").unwrap();
        let latest = ledger.latest().unwrap().unwrap();
        assert_eq!(latest, stored);
        assert_eq!(latest, Route::new(1, "text", "text"));
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("routes.db");
        let ledger = RouteLedger::open(&path).unwrap();
        assert!(path.is_file());
        assert_eq!(ledger.tables().unwrap().len(), 2);
    }

    #[test]
    fn test_open_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = RouteLedger::open(&blocker.join("sub").join("routes.db")).err().unwrap();
        assert!(matches!(err, crate::Error::Io(_)));
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = RouteLedger::open_in_memory().unwrap();
        assert!(ledger.list_all().unwrap().is_empty());
        assert!(ledger.latest().unwrap().is_none());
        assert!(ledger.find_destination("Moscow").unwrap().is_none());
    }
}
