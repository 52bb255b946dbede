//! Event persistence using SQLite

use rusqlite::{Connection, params};
use tracing::{debug, info};

use crate::event::{DATE_FORMAT, Event, EventSet};
use crate::Result;

/// SQLite-backed, append-only store of previously seen events.
///
/// The `comic` table has no key and no uniqueness constraint; deduplication
/// by title is the caller's job (see [`crate::merge`]).
pub struct EventStore {
    conn: Connection,
}

impl EventStore {
    /// Open (or create) the store at the given database path
    pub fn open(db_path: &str) -> Result<Self> {
        debug!("Opening event database at: {}", db_path);
        let conn = Connection::open(db_path)?;
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Create the events table if it does not exist yet
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS comic (
                title TEXT,
                place TEXT,
                start_date DATE,
                end_date DATE
            )",
            [],
        )?;
        Ok(())
    }

    /// Load every persisted event, in row order
    pub fn load_all(&self) -> Result<EventSet> {
        let mut stmt = self
            .conn
            .prepare("SELECT title, place, start_date, end_date FROM comic ORDER BY rowid")?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut events = EventSet::new();
        for (title, place, start, end) in rows {
            events.insert(Event::from_row(title, place, &start, &end)?);
        }

        debug!("Loaded {} stored events", events.len());
        Ok(events)
    }

    /// Append one event. The connection is in autocommit mode, so the row is
    /// durable once this returns.
    pub fn insert(&self, event: &Event) -> Result<()> {
        self.conn.execute(
            "INSERT INTO comic (title, place, start_date, end_date) VALUES (?1, ?2, ?3, ?4)",
            params![
                event.title(),
                event.place(),
                event.start_date().format(DATE_FORMAT).to_string(),
                event.end_date().format(DATE_FORMAT).to_string(),
            ],
        )?;
        info!("Stored new event: {}", event.title());
        Ok(())
    }

    /// Count stored rows (duplicates included)
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM comic", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
