//! SQLite-based storage for per-user event collections.
//!
//! Each user's authoritative schedule is one row: a JSON array of events
//! with RFC3339 timestamps. Absence of a row is a valid "no prior
//! schedule" state, not an error. Synthetic suggester output is never
//! written here; callers persist only authoritative collections.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use super::{data_dir, migrations};
use crate::error::{CoreError, DatabaseError};
use crate::plan::event::PlanEvent;

/// SQLite database for schedule storage.
pub struct ScheduleDb {
    conn: Connection,
}

impl ScheduleDb {
    /// Open the schedule database at `~/.config/gameplan/gameplan.db`.
    ///
    /// Creates tables if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()?.join("gameplan.db");
        let conn = Connection::open(&path)
            .map_err(|source| DatabaseError::OpenFailed { path, source })?;
        Self::from_connection(conn)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, CoreError> {
        migrations::migrate(&conn)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Upsert a user's full event collection.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save_schedule(&self, user_id: &str, events: &[PlanEvent]) -> Result<(), CoreError> {
        let payload = serde_json::to_string(events)?;
        self.conn.execute(
            "INSERT INTO schedules (user_id, events, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(user_id) DO UPDATE SET
                 events = excluded.events,
                 updated_at = excluded.updated_at",
            params![user_id, payload, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Load a user's event collection. `Ok(None)` means no prior schedule.
    ///
    /// # Errors
    /// Returns an error if the query fails or the stored payload does not
    /// deserialize.
    pub fn load_schedule(&self, user_id: &str) -> Result<Option<Vec<PlanEvent>>, CoreError> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT events FROM schedules WHERE user_id = ?1",
                [user_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(DatabaseError::from)?;

        match payload {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    /// Delete a user's stored schedule. Deleting an absent schedule is a
    /// no-op.
    ///
    /// # Errors
    /// Returns an error if the write fails.
    pub fn delete_schedule(&self, user_id: &str) -> Result<(), CoreError> {
        self.conn
            .execute("DELETE FROM schedules WHERE user_id = ?1", [user_id])?;
        Ok(())
    }
}
