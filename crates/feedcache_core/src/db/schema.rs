//! Entry table schema and destructive version reset.
//!
//! # Responsibility
//! - Create the `entry` table on first open.
//! - Drop and recreate it when the stored version differs from the expected
//!   one, in either direction.
//!
//! # Invariants
//! - The applied version is mirrored to `PRAGMA user_version`.
//! - A version mismatch discards all rows; no row migration is attempted.
//! - Every reset emits a `schema_reset` warning so the wipe is observable.

use crate::db::StoreResult;
use log::warn;
use rusqlite::Connection;

/// Schema version expected by this build.
///
/// Bumping this number wipes existing stores on next open; rows never
/// survive a version change.
pub const SCHEMA_VERSION: u32 = 1;

const CREATE_ENTRY_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS entry (
    _id      INTEGER PRIMARY KEY,
    title    TEXT,
    subtitle TEXT
);";

const DROP_ENTRY_TABLE_SQL: &str = "DROP TABLE IF EXISTS entry;";

/// Brings the connection to `expected_version`, atomically.
///
/// A fresh database (`user_version` 0) gets the table created. A database
/// stamped with any other version is reset: the table is dropped and
/// recreated empty, then restamped.
pub fn ensure_schema(conn: &mut Connection, expected_version: u32) -> StoreResult<()> {
    let stored_version = current_user_version(conn)?;

    let tx = conn.transaction()?;
    if stored_version != 0 && stored_version != expected_version {
        warn!(
            "event=schema_reset module=db status=warn stored_version={} expected_version={} detail=all_rows_discarded",
            stored_version, expected_version
        );
        tx.execute_batch(DROP_ENTRY_TABLE_SQL)?;
    }
    tx.execute_batch(CREATE_ENTRY_TABLE_SQL)?;
    tx.execute_batch(&format!("PRAGMA user_version = {expected_version};"))?;
    tx.commit()?;

    Ok(())
}

fn current_user_version(conn: &Connection) -> StoreResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
