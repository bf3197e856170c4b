//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection behavior required by the store.
//! - Apply the schema-version policy before returning a usable connection.
//!
//! # Invariants
//! - Returned connections carry a fully ensured `entry` schema.
//! - Returned connections have a busy timeout configured.

use super::schema::ensure_schema;
use super::{StoreError, StoreResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens a SQLite database file and ensures the entry schema.
///
/// # Side effects
/// - May drop and recreate the table when the stored version mismatches.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>, expected_version: u32) -> StoreResult<Connection> {
    open_with("file", expected_version, || Connection::open(path))
}

/// Opens an in-memory SQLite database and ensures the entry schema.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db_in_memory(expected_version: u32) -> StoreResult<Connection> {
    open_with("memory", expected_version, Connection::open_in_memory)
}

fn open_with(
    mode: &str,
    expected_version: u32,
    open_conn: impl FnOnce() -> Result<Connection, rusqlite::Error>,
) -> StoreResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let opened = open_conn().map_err(StoreError::from).and_then(|mut conn| {
        bootstrap_connection(&mut conn, expected_version)?;
        Ok(conn)
    });

    match opened {
        Ok(conn) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection, expected_version: u32) -> StoreResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    ensure_schema(conn, expected_version)?;
    Ok(())
}
