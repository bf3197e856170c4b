//! Caller-facing store handle and shared-instance bootstrap.
//!
//! # Responsibility
//! - Own the single connection to one backing file and serialize access.
//! - Provide the optional process-wide shared instance.
//!
//! # Invariants
//! - Every operation locks the one underlying connection; the engine does
//!   not support concurrent writers on a single connection.
//! - The shared instance is created at most once per process and is
//!   idempotent only for the path that created it.
//! - The store is the sole mutator of its backing file.

use crate::db::schema::SCHEMA_VERSION;
use crate::db::{open_db, open_db_in_memory, StoreError, StoreResult};
use crate::model::entry::{Entry, EntryId};
use crate::repo::entry_repo::{EntryRepository, SqliteEntryRepository};
use log::info;
use once_cell::sync::OnceCell;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Default backing file name, joined under the configured data directory.
pub const DB_FILE_NAME: &str = "feedcache.db";

static SHARED_STORE: OnceCell<Store> = OnceCell::new();

/// Backing file location and expected schema version for one store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    path: PathBuf,
    schema_version: u32,
}

impl StoreConfig {
    /// Config for [`DB_FILE_NAME`] inside `data_dir`, at the schema version
    /// expected by this build.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(DB_FILE_NAME),
            schema_version: SCHEMA_VERSION,
        }
    }

    /// Overrides the expected schema version.
    ///
    /// Opening an existing file under a different version discards all of
    /// its rows; this is how the destructive reset is exercised in tests.
    pub fn with_schema_version(mut self, version: u32) -> Self {
        self.schema_version = version;
        self
    }

    /// Full path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Handle to one backing file.
///
/// All operations are synchronous and block the caller until the engine
/// completes its file I/O; callers needing responsiveness must offload to a
/// worker thread themselves. A failed statement leaves the handle usable.
pub struct Store {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("path", &self.path).finish()
    }
}

impl Store {
    /// Opens (or creates) the backing file and applies the schema policy.
    ///
    /// Idempotent on an existing file stamped with the expected version;
    /// destructive when the stamp differs (see [`crate::db::schema`]).
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        let conn = open_db(&config.path, config.schema_version)?;
        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(config.path.clone()),
        })
    }

    /// Opens an in-memory store. Used by tests and smoke probes.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = open_db_in_memory(SCHEMA_VERSION)?;
        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    /// Returns the process-wide shared store, creating it on first call.
    ///
    /// Later calls with the same path return the existing instance — the
    /// store keeps the schema version that created it. A call naming a
    /// different path is rejected rather than opening a second connection
    /// behind the first caller's back.
    pub fn open_shared(config: &StoreConfig) -> StoreResult<&'static Store> {
        let store = SHARED_STORE.get_or_try_init(|| Store::open(config))?;

        match store.path.as_deref() {
            Some(active) if active == config.path() => Ok(store),
            active => Err(StoreError::SharedPathConflict {
                active: active.map(Path::to_path_buf).unwrap_or_default(),
                requested: config.path().to_path_buf(),
            }),
        }
    }

    /// Releases the underlying file handle.
    ///
    /// Dropping the store releases it as well on every other exit path;
    /// this form surfaces the engine's close-time error instead of
    /// discarding it.
    pub fn close(self) -> StoreResult<()> {
        let conn = self
            .conn
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        conn.close().map_err(|(_conn, err)| StoreError::Storage(err))?;

        info!("event=db_close module=store status=ok");
        Ok(())
    }

    fn lock_conn(&self) -> MutexGuard<'_, Connection> {
        // A poisoned lock means another thread panicked mid-statement;
        // operations here are single statements, so no half-applied state
        // can be left behind and the connection is taken as-is.
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EntryRepository for Store {
    fn insert(&self, title: &str, subtitle: &str) -> StoreResult<EntryId> {
        let conn = self.lock_conn();
        SqliteEntryRepository::new(&conn).insert(title, subtitle)
    }

    fn ids_by_title(&self, title: &str) -> StoreResult<Vec<EntryId>> {
        let conn = self.lock_conn();
        SqliteEntryRepository::new(&conn).ids_by_title(title)
    }

    fn entries_by_title(&self, title: &str) -> StoreResult<Vec<Entry>> {
        let conn = self.lock_conn();
        SqliteEntryRepository::new(&conn).entries_by_title(title)
    }

    fn delete_by_title(&self, title: &str) -> StoreResult<usize> {
        let conn = self.lock_conn();
        SqliteEntryRepository::new(&conn).delete_by_title(title)
    }
}
