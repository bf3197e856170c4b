//! SQLite storage bootstrap and schema policy entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the record store.
//! - Enforce the destructive schema-version policy before any data access.
//!
//! # Invariants
//! - The expected schema version is mirrored to `PRAGMA user_version`.
//! - Callers must not read/write entry rows before `ensure_schema` succeeds.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// Engine-level I/O or constraint failure. Surfaced immediately and
    /// never retried; the connection stays usable after a failed statement.
    Storage(rusqlite::Error),
    /// The shared store was requested for a path other than the one that
    /// created it.
    SharedPathConflict { active: PathBuf, requested: PathBuf },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::SharedPathConflict { active, requested } => write!(
                f,
                "shared store already open at `{}`; refusing to open `{}`",
                active.display(),
                requested.display()
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::SharedPathConflict { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(value)
    }
}
