//! Entry repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert/query/delete APIs over the `entry` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Title queries match exactly and order by subtitle descending.
//! - An empty result set is a normal outcome, not an error.

use crate::db::StoreResult;
use crate::model::entry::{Entry, EntryId};
use rusqlite::{params, Connection};

const ENTRY_SELECT_SQL: &str = "SELECT
    _id,
    title,
    subtitle
FROM entry";

/// Data-access contract for entry records.
///
/// Implemented by the SQLite repository and by in-memory fakes in tests, so
/// repository callers can be exercised without a database file.
pub trait EntryRepository {
    /// Appends one record and returns the engine-assigned id.
    fn insert(&self, title: &str, subtitle: &str) -> StoreResult<EntryId>;

    /// Returns ids of records whose title equals `title`, ordered by
    /// subtitle descending. Ties in subtitle carry no guaranteed order.
    fn ids_by_title(&self, title: &str) -> StoreResult<Vec<EntryId>>;

    /// Returns full records whose title equals `title`, in the same order
    /// as [`ids_by_title`](EntryRepository::ids_by_title).
    fn entries_by_title(&self, title: &str) -> StoreResult<Vec<Entry>>;

    /// Deletes all records whose title equals `title`; returns the number
    /// of rows removed. Zero matches is success.
    fn delete_by_title(&self, title: &str) -> StoreResult<usize>;
}

/// SQLite-backed entry repository borrowing an open connection.
pub struct SqliteEntryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EntryRepository for SqliteEntryRepository<'_> {
    fn insert(&self, title: &str, subtitle: &str) -> StoreResult<EntryId> {
        self.conn.execute(
            "INSERT INTO entry (title, subtitle) VALUES (?1, ?2);",
            params![title, subtitle],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn ids_by_title(&self, title: &str) -> StoreResult<Vec<EntryId>> {
        let mut stmt = self.conn.prepare(
            "SELECT _id FROM entry
             WHERE title = ?1
             ORDER BY subtitle DESC;",
        )?;

        let mut rows = stmt.query(params![title])?;
        let mut ids = Vec::new();
        while let Some(row) = rows.next()? {
            ids.push(row.get::<_, EntryId>(0)?);
        }

        Ok(ids)
    }

    fn entries_by_title(&self, title: &str) -> StoreResult<Vec<Entry>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ENTRY_SELECT_SQL}
             WHERE title = ?1
             ORDER BY subtitle DESC;"
        ))?;

        let mut rows = stmt.query(params![title])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(Entry {
                id: row.get("_id")?,
                title: row.get("title")?,
                subtitle: row.get("subtitle")?,
            });
        }

        Ok(entries)
    }

    fn delete_by_title(&self, title: &str) -> StoreResult<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM entry WHERE title = ?1;", params![title])?;

        Ok(removed)
    }
}
