//! Entry domain model.
//!
//! # Responsibility
//! - Define the canonical persisted record for feed/inventory items.
//!
//! # Invariants
//! - `id` is engine-assigned, unique, and never reused within a store
//!   lifetime.
//! - `title` and `subtitle` are unconstrained text.

use serde::{Deserialize, Serialize};

/// Engine-assigned row identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = i64;

/// Canonical persisted record: one row of the `entry` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Serialized as `_id` to match the persisted column name.
    #[serde(rename = "_id")]
    pub id: EntryId,
    /// Display title. Title queries filter on this field by exact match.
    pub title: String,
    /// Secondary display line. Title queries sort on this field descending.
    pub subtitle: String,
}
