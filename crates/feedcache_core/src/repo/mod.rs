//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data-access contract for entry records.
//! - Isolate SQLite query details from the store handle.
//!
//! # Invariants
//! - Repository SQL binds caller strings as parameters, never by
//!   concatenation.

pub mod entry_repo;
