//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `feedcache_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use feedcache_core::{EntryRepository, Store, StoreResult};

fn main() -> StoreResult<()> {
    let store = Store::open_in_memory()?;

    let first = store.insert("My Title", "Z")?;
    let second = store.insert("My Title", "A")?;
    let ids = store.ids_by_title("My Title")?;

    println!("feedcache_core version={}", feedcache_core::core_version());
    println!("inserted ids=[{first}, {second}]");
    println!("ids_by_title(\"My Title\")={ids:?}");

    store.close()
}
