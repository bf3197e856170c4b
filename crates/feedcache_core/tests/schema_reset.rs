use feedcache_core::db::schema::SCHEMA_VERSION;
use feedcache_core::{EntryRepository, Store, StoreConfig};
use rusqlite::Connection;

#[test]
fn open_creates_schema_and_stamps_version() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path());

    let store = Store::open(&config).unwrap();
    store.close().unwrap();

    let conn = Connection::open(config.path()).unwrap();
    assert_eq!(user_version(&conn), SCHEMA_VERSION);
    assert_table_exists(&conn, "entry");
}

#[test]
fn reopening_under_same_version_preserves_rows() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path());

    let store = Store::open(&config).unwrap();
    let id = store.insert("A", "B").unwrap();
    store.close().unwrap();

    let reopened = Store::open(&config).unwrap();
    assert_eq!(reopened.ids_by_title("A").unwrap(), vec![id]);
}

#[test]
fn reopening_under_newer_version_discards_all_rows() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path());

    let store = Store::open(&config).unwrap();
    store.insert("A", "B").unwrap();
    store.close().unwrap();

    let bumped = config.clone().with_schema_version(SCHEMA_VERSION + 1);
    let reopened = Store::open(&bumped).unwrap();
    assert!(reopened.ids_by_title("A").unwrap().is_empty());
    reopened.close().unwrap();

    let conn = Connection::open(bumped.path()).unwrap();
    assert_eq!(user_version(&conn), SCHEMA_VERSION + 1);
}

#[test]
fn reopening_under_older_version_discards_all_rows() {
    let dir = tempfile::tempdir().unwrap();
    let newer = StoreConfig::new(dir.path()).with_schema_version(SCHEMA_VERSION + 1);

    let store = Store::open(&newer).unwrap();
    store.insert("A", "B").unwrap();
    store.close().unwrap();

    let downgraded = StoreConfig::new(dir.path());
    let reopened = Store::open(&downgraded).unwrap();
    assert!(reopened.ids_by_title("A").unwrap().is_empty());
    reopened.close().unwrap();

    let conn = Connection::open(downgraded.path()).unwrap();
    assert_eq!(user_version(&conn), SCHEMA_VERSION);
}

#[test]
fn in_memory_open_applies_schema() {
    let store = Store::open_in_memory().unwrap();
    let id = store.insert("A", "B").unwrap();
    assert_eq!(store.ids_by_title("A").unwrap(), vec![id]);
}

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
