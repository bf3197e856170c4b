use feedcache_core::Entry;

#[test]
fn entry_serialization_uses_persisted_column_names() {
    let entry = Entry {
        id: 42,
        title: "My Title".to_string(),
        subtitle: "Z".to_string(),
    };

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["_id"], 42);
    assert_eq!(json["title"], "My Title");
    assert_eq!(json["subtitle"], "Z");

    let decoded: Entry = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entry);
}
