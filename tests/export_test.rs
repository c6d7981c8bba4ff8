use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

use contact_directory::export::EXPORT_FILE_NAME;
use contact_directory::seed::SAMPLE_COUNT;
use contact_directory::{Contact, ContactPatch, ContactQuery, ContactStore, LatencySimulator, SledStore};

fn sled_store(path: &std::path::Path) -> ContactStore {
    let kv = SledStore::open(path, "contacts").expect("Failed to open sled store");
    ContactStore::new(Box::new(kv), Arc::new(LatencySimulator::disabled()))
}

#[tokio::test]
async fn test_export_full_collection() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let store = sled_store(&temp_dir.path().join("db"));

    store.create().await.expect("Failed to create contact");
    let output = temp_dir.path().join("out").join(EXPORT_FILE_NAME);
    let count = store.export_json(&output).await.expect("Failed to export");
    assert_eq!(count, SAMPLE_COUNT + 1);

    let text = fs::read_to_string(&output).expect("Failed to read export");
    let exported: Vec<Contact> = serde_json::from_str(&text).expect("Export is not valid JSON");
    assert_eq!(exported, store.list_all().await.expect("Failed to list"));
    assert!(text.contains("\"twitterHandle\""));
}

#[tokio::test]
async fn test_export_ignores_filters() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let store = sled_store(&temp_dir.path().join("db"));

    let filtered = store.list("mentor").await.expect("Failed to list");
    assert_eq!(filtered.len(), 1);

    let json = store.to_json_string().await.expect("Failed to render");
    let exported: Vec<Contact> = serde_json::from_str(&json).expect("Export is not valid JSON");
    assert_eq!(exported.len(), SAMPLE_COUNT);
}

#[tokio::test]
async fn test_sled_backed_store_keeps_changes() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let store = sled_store(&temp_dir.path().join("db"));

    let created = store.create().await.expect("Failed to create contact");
    store
        .update(&created.id, ContactPatch::new().first("Lan").last("Tran").favorite(true))
        .await
        .expect("Failed to update");
    assert!(store.delete("seed-minh-vo").await.expect("Failed to delete"));

    let all = store.list(ContactQuery::All).await.expect("Failed to list");
    assert_eq!(all.len(), SAMPLE_COUNT);
    assert!(all.iter().any(|c| c.first == "Lan" && c.last == "Tran" && c.favorite));
    assert!(all.iter().all(|c| c.id != "seed-minh-vo"));
}
