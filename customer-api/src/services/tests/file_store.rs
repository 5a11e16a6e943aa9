//! Tests for the JsonFileStore service

use shared::Customer;
use tokio::fs;

use super::fixtures::{create_test_store, sample_customers};
use crate::error::ApiError;
use crate::services::JsonFileStore;
use crate::traits::CustomerPersistence;

#[tokio::test]
async fn test_missing_file_loads_empty_collection() {
    let (store, _temp) = create_test_store();

    let customers = store.load().await.unwrap();
    assert!(customers.is_empty());
    assert!(!store.path().exists(), "load must not create the file");
}

#[tokio::test]
async fn test_save_then_load_reproduces_collection() {
    let (store, _temp) = create_test_store();

    store.save(&sample_customers()).await.unwrap();
    let reloaded = store.load().await.unwrap();

    assert_eq!(reloaded, sample_customers());
}

#[tokio::test]
async fn test_save_overwrites_previous_content() {
    let (store, _temp) = create_test_store();

    store.save(&sample_customers()).await.unwrap();
    let shorter = vec![Customer::new(9, "Only", "One", "Nice", "Solo")];
    store.save(&shorter).await.unwrap();

    assert_eq!(store.load().await.unwrap(), shorter);
}

#[tokio::test]
async fn test_saved_file_is_pretty_json() {
    let (store, _temp) = create_test_store();
    store.save(&sample_customers()).await.unwrap();

    let content = fs::read_to_string(store.path()).await.unwrap();
    assert!(content.starts_with('['));
    assert!(content.contains("\n  {"));
    assert!(content.contains("\"first_name\": \"Ada\""));
}

#[tokio::test]
async fn test_save_leaves_no_staging_file() {
    let (store, temp) = create_test_store();
    store.save(&sample_customers()).await.unwrap();

    let mut entries = fs::read_dir(temp.path()).await.unwrap();
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.unwrap() {
        names.push(entry.file_name().to_string_lossy().to_string());
    }
    assert_eq!(names, vec!["customers.json".to_string()]);
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let temp = tempfile::TempDir::new().unwrap();
    let store = JsonFileStore::new(temp.path().join("nested").join("data").join("customers.json"));

    store.save(&sample_customers()).await.unwrap();
    assert!(store.path().exists());
}

#[tokio::test]
async fn test_empty_collection_round_trips() {
    let (store, _temp) = create_test_store();
    store.save(&[]).await.unwrap();

    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_loads_legacy_module_file() {
    let (store, _temp) = create_test_store();
    let legacy = "export default [\n  {\n    \"id\": 1,\n    \"first_name\": \"Ada\",\n    \"last_name\": \"Lovelace\",\n    \"city\": \"Paris\",\n    \"company\": \"Acme\"\n  }\n]";
    fs::write(store.path(), legacy).await.unwrap();

    let customers = store.load().await.unwrap();
    assert_eq!(customers, vec![sample_customers()[0].clone()]);
}

#[tokio::test]
async fn test_loads_loosely_typed_legacy_records() {
    let (store, _temp) = create_test_store();
    let legacy = r#"export default [
  {"id": "7", "first_name": "Grace", "last_name": "Hopper", "city": "Paris", "company": "Acme"},
  {"first_name": "Nobody", "last_name": "Known", "city": "Paris", "company": "Acme"},
  {"id": 8, "first_name": null, "last_name": "Byron", "city": "Lyon", "company": null}
]"#;
    fs::write(store.path(), legacy).await.unwrap();

    let customers = store.load().await.unwrap();
    assert_eq!(
        customers,
        vec![
            Customer::new(7, "Grace", "Hopper", "Paris", "Acme"),
            Customer::new(8, "", "Byron", "Lyon", ""),
        ]
    );
}

#[tokio::test]
async fn test_corrupt_file_is_an_error() {
    let (store, _temp) = create_test_store();
    fs::write(store.path(), "{ not a list").await.unwrap();

    let err = store.load().await.unwrap_err();
    assert!(matches!(err, ApiError::SharedError(_)));
}

#[tokio::test]
async fn test_unwritable_target_is_persistence_error() {
    let temp = tempfile::TempDir::new().unwrap();
    // The target is a non-empty directory, so the rename cannot replace it
    let target = temp.path().join("customers.json");
    fs::create_dir(&target).await.unwrap();
    fs::write(target.join("keep"), "x").await.unwrap();
    let store = JsonFileStore::new(&target);

    let err = store.save(&sample_customers()).await.unwrap_err();
    assert!(matches!(err, ApiError::Persistence { .. }));
    assert!(target.is_dir(), "failed save must leave the target untouched");
}
