//! Watchlist persistence through the JSON file backend.

use moviehub::storage::{BookmarkStore, JsonFileStore, BOOKMARKS_KEY};
use moviehub::{initialize, Bookmark, Config};
use std::path::Path;
use tempfile::tempdir;

fn open(path: &Path) -> BookmarkStore {
    BookmarkStore::init(Box::new(JsonFileStore::open_or_reset(path.to_path_buf()).unwrap()))
}

fn ids(store: &BookmarkStore) -> Vec<String> {
    store.list().into_iter().map(|b| b.id).collect()
}

#[tokio::test]
async fn persist_then_reload_keeps_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("moviehub.json");

    let store = open(&path);
    store.add(Bookmark::new("tt3", "Third", "N/A", 7.1, "2003"));
    store.add(Bookmark::new("tt1", "First", "https://example.com/p.jpg", 8.0, "2001"));
    store.add(Bookmark::new("tt2", "Second", "N/A", 6.5, "2010–2014"));
    store.remove("tt1");
    store.add(Bookmark::new("tt1", "First", "https://example.com/p.jpg", 8.0, "2001"));
    let before = store.list();
    store.shutdown().await.unwrap();

    let reloaded = open(&path);
    assert_eq!(ids(&reloaded), vec!["tt3", "tt2", "tt1"]);
    assert_eq!(reloaded.list(), before);
    reloaded.shutdown().await.unwrap();
}

#[tokio::test]
async fn file_uses_the_stored_record_shape() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("moviehub.json");

    let store = open(&path);
    store.add(Bookmark::new("tt1375666", "Inception", "https://example.com/i.jpg", 8.8, "2010"));
    store.flush().await.unwrap();

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let record = &raw["entries"][BOOKMARKS_KEY][0];
    assert_eq!(record["id"], "tt1375666");
    assert_eq!(record["Poster"], "https://example.com/i.jpg");
    assert_eq!(record["rating"], 8.8);
    assert!(record["saved_at"].is_i64());

    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn records_without_timestamp_still_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("moviehub.json");
    std::fs::write(
        &path,
        r#"{"version":1,"entries":{"bookmarks":[
            {"id":"tt1","title":"Old","Poster":"N/A","rating":5.5,"year":"1999"}
        ]}}"#,
    )
    .unwrap();

    let store = open(&path);
    let list = store.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].saved_at, None);
    assert!(store.is_bookmarked("tt1"));
    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn corrupt_file_starts_empty_and_is_replaced() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("moviehub.json");
    std::fs::write(&path, "not json at all").unwrap();

    let store = open(&path);
    assert!(store.is_empty());

    store.add(Bookmark::new("tt1", "Fresh", "N/A", 7.0, "2020"));
    store.shutdown().await.unwrap();

    assert_eq!(ids(&open(&path)), vec!["tt1"]);
}

#[tokio::test]
async fn binary_garbage_file_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("moviehub.json");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x7b]).unwrap();

    let store = open(&path);
    assert!(store.is_empty());

    store.add(Bookmark::new("tt2", "Recovered", "N/A", 6.0, "2021"));
    store.shutdown().await.unwrap();

    assert_eq!(ids(&open(&path)), vec!["tt2"]);
}

#[tokio::test]
async fn initialize_survives_a_garbage_store_file() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("moviehub.json"), [0xff, 0xfe, 0x00, 0x7b]).unwrap();

    let config = Config {
        api_key: Some("test-key".to_string()),
        data_dir: Some(dir.path().display().to_string()),
        ..Config::default()
    };

    let state = initialize(&config).unwrap();
    assert!(state.bookmarks.is_empty());
    state.shutdown().await.unwrap();
}
