use std::io;

use bytes::Bytes;
use futures::stream;

use callguard::application::ports::{UploadStore, UploadStoreError};
use callguard::domain::{StoragePath, UploadId};
use callguard::infrastructure::storage::LocalUploadStore;

fn create_test_store() -> (tempfile::TempDir, LocalUploadStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalUploadStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_valid_stream_when_storing_then_file_is_persisted() {
    let (_dir, store) = create_test_store();
    let upload_id = UploadId::new();
    let path = StoragePath::new(&upload_id, "call.wav");

    let chunks = vec![Ok(Bytes::from("RIFF")), Ok(Bytes::from("WAVE"))];
    let byte_stream = Box::pin(stream::iter(chunks));

    let size = store.store(&path, byte_stream).await.unwrap();
    assert_eq!(size, 8);
}

#[tokio::test]
async fn given_stored_file_when_resolving_local_path_then_bytes_match_original() {
    let (dir, store) = create_test_store();
    let upload_id = UploadId::new();
    let path = StoragePath::new(&upload_id, "call.wav");

    let content = b"test content";
    let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from(&content[..]))]));
    store.store(&path, byte_stream).await.unwrap();

    let local = store.local_path(&path).unwrap();
    assert!(local.starts_with(dir.path().canonicalize().unwrap()) || local.starts_with(dir.path()));
    assert_eq!(std::fs::read(&local).unwrap(), content);
}

#[tokio::test]
async fn given_stored_file_when_deleting_then_file_is_gone() {
    let (_dir, store) = create_test_store();
    let upload_id = UploadId::new();
    let path = StoragePath::new(&upload_id, "call.wav");

    let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from("data"))]));
    store.store(&path, byte_stream).await.unwrap();
    let local = store.local_path(&path).unwrap();

    store.delete(&path).await.unwrap();

    assert!(!local.exists());
}

#[tokio::test]
async fn given_stream_error_when_storing_then_returns_error() {
    let (_dir, store) = create_test_store();
    let upload_id = UploadId::new();
    let path = StoragePath::new(&upload_id, "call.wav");

    let chunks: Vec<Result<Bytes, io::Error>> = vec![
        Ok(Bytes::from("partial")),
        Err(io::Error::new(
            io::ErrorKind::ConnectionReset,
            "network drop",
        )),
    ];
    let byte_stream = Box::pin(stream::iter(chunks));

    let result = store.store(&path, byte_stream).await;
    assert!(matches!(result, Err(UploadStoreError::Io(_))));
}

#[tokio::test]
async fn given_nonexistent_path_when_deleting_then_returns_error() {
    let (_dir, store) = create_test_store();
    let upload_id = UploadId::new();
    let path = StoragePath::new(&upload_id, "nonexistent.wav");

    let result = store.delete(&path).await;
    assert!(result.is_err());
}

#[test]
fn given_missing_base_directory_when_creating_store_then_directory_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let base = dir.path().join("static").join("uploads");

    let store = LocalUploadStore::new(base.clone()).unwrap();

    assert!(base.is_dir());
    assert_eq!(store.base_path(), base.as_path());
}
