//! Facade behavior against a directory-backed store.

use libbucket::backend::ObjectBackend;
use libbucket::backend::localfs::LocalFsBackend;
use libbucket::client::{KEY_PREFIX, ObjectClient};
use std::time::Duration;
use tempfile::tempdir;

#[tokio::test]
async fn upload_then_download_round_trips() {
    let root = tempdir().unwrap();
    let store = ObjectClient::new(LocalFsBackend::new(root.path()));

    let data = b"\x89PNG\r\n\x1a\n not actually a png".to_vec();
    assert!(store.upload(&data, "images/cover.png").await);
    assert_eq!(store.download("images/cover.png").await, Some(data));
}

#[tokio::test]
async fn overwrite_replaces_content() {
    let root = tempdir().unwrap();
    let store = ObjectClient::new(LocalFsBackend::new(root.path()));

    assert!(store.upload(b"first", "doc.txt").await);
    assert!(store.upload(b"second", "doc.txt").await);
    assert_eq!(store.download("doc.txt").await.as_deref(), Some(&b"second"[..]));
}

#[tokio::test]
async fn delete_of_a_missing_key_reports_success() {
    let root = tempdir().unwrap();
    let store = ObjectClient::new(LocalFsBackend::new(root.path()));

    assert!(store.delete("never-uploaded.bin").await);
}

#[tokio::test]
async fn download_of_a_missing_key_is_none() {
    let root = tempdir().unwrap();
    let store = ObjectClient::new(LocalFsBackend::new(root.path()));

    assert_eq!(store.download("never-uploaded.bin").await, None);
}

#[tokio::test]
async fn list_returns_physical_keys_under_the_namespace_in_order() {
    let root = tempdir().unwrap();
    let backend = LocalFsBackend::new(root.path());
    // An object outside the namespace, written past the facade, must
    // never show up in a listing.
    backend.put_object("other/stray.bin", b"x").await.unwrap();

    let store = ObjectClient::new(backend);
    assert!(store.upload(b"x", "b.txt").await);
    assert!(store.upload(b"x", "a.txt").await);
    assert!(store.upload(b"x", "sub/c.txt").await);

    let keys = store.list("").await;
    assert_eq!(
        keys,
        vec![
            format!("{KEY_PREFIX}a.txt"),
            format!("{KEY_PREFIX}b.txt"),
            format!("{KEY_PREFIX}sub/c.txt"),
        ]
    );

    // Narrower prefixes filter within the namespace.
    assert_eq!(store.list("sub/").await, vec![format!("{KEY_PREFIX}sub/c.txt")]);
    assert_eq!(store.list("zzz").await, Vec::<String>::new());
}

#[tokio::test]
async fn exists_tracks_upload_and_delete() {
    let root = tempdir().unwrap();
    let store = ObjectClient::new(LocalFsBackend::new(root.path()));

    assert!(!store.exists("f.bin").await);
    assert!(store.upload(b"x", "f.bin").await);
    assert!(store.exists("f.bin").await);
    assert!(store.delete("f.bin").await);
    assert!(!store.exists("f.bin").await);
}

#[tokio::test]
async fn copy_duplicates_without_touching_the_source() {
    let root = tempdir().unwrap();
    let store = ObjectClient::new(LocalFsBackend::new(root.path()));

    assert!(store.upload(b"payload", "src.bin").await);
    assert!(store.copy("src.bin", "dst.bin").await);
    assert!(store.exists("src.bin").await);
    assert_eq!(store.download("dst.bin").await.as_deref(), Some(&b"payload"[..]));
}

#[tokio::test]
async fn copy_of_a_missing_source_reports_failure() {
    let root = tempdir().unwrap();
    let store = ObjectClient::new(LocalFsBackend::new(root.path()));

    assert!(!store.copy("missing.bin", "dst.bin").await);
    assert!(!store.exists("dst.bin").await);
}

#[tokio::test]
async fn move_relocates_the_object() {
    let root = tempdir().unwrap();
    let store = ObjectClient::new(LocalFsBackend::new(root.path()));

    assert!(store.upload(b"payload", "old.bin").await);
    assert!(store.move_object("old.bin", "new.bin").await);
    assert!(!store.exists("old.bin").await);
    assert!(store.exists("new.bin").await);
    assert_eq!(store.download("new.bin").await.as_deref(), Some(&b"payload"[..]));
}

#[tokio::test]
async fn presigned_url_names_the_physical_key_and_expiry() {
    let root = tempdir().unwrap();
    let store = ObjectClient::new(LocalFsBackend::new(root.path()));

    assert!(store.upload(b"x", "share.pdf").await);
    let url = store
        .presigned_url("share.pdf", Duration::from_secs(3600))
        .await
        .unwrap();
    assert!(url.contains(&format!("{KEY_PREFIX}share.pdf")));
    assert!(url.contains("X-Amz-Expires=3600"));
}
