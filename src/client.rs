//! High-level client API over object backends.
//!
//! `ObjectClient` owns the key layout: every logical key is mapped into a
//! fixed namespace before it reaches the backend. Backend failures never
//! escape an operation; they are logged and collapsed into the
//! success/absence return, so callers needing the root cause consult the
//! log rather than the return value.

use crate::backend::ObjectBackend;
use std::time::Duration;
use tracing::{error, warn};

/// Namespace prepended to every logical key.
pub const KEY_PREFIX: &str = "app/";

/// Default presigned-URL lifetime (24 hours).
pub const DEFAULT_PRESIGN_EXPIRY: Duration = Duration::from_secs(86_400);

pub struct ObjectClient<B: ObjectBackend> {
    backend: B,
}

impl<B: ObjectBackend> ObjectClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Physical key for a logical key. Applied exactly once per
    /// backend call; nothing on the read path ever strips it back off.
    fn object_key(&self, key: &str) -> String {
        format!("{KEY_PREFIX}{key}")
    }

    /// Time-limited read URL for the object at `key`, or `None` if the
    /// backend refuses to sign one.
    pub async fn presigned_url(&self, key: &str, expires_in: Duration) -> Option<String> {
        match self
            .backend
            .presign_get(&self.object_key(key), expires_in)
            .await
        {
            Ok(url) => Some(url),
            Err(e) => {
                error!("presigning {key} failed: {e}");
                None
            }
        }
    }

    /// Store `data` at `key`, overwriting any existing object.
    pub async fn upload(&self, data: &[u8], key: &str) -> bool {
        match self.backend.put_object(&self.object_key(key), data).await {
            Ok(()) => true,
            Err(e) => {
                error!("upload of {key} failed: {e}");
                false
            }
        }
    }

    /// Full object content, or `None` when the object is missing or the
    /// fetch fails for any backend reason.
    pub async fn download(&self, key: &str) -> Option<Vec<u8>> {
        match self.backend.get_object(&self.object_key(key)).await {
            Ok(buf) => buf,
            Err(e) => {
                error!("download of {key} failed: {e}");
                None
            }
        }
    }

    /// Remove the object at `key`. Deleting a key that does not exist
    /// reports success.
    pub async fn delete(&self, key: &str) -> bool {
        match self.backend.delete_object(&self.object_key(key)).await {
            Ok(()) => true,
            Err(e) => {
                error!("delete of {key} failed: {e}");
                false
            }
        }
    }

    /// One page of physical keys under the namespaced `prefix`, in the
    /// order the backend returned them. Empty on failure.
    pub async fn list(&self, prefix: &str) -> Vec<String> {
        match self.backend.list_objects(&self.object_key(prefix)).await {
            Ok(keys) => keys,
            Err(e) => {
                error!("listing prefix {prefix:?} failed: {e}");
                Vec::new()
            }
        }
    }

    /// Whether a metadata probe for `key` succeeds. False covers both a
    /// genuinely absent object and a failed probe; the two are not
    /// distinguishable from this return.
    pub async fn exists(&self, key: &str) -> bool {
        self.backend.head_object(&self.object_key(key)).await.is_ok()
    }

    /// Server-side copy between two logical keys.
    pub async fn copy(&self, src_key: &str, dst_key: &str) -> bool {
        match self
            .backend
            .copy_object(&self.object_key(src_key), &self.object_key(dst_key))
            .await
        {
            Ok(()) => true,
            Err(e) => {
                error!("copy {src_key} -> {dst_key} failed: {e}");
                false
            }
        }
    }

    /// Copy `src_key` to `dst_key`, then delete the source. Not atomic:
    /// an interruption between the steps leaves the object at both keys,
    /// and a failed delete after a successful copy still reports
    /// success with the source left behind.
    pub async fn move_object(&self, src_key: &str, dst_key: &str) -> bool {
        if !self.copy(src_key, dst_key).await {
            return false;
        }
        if !self.delete(src_key).await {
            warn!("move {src_key} -> {dst_key}: source not deleted");
        }
        true
    }
}
