//! Object-store backends.
//!
//! Submodules:
//! - `s3`: aws-sdk-s3 implementation against a remote bucket
//! - `localfs`: local directory mock for development and tests
//!
//! Backends speak *physical* keys exactly as handed to them; namespace
//! layout is the concern of `client::ObjectClient`.

use async_trait::async_trait;
use std::time::Duration;

pub mod localfs;
pub mod s3;

/// Low-level object operations against one bucket.
///
/// Every method performs a single backend call and reports failures as
/// typed errors; translation into the caller-facing success/absence
/// contract happens one layer up.
#[async_trait]
pub trait ObjectBackend: Send + Sync {
    /// Store `data` at `key`, overwriting any existing object.
    async fn put_object(
        &self,
        key: &str,
        data: &[u8],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Fetch the full object at `key`. A missing object is `Ok(None)`.
    async fn get_object(
        &self,
        key: &str,
    ) -> Result<Option<Vec<u8>>, Box<dyn std::error::Error + Send + Sync>>;

    /// Remove the object at `key`. Deleting an absent key succeeds.
    async fn delete_object(
        &self,
        key: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// One page of keys starting with `prefix`, in backend order.
    async fn list_objects(
        &self,
        prefix: &str,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;

    /// Metadata probe. Errors both when the object is absent and when
    /// the probe itself fails.
    async fn head_object(
        &self,
        key: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Server-side copy within the bucket.
    async fn copy_object(
        &self,
        src_key: &str,
        dst_key: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Time-limited read URL for the object at `key`.
    async fn presign_get(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
