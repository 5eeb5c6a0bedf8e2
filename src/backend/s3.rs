//! S3 implementation of `ObjectBackend` on aws-sdk-s3.

use crate::backend::ObjectBackend;
use crate::config::StoreConfig;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use std::time::Duration;

pub struct S3Backend {
    config: StoreConfig,
}

impl S3Backend {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Build a transient client from the stored credentials.
    ///
    /// Each operation constructs its own handle; nothing is pooled or
    /// reused between calls.
    async fn client(&self) -> Client {
        let credentials = Credentials::new(
            self.config.access_key_id.clone(),
            self.config.secret_access_key.clone(),
            None,
            None,
            "store-config",
        );
        let conf = aws_config::defaults(BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(Region::new(self.config.region.clone()))
            .load()
            .await;
        Client::new(&conf)
    }
}

#[async_trait]
impl ObjectBackend for S3Backend {
    async fn put_object(
        &self,
        key: &str,
        data: &[u8],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.client()
            .await
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .body(data.to_owned().into())
            .send()
            .await?;
        Ok(())
    }

    async fn get_object(
        &self,
        key: &str,
    ) -> Result<Option<Vec<u8>>, Box<dyn std::error::Error + Send + Sync>> {
        let resp = self
            .client()
            .await
            .get_object()
            .bucket(&self.config.bucket)
            .key(key)
            .send()
            .await;
        match resp {
            Ok(out) => {
                let buf = out.body.collect().await?.into_bytes().to_vec();
                Ok(Some(buf))
            }
            Err(e) if e.as_service_error().is_some_and(|se| se.is_no_such_key()) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    async fn delete_object(
        &self,
        key: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        // DeleteObject on an absent key is a success at the service,
        // which keeps this idempotent without a prior existence check.
        self.client()
            .await
            .delete_object()
            .bucket(&self.config.bucket)
            .key(key)
            .send()
            .await?;
        Ok(())
    }

    async fn list_objects(
        &self,
        prefix: &str,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        // Single page only; no continuation tokens are followed.
        let resp = self
            .client()
            .await
            .list_objects_v2()
            .bucket(&self.config.bucket)
            .prefix(prefix)
            .send()
            .await?;
        let keys = resp
            .contents()
            .iter()
            .filter_map(|obj| obj.key().map(str::to_string))
            .collect();
        Ok(keys)
    }

    async fn head_object(
        &self,
        key: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.client()
            .await
            .head_object()
            .bucket(&self.config.bucket)
            .key(key)
            .send()
            .await?;
        Ok(())
    }

    async fn copy_object(
        &self,
        src_key: &str,
        dst_key: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.client()
            .await
            .copy_object()
            .copy_source(format!("{}/{}", self.config.bucket, src_key))
            .bucket(&self.config.bucket)
            .key(dst_key)
            .send()
            .await?;
        Ok(())
    }

    async fn presign_get(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let presigned = self
            .client()
            .await
            .get_object()
            .bucket(&self.config.bucket)
            .key(key)
            .presigned(PresigningConfig::expires_in(expires_in)?)
            .await?;
        Ok(presigned.uri().to_string())
    }
}
