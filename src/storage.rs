//! Object storage for profile images
//!
//! Images live in a single S3 bucket under random 32-byte hex keys and
//! are served straight from the bucket's public URL.

use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use rand::RngCore;

use crate::config::Config;

/// S3-backed image store
#[derive(Clone)]
pub struct ImageStore {
    pub client: S3Client,
    pub bucket: String,
    pub region: String,
}

/// Random 32-byte hex key for a newly uploaded image
pub fn random_key() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

impl ImageStore {
    pub fn new(config: &Config) -> Self {
        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_access_key,
            None,
            None,
            "environment",
        );
        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.bucket_region.clone()))
            .credentials_provider(credentials)
            .build();

        Self {
            client: S3Client::from_conf(s3_config),
            bucket: config.bucket_name.clone(),
            region: config.bucket_region.clone(),
        }
    }

    /// Public URL of an object in the bucket
    pub fn public_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{key}",
            self.bucket, self.region
        )
    }

    /// Recover the object key from a URL this store produced
    pub fn key_from_url<'a>(&self, url: &'a str) -> Option<&'a str> {
        let prefix = format!("https://{}.s3.{}.amazonaws.com/", self.bucket, self.region);
        url.strip_prefix(prefix.as_str()).filter(|k| !k.is_empty())
    }

    /// Upload an image under `key`, returning its public URL
    pub async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, aws_sdk_s3::Error> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(bytes.into())
            .content_type(content_type)
            .send()
            .await?;
        Ok(self.public_url(key))
    }

    /// Delete an object by key
    pub async fn delete(&self, key: &str) -> Result<(), aws_sdk_s3::Error> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await?;
        Ok(())
    }
}
