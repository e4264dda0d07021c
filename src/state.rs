//! Application state

use mongodb::{Client, Database};

use crate::config::Config;
use crate::db;
use crate::storage::ImageStore;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state, passed to every handler
#[derive(Clone)]
pub struct AppState {
    /// MongoDB database handle
    pub db: Database,
    /// Object storage for profile images
    pub images: ImageStore,
    /// Signing secret for access tokens
    pub jwt_secret: String,
    /// Allowed CORS origin
    pub cors_origin: String,
    /// Whether the access token cookie is marked Secure
    pub cookie_secure: bool,
}

impl AppState {
    /// Create a new AppState
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let client = Client::with_uri_str(&config.mongo_uri).await?;
        let db = client.database(&config.mongo_db);

        // Unique indexes are the authoritative duplicate guard; the
        // per-handler pre-checks only exist for friendlier messages.
        db::ensure_indexes(&db).await?;
        tracing::info!(database = %config.mongo_db, "MongoDB ready");

        Ok(Self {
            db,
            images: ImageStore::new(config),
            jwt_secret: config.jwt_secret.clone(),
            cors_origin: config.cors_origin.clone(),
            cookie_secure: config.cookie_secure,
        })
    }
}
