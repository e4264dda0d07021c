//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration, loaded from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string
    pub mongo_uri: String,
    /// MongoDB database name
    pub mongo_db: String,
    /// HTTP port
    pub http_port: u16,
    /// S3 bucket holding barber profile images
    pub bucket_name: String,
    /// Region of the image bucket
    pub bucket_region: String,
    /// Access key for the image bucket
    pub access_key: String,
    /// Secret key for the image bucket
    pub secret_access_key: String,
    /// Signing secret for access tokens
    pub jwt_secret: String,
    /// Allowed CORS origin (the booking frontend)
    pub cors_origin: String,
    /// Whether the access token cookie is marked Secure
    pub cookie_secure: bool,
}

impl Config {
    fn require(name: &str) -> Result<String, BoxError> {
        std::env::var(name).map_err(|_| format!("{name} must be set").into())
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Ok(Self {
            mongo_uri: Self::require("MONGO_URI")?,
            mongo_db: std::env::var("MONGO_DB").unwrap_or_else(|_| "barbershop".into()),
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(9000),
            bucket_name: Self::require("BUCKET_NAME")?,
            bucket_region: Self::require("BUCKET_REGION")?,
            access_key: Self::require("ACCESS_KEY")?,
            secret_access_key: Self::require("SECRET_ACCESS_KEY")?,
            jwt_secret: Self::require("ACCESS_TOKEN_SECRET")?,
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            cookie_secure: std::env::var("COOKIE_SECURE")
                .map(|v| v != "false")
                .unwrap_or(true),
        })
    }
}
