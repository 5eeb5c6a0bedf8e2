//! Environment-sourced store configuration.

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub bucket: String,
}

impl StoreConfig {
    /// Read the connection settings from the process environment.
    ///
    /// A missing variable is not an error here: the value defaults to an
    /// empty string and the first backend call fails authentication
    /// instead. Callers that want `.env` support load it before this
    /// (see `main.rs`).
    pub fn from_env() -> Self {
        StoreConfig {
            access_key_id: env_or_empty("AWS_ACCESS_KEY_ID"),
            secret_access_key: env_or_empty("AWS_SECRET_ACCESS_KEY"),
            region: env_or_empty("AWS_S3_REGION_NAME"),
            bucket: env_or_empty("AWS_STORAGE_BUCKET_NAME"),
        }
    }
}

fn env_or_empty(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        eprintln!("WARNING: {name} is not set");
        String::new()
    })
}
