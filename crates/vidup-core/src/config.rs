//! Configuration module
//!
//! Environment-driven configuration for the API. Every variable has a
//! default, so a bare `vidup-api` invocation serves on port 8080 and stores
//! payloads under `./data/videos`.

use std::env;

const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_STORAGE_PATH: &str = "./data/videos";
const DEFAULT_MAX_UPLOAD_SIZE_BYTES: usize = 256 * 1024 * 1024;
const DEFAULT_ENVIRONMENT: &str = "development";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Port the HTTP listener binds on.
    pub server_port: u16,
    /// Directory video payloads are written to.
    pub storage_path: String,
    /// host[:port] used for data URLs when a request carries no Host header.
    pub public_address: String,
    /// Upper bound for upload request bodies.
    pub max_upload_size_bytes: usize,
    /// Allowed CORS origins; `*` allows any.
    pub cors_origins: Vec<String>,
    pub environment: String,
}

impl Config {
    /// Load configuration from the environment (a `.env` file is honored if
    /// present). Unset variables fall back to defaults; set-but-invalid
    /// numeric variables are an error rather than a silent default.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let server_port = parse_env("SERVER_PORT", DEFAULT_SERVER_PORT)?;
        let storage_path =
            env::var("STORAGE_PATH").unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_string());
        let public_address = env::var("PUBLIC_ADDRESS")
            .unwrap_or_else(|_| format!("localhost:{}", server_port));
        let max_upload_size_bytes =
            parse_env("MAX_UPLOAD_SIZE_BYTES", DEFAULT_MAX_UPLOAD_SIZE_BYTES)?;
        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let environment =
            env::var("ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        let config = Config {
            server_port,
            storage_path,
            public_address,
            max_upload_size_bytes,
            cors_origins,
            environment,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.storage_path.trim().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }
        if self.public_address.trim().is_empty() {
            anyhow::bail!("PUBLIC_ADDRESS must not be empty");
        }
        if self.public_address.contains("://") {
            anyhow::bail!("PUBLIC_ADDRESS must be host[:port], without a scheme");
        }
        if self.max_upload_size_bytes == 0 {
            anyhow::bail!("MAX_UPLOAD_SIZE_BYTES must be greater than zero");
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, anyhow::Error>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid {}: {}", name, e)),
        Err(_) => Ok(default),
    }
}
