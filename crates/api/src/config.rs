use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Credentials for the optional admin bootstrap at startup.
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`). Not applied to
    /// effect streams.
    pub request_timeout_secs: u64,
    /// Root directory of the local file store (default: `storage`).
    pub storage_dir: PathBuf,
    /// Prefix for public file URLs. Empty means same-origin relative URLs.
    pub public_base_url: String,
    /// Directory served under `/static` (default: `static`).
    pub static_dir: PathBuf,
    /// Admin account created at startup when both env vars are set.
    pub admin: Option<AdminBootstrap>,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORAGE_DIR`          | `storage`                  |
    /// | `PUBLIC_BASE_URL`      | (empty)                    |
    /// | `STATIC_DIR`           | `static`                   |
    /// | `ADMIN_EMAIL`          | (unset)                    |
    /// | `ADMIN_PASSWORD`       | (unset)                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let storage_dir = std::env::var("STORAGE_DIR")
            .unwrap_or_else(|_| "storage".into())
            .into();
        let public_base_url = std::env::var("PUBLIC_BASE_URL").unwrap_or_default();
        let static_dir = std::env::var("STATIC_DIR")
            .unwrap_or_else(|_| "static".into())
            .into();

        let admin = match (
            std::env::var("ADMIN_EMAIL").ok().filter(|s| !s.is_empty()),
            std::env::var("ADMIN_PASSWORD").ok().filter(|s| !s.is_empty()),
        ) {
            (Some(email), Some(password)) => Some(AdminBootstrap { email, password }),
            _ => None,
        };

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage_dir,
            public_base_url,
            static_dir,
            admin,
            jwt,
        }
    }
}
