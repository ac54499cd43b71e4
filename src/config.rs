//! Application configuration.
//!
//! Loaded from the environment exactly once in `main` and passed into each
//! component's constructor. No global state.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    /// Per-request timeout applied by the middleware stack.
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub max_lifetime: Duration,
}

impl AppConfig {
    /// Build the configuration from the environment, loading `.env` first
    /// if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        AppConfig {
            http: HttpConfig {
                host: env_or("SERVICE_HOST", "127.0.0.1"),
                port: env_parse_or("SERVICE_PORT", 8080),
                request_timeout: Duration::from_millis(env_parse_or("SERVICE_TIMEOUT_MS", 30_000)),
            },
            database: DatabaseConfig {
                url: env_or(
                    "DATABASE_URL",
                    "postgres://localhost:5432/newsapi?sslmode=disable",
                ),
                max_connections: env_parse_or("DATABASE_MAX_CONNECTIONS", 5),
                acquire_timeout: Duration::from_secs(env_parse_or("DATABASE_ACQUIRE_TIMEOUT_S", 5)),
                max_lifetime: Duration::from_secs(env_parse_or("DATABASE_MAX_LIFETIME_S", 1800)),
            },
        }
    }
}

impl DatabaseConfig {
    /// Open the shared connection pool.
    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        self.pool_options().connect(&self.url).await
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .max_lifetime(self.max_lifetime)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
