use once_cell::sync::Lazy;
use std::env;
use url::Url;

/// Process-wide configuration, resolved once at startup. Nothing in the
/// gateway reads credentials or endpoints from anywhere else.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    pub webhooks: WebhookConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full connection URL (host, port, database, credentials).
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Shared HS256 secret. Tokens are minted externally against it.
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
}

#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Target receiving `{table, data}` after each committed write.
    pub table_feed_url: Option<Url>,
    /// Target receiving `{operacion, table, data}` after each committed write.
    pub audit_trail_url: Option<Url>,
}

impl WebhookConfig {
    pub fn is_configured(&self) -> bool {
        self.table_feed_url.is_some() || self.audit_trail_url.is_some()
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("BANCA_API_PORT")
                    .or_else(|_| env::var("PORT"))
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3000),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").ok(),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
                acquire_timeout_secs: env::var("DATABASE_ACQUIRE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            },
            security: SecurityConfig {
                jwt_secret: env::var("JWT_SECRET").unwrap_or_default(),
                jwt_expiry_hours: env::var("JWT_EXPIRY_HOURS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(24),
            },
            webhooks: WebhookConfig {
                table_feed_url: parse_webhook_url("WEBHOOK_TABLE_FEED_URL"),
                audit_trail_url: parse_webhook_url("WEBHOOK_AUDIT_TRAIL_URL"),
            },
        }
    }
}

/// A malformed target URL is a deployment mistake; refuse it at startup
/// instead of on the first delivery.
fn parse_webhook_url(var: &str) -> Option<Url> {
    let raw = env::var(var).ok().filter(|v| !v.trim().is_empty())?;
    match Url::parse(&raw) {
        Ok(url) => Some(url),
        Err(e) => panic!("{} is not a valid URL ({}): {}", var, raw, e),
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
