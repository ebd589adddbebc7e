//! Database configuration - URL, backend and pool sizing
//!
//! Loaded from environment variables:
//! - `DATABASE_URL`: full connection URL (`postgres://...` or `sqlite://...`)
//! - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_DATABASE`: used to
//!   assemble a PostgreSQL URL when `DATABASE_URL` is unset
//! - `DB_MAX_CONNECTIONS`: pool capacity (default: 10)
//! - `DB_ACQUIRE_TIMEOUT_SECS`: how long a request waits for a free
//!   connection (default: 30)

use std::time::Duration;

/// Default pool capacity
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default time a request waits for a pooled connection
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration error
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DATABASE_URL not set (or DB_HOST/DB_USER/DB_DATABASE for PostgreSQL)")]
    MissingDatabaseUrl,

    #[error("unsupported database URL scheme: '{0}' (expected postgres:// or sqlite:)")]
    UnsupportedScheme(String),

    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
}

/// Supported database backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    /// Detect the backend from a connection URL.
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Self::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else {
            let scheme = url.split(':').next().unwrap_or_default();
            Err(ConfigError::UnsupportedScheme(scheme.to_owned()))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }
}

/// Pool sizing and wait policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Maximum connections held by the pool
    pub max_connections: u32,
    /// How long a request waits for a free connection before failing
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub backend: Backend,
    pub pool: PoolConfig,
}

impl DatabaseConfig {
    /// Create config for an explicit URL with default pool settings.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let backend = Backend::from_url(&url)?;
        Ok(Self {
            url,
            backend,
            pool: PoolConfig::default(),
        })
    }

    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from any key/value source (environment, tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = match lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
            Some(url) => url,
            None => postgres_url_from_parts(&lookup)?,
        };

        let mut config = Self::new(url)?;

        if let Some(value) = lookup("DB_MAX_CONNECTIONS") {
            config.pool.max_connections = match value.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "DB_MAX_CONNECTIONS",
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup("DB_ACQUIRE_TIMEOUT_SECS") {
            let secs = value.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: "DB_ACQUIRE_TIMEOUT_SECS",
                value: value.clone(),
            })?;
            config.pool.acquire_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Override the pool settings.
    pub fn with_pool(mut self, pool: PoolConfig) -> Self {
        self.pool = pool;
        self
    }

    /// URL with any password replaced, for logging.
    pub fn redacted_url(&self) -> String {
        match (self.url.find("://"), self.url.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => {
                let credentials = &self.url[scheme_end + 3..at];
                match credentials.split_once(':') {
                    Some((user, _)) => format!(
                        "{}{}:***{}",
                        &self.url[..scheme_end + 3],
                        user,
                        &self.url[at..]
                    ),
                    None => self.url.clone(),
                }
            }
            _ => self.url.clone(),
        }
    }
}

fn postgres_url_from_parts<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup("DB_HOST").ok_or(ConfigError::MissingDatabaseUrl)?;
    let user = lookup("DB_USER").ok_or(ConfigError::MissingDatabaseUrl)?;
    let database = lookup("DB_DATABASE").ok_or(ConfigError::MissingDatabaseUrl)?;
    let port = lookup("DB_PORT").unwrap_or_else(|| "5432".to_owned());

    let credentials = match lookup("DB_PASSWORD").filter(|p| !p.is_empty()) {
        Some(password) => format!("{}:{}", user, password),
        None => user,
    };

    Ok(format!(
        "postgres://{}@{}:{}/{}",
        credentials, host, port, database
    ))
}
