use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;

use museum_db::DbSettings;

/// Rows per page in list views.
pub const ITEMS_PER_PAGE: usize = 20;

/// Maximum accepted request body size (16 MiB).
pub const MAX_CONTENT_LENGTH: usize = 16 * 1024 * 1024;

/// Database name forced in the `testing` environment.
pub const TEST_DATABASE: &str = "museumapp_test";

/// Errors raised while loading configuration. All are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Deployment mode selected with `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
    Testing,
}

impl AppEnv {
    /// Debug mode is on everywhere except production.
    pub fn debug(self) -> bool {
        !matches!(self, AppEnv::Production)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppEnv::Development => "development",
            AppEnv::Production => "production",
            AppEnv::Testing => "testing",
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppEnv {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" => Ok(AppEnv::Development),
            "production" => Ok(AppEnv::Production),
            "testing" => Ok(AppEnv::Testing),
            _ => Err(ConfigError::Invalid {
                name: "APP_ENV",
                value: s.to_string(),
            }),
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub app_env: AppEnv,
    /// Key used to sign the flash cookie.
    pub secret_key: String,
    pub db: DbSettings,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("app_env", &self.app_env)
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default        |
    /// |---------------------------|----------------|
    /// | `SECRET_KEY`              | required       |
    /// | `DB_HOST`                 | required       |
    /// | `DB_USER`                 | required       |
    /// | `DB_PASSWORD`             | required       |
    /// | `DB_NAME`                 | required       |
    /// | `DB_PORT`                 | `5432`         |
    /// | `DB_MAX_CONNECTIONS`      | `20`           |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`            |
    /// | `APP_ENV`                 | `development`  |
    /// | `HOST`                    | `0.0.0.0`      |
    /// | `PORT`                    | `5000`         |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`           |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let app_env = match lookup("APP_ENV") {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => AppEnv::Development,
        };

        let secret_key = required("SECRET_KEY")?;

        let database = required("DB_NAME")?;
        let database = match app_env {
            AppEnv::Testing => TEST_DATABASE.to_string(),
            _ => database,
        };

        let db = DbSettings {
            host: required("DB_HOST")?,
            port: parse_or(&lookup, "DB_PORT", 5432)?,
            user: required("DB_USER")?,
            password: required("DB_PASSWORD")?,
            database,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 20)?,
            acquire_timeout: Duration::from_secs(parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)?),
        };

        Ok(Self {
            host: parse_or(&lookup, "HOST", IpAddr::from([0, 0, 0, 0]))?,
            port: parse_or(&lookup, "PORT", 5000)?,
            request_timeout_secs: parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?,
            app_env,
            secret_key,
            db,
        })
    }

    pub fn debug(&self) -> bool {
        self.app_env.debug()
    }

    /// Whether cookies must carry the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        self.app_env == AppEnv::Production
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => match raw.trim().parse() {
            Ok(value) => Ok(value),
            Err(_) => Err(ConfigError::Invalid { name, value: raw }),
        },
        _ => Ok(default),
    }
}
