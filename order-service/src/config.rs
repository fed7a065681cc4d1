//! Order service configuration

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Order service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP port for the `/orders` API
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// PostgreSQL connection; `None` selects the in-memory store
    pub database: Option<PgConnectOptions>,
    /// Max pooled PostgreSQL connections
    pub db_max_connections: u32,
    /// How long a request may wait for a pooled connection
    pub db_acquire_timeout: Duration,
    /// Bound on one store call, also sent as the session `statement_timeout`
    pub db_query_timeout: Duration,
    /// Base URL of the user service (serves `GET /users/{id}`)
    pub user_service_url: String,
    /// Base URL of the product service (serves `GET /products/{id}`)
    pub product_service_url: String,
    /// Total time budget for one upstream lookup
    pub upstream_timeout: Duration,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Directory for daily-rolling log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BoxError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let environment = var("ENVIRONMENT").unwrap_or_else(|| "development".into());

        let database = match var("DATABASE_URL") {
            Some(url) => Some(
                PgConnectOptions::from_str(&url).map_err(|e| format!("invalid DATABASE_URL: {e}"))?,
            ),
            None => connect_options_from_parts(&var),
        };
        if database.is_none() && environment != "development" {
            return Err(format!(
                "DATABASE_URL (or DB_HOST/DB_USER/DB_PASSWORD/DB_NAME) must be set in {environment} environment"
            )
            .into());
        }

        Ok(Self {
            http_port: parse_or(var("HTTP_PORT"), 8082),
            environment,
            database,
            db_max_connections: parse_or(var("DB_MAX_CONNECTIONS"), 10),
            db_acquire_timeout: Duration::from_secs(parse_or(var("DB_ACQUIRE_TIMEOUT_SECS"), 5)),
            db_query_timeout: Duration::from_secs(parse_or(var("DB_QUERY_TIMEOUT_SECS"), 5)),
            user_service_url: var("USER_SERVICE_URL")
                .unwrap_or_else(|| "http://localhost:8083".into()),
            product_service_url: var("PRODUCT_SERVICE_URL")
                .unwrap_or_else(|| "http://localhost:8081".into()),
            upstream_timeout: Duration::from_secs(parse_or(var("UPSTREAM_TIMEOUT_SECS"), 5)),
            log_json: var("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
            log_dir: var("LOG_DIR"),
        })
    }
}

/// Connection options from the discrete `DB_*` variables
///
/// Each part is set verbatim, so credentials may hold any character.
fn connect_options_from_parts(var: &impl Fn(&str) -> Option<String>) -> Option<PgConnectOptions> {
    let host = var("DB_HOST")?;
    let mut options = PgConnectOptions::new_without_pgpass()
        .host(&host)
        .port(parse_or(var("DB_PORT"), 5432))
        .username(&var("DB_USER").unwrap_or_else(|| "postgres".into()))
        .database(&var("DB_NAME").unwrap_or_else(|| "postgres".into()));
    if let Some(password) = var("DB_PASSWORD") {
        options = options.password(&password);
    }
    Some(options)
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
