use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::errors::ModelError;

/// Runtime connection settings handed to SeaORM.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub acquire_timeout: Duration,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    /// Environment only: `DATABASE_URL` (from `.env` if present) with default pool settings.
    /// A missing or malformed URL is a configuration error.
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        let mut settings = configs::DatabaseConfig::default();
        settings.normalize_from_env();
        Self::validated(&settings)
    }

    /// Validate file or env settings before turning them into pool options.
    pub fn validated(settings: &configs::DatabaseConfig) -> anyhow::Result<Self> {
        settings.validate()?;
        Ok(Self::from(settings))
    }

    /// Read `config.toml` (or `CONFIG_PATH`) and validate its `[database]` table.
    pub fn from_file() -> anyhow::Result<Self> {
        let cfg = configs::AppConfig::load_and_validate()?;
        Ok(Self::from(&cfg.database))
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut opts = ConnectOptions::new(self.url.clone());
        opts.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .acquire_timeout(self.acquire_timeout)
            .sqlx_logging(self.sqlx_logging);
        opts
    }
}

impl From<&configs::DatabaseConfig> for DatabaseConfig {
    fn from(c: &configs::DatabaseConfig) -> Self {
        Self {
            url: c.url.clone(),
            max_connections: c.max_connections,
            min_connections: c.min_connections,
            connect_timeout: Duration::from_secs(c.connect_timeout_secs),
            idle_timeout: Duration::from_secs(c.idle_timeout_secs),
            max_lifetime: Duration::from_secs(c.max_lifetime_secs),
            acquire_timeout: Duration::from_secs(c.acquire_timeout_secs),
            sqlx_logging: c.sqlx_logging,
        }
    }
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let db = Database::connect(cfg.connect_options())
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    info!(max_connections = cfg.max_connections, "database pool ready");
    Ok(db)
}

/// Connect using `config.toml` when present, otherwise the environment.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let cfg = match DatabaseConfig::from_file() {
        Ok(cfg) => cfg,
        Err(_) => DatabaseConfig::from_env()?,
    };
    let db = connect_with_config(&cfg).await?;
    Ok(db)
}
