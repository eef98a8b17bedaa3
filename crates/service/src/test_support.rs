#![cfg(test)]
use std::time::Duration;

use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<Result<(), String>> = OnceCell::const_new();

fn test_config() -> Result<DatabaseConfig, anyhow::Error> {
    let mut cfg = match DatabaseConfig::from_file() {
        Ok(cfg) => cfg,
        Err(_) => DatabaseConfig::from_env()?,
    };
    cfg.max_connections = cfg.max_connections.max(10);
    cfg.min_connections = cfg.min_connections.min(1);
    cfg.connect_timeout = Duration::from_secs(3);
    cfg.acquire_timeout = Duration::from_secs(3);
    Ok(cfg)
}

/// Connect to the test database, migrating it on first use.
/// Errors mean "no database available"; callers skip.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    MIGRATED
        .get_or_init(|| async {
            let cfg = test_config().map_err(|e| e.to_string())?;
            let db = connect_with_config(&cfg).await.map_err(|e| e.to_string())?;
            migration::Migrator::up(&db, None).await.map_err(|e| e.to_string())
        })
        .await
        .clone()
        .map_err(anyhow::Error::msg)?;

    let db = connect_with_config(&test_config()?).await?;
    Ok(db)
}
