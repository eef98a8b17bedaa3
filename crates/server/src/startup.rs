use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolved runtime settings: bind address plus database pool.
struct Settings {
    addr: SocketAddr,
    database: DatabaseConfig,
}

/// Prefer `config.toml`; without one, fall back to `SERVER_HOST`, `SERVER_PORT` and `DATABASE_URL`.
fn load_settings() -> Result<Settings, StartupError> {
    let (host, port, database) = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => (cfg.server.host, cfg.server.port, DatabaseConfig::from(&cfg.database)),
        Err(e) => {
            warn!(error = %e, "config file unavailable; using environment");
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            let database = DatabaseConfig::from_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
            (host, port, database)
        }
    };
    let addr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {host}:{port}: {e}")))?;
    Ok(Settings { addr, database })
}

/// Public entry: connect, migrate, build the app and serve until `shutdown` fires
pub async fn run(shutdown: CancellationToken) -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let settings = load_settings()?;

    let db = connect_with_config(&settings.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!("migrations applied");

    let state = ServerState::new(db, shutdown.clone());
    let app: Router = routes::build_router(state, build_cors());

    info!(addr = %settings.addr, "starting product api");
    let listener = tokio::net::TcpListener::bind(settings.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;
    info!("product api stopped");
    Ok(())
}
