use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_util::sync::CancellationToken;

/// Shared handler state.
#[derive(Clone)]
pub struct ServerState {
    pub db: Arc<DatabaseConnection>,
    /// Cancelled when the process shuts down; every request derives a child token.
    pub shutdown: CancellationToken,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, shutdown: CancellationToken) -> Self {
        Self { db: Arc::new(db), shutdown }
    }

    pub fn request_token(&self) -> CancellationToken { self.shutdown.child_token() }
}
