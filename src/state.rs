use std::sync::Arc;

use sqlx::MySqlPool;

use crate::config::AppConfig;
use crate::db;

/// Shared application state handed to every request handler.
///
/// The pool is process-wide; individual connections are checked out per
/// query and returned when the handler is done with them.
#[derive(Clone)]
pub struct AppState {
    pub db: MySqlPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env());
        let db = db::connect(&config.database_url, config.max_connections).await?;
        Ok(Self { db, config })
    }
}
