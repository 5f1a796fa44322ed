use crate::config::DatabaseConfig;
use crate::error::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::{debug, info};

/// Owns the pool every repository executes against
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Validate `config` and open a pool sized from it
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        config.validate()?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect(&config.url)
            .await?;

        info!(
            max_connections = config.max_connections,
            "Database pool connected"
        );

        Ok(Self { pool })
    }

    /// Wrap a pool created elsewhere, such as one handed out by a test harness
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trip a trivial query through the pool
    pub async fn health_check(&self) -> Result<bool> {
        let answer: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await?;
        debug!(answer, "Database health check");
        Ok(answer == 1)
    }

    /// Stop handing out connections and wait for checked-out ones to return
    pub async fn close(self) {
        self.pool.close().await;
        info!("Database pool closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}
