use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{error, info, warn};

use crate::config::Config;

/// The process-wide store handle.
///
/// Opened once at startup and closed at shutdown. Repositories receive
/// clones of the inner pool; the handle performs no per-statement retries.
#[derive(Debug, Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Open the connection pool, retrying with exponential backoff
    pub async fn connect(config: &Config) -> Result<Self, sqlx::Error> {
        info!("Connecting to database");

        let mut retries = config.db_connect_retries;
        let mut delay = Duration::from_secs(1);
        let pool = loop {
            match PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .min_connections(config.db_min_connections)
                .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
                .idle_timeout(Some(Duration::from_secs(config.db_idle_timeout_secs)))
                .max_lifetime(Some(Duration::from_secs(config.db_max_lifetime_secs)))
                .connect(&config.database_url)
                .await
            {
                Ok(pool) => break pool,
                Err(e) if retries > 0 => {
                    retries -= 1;
                    warn!(
                        "Database connection failed, retrying in {:?} ({} retries left): {}",
                        delay, retries, e
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    error!("Failed to connect to database after retries: {}", e);
                    return Err(e);
                }
            }
        };

        info!(
            "Database pool configured: max={}, min={}, acquire_timeout={}s, idle_timeout={}s, max_lifetime={}s",
            config.db_max_connections,
            config.db_min_connections,
            config.db_acquire_timeout_secs,
            config.db_idle_timeout_secs,
            config.db_max_lifetime_secs
        );

        Ok(Self { pool })
    }

    /// Wrap a pool opened elsewhere (e.g. by a test harness)
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply the bundled schema
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .inspect_err(|e| error!("Failed to run migrations: {}", e))
    }

    /// Wait for in-flight statements and close every connection
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}
