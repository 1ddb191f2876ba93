use std::sync::Arc;

use tracing::info;

use crate::application::ports::{PropertyRepository, ReservationRepository, UserRepository};
use crate::application::service::ListingService;
use crate::config::Config;
use crate::infrastructure::persistence::{
    PostgresPropertyRepository, PostgresReservationRepository, PostgresUserRepository, Store,
};

/// Type alias for errors raised while wiring the application
pub type BuildError = Box<dyn std::error::Error + Send + Sync>;

/// Fully wired application: the listing service and the store handle it
/// runs on. Call [`Store::close`] on `store` at shutdown.
pub struct Application {
    pub service: ListingService,
    pub store: Store,
}

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    store: Option<Store>,
    run_migrations: bool,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: None,
            run_migrations: false,
        }
    }

    /// Open the store handle described by the configuration
    pub async fn with_database(mut self) -> Result<Self, BuildError> {
        let store = Store::connect(&self.config).await?;
        self.store = Some(store);
        Ok(self)
    }

    /// Use an already opened store handle
    pub fn with_store(mut self, store: Store) -> Self {
        self.store = Some(store);
        self
    }

    /// Apply the bundled schema before building
    pub fn with_migrations(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    /// Build the listing service over the PostgreSQL repositories
    pub async fn build(self) -> Result<Application, BuildError> {
        let store = self.store.ok_or("Database store not initialized")?;

        if self.run_migrations {
            store.migrate().await?;
        }

        let users: Arc<dyn UserRepository> =
            Arc::new(PostgresUserRepository::new(store.pool().clone()));
        let reservations: Arc<dyn ReservationRepository> =
            Arc::new(PostgresReservationRepository::new(store.pool().clone()));
        let properties: Arc<dyn PropertyRepository> =
            Arc::new(PostgresPropertyRepository::new(store.pool().clone()));

        let service = ListingService::with_default_limit(
            users,
            reservations,
            properties,
            self.config.default_list_limit,
        );

        info!("Application layer initialized");
        Ok(Application { service, store })
    }
}
