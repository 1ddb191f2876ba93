//! # LightBnB - Listing Data Access
//!
//! The data-access layer of a property-rental listing application: typed
//! reads and writes of users, properties and reservations over PostgreSQL.
//!
//! ## Architecture Layers
//!
//! - **Domain**: entities and value objects (ids, minor-unit prices)
//! - **Application**: repository ports, use cases and the [`ListingService`]
//! - **Infrastructure**: the [`Store`] handle, the listing query builder and
//!   PostgreSQL repository adapters
//!
//! ## Example Usage
//!
//! ```no_run
//! use lightbnb::{application::builder::ApplicationBuilder, dto::PropertySearchRequest, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let app = ApplicationBuilder::new(Config::from_env())
//!     .with_database()
//!     .await?
//!     .build()
//!     .await?;
//!
//! let request = PropertySearchRequest {
//!     city: Some("Vancouver".to_string()),
//!     minimum_rating: Some(4.0),
//!     ..Default::default()
//! };
//! let listings = app.service.list_properties(request, Some(5)).await?;
//! println!("{} listings", listings.len());
//!
//! app.store.close().await;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use application::errors::ListingServiceError;
pub use application::service::ListingService;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
pub use infrastructure::persistence::Store;
