use std::sync::Arc;

use tracing::{debug, error, info};

use crate::application::dto::PropertySearchRequest;
use crate::application::errors::ListingServiceError;
use crate::application::ports::PropertyRepository;
use crate::application::validation::{resolve_limit, validate_property_search, DEFAULT_LIST_LIMIT};
use crate::domain::entities::{NewProperty, Property, PropertyListing};

/// Use case: list reviewed properties matching optional criteria,
/// cheapest first, each with its average rating
pub struct ListPropertiesUseCase {
    repository: Arc<dyn PropertyRepository>,
    default_limit: i64,
}

impl ListPropertiesUseCase {
    pub fn new(repository: Arc<dyn PropertyRepository>) -> Self {
        Self {
            repository,
            default_limit: DEFAULT_LIST_LIMIT,
        }
    }

    pub fn with_default_limit(mut self, default_limit: i64) -> Self {
        self.default_limit = default_limit;
        self
    }

    pub async fn execute(
        &self,
        request: PropertySearchRequest,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyListing>, ListingServiceError> {
        let filter = validate_property_search(request)?;
        let limit = resolve_limit(limit, self.default_limit)?;

        let listings = self
            .repository
            .list(&filter, limit)
            .await
            .inspect_err(|e| error!("Failed to list properties: {}", e))?;

        debug!(
            filters = filter.value_count(),
            limit,
            "Listed {} propert(ies)",
            listings.len()
        );
        Ok(listings)
    }
}

/// Use case: insert a property
pub struct CreatePropertyUseCase {
    repository: Arc<dyn PropertyRepository>,
}

impl CreatePropertyUseCase {
    pub fn new(repository: Arc<dyn PropertyRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, property: NewProperty) -> Result<Property, ListingServiceError> {
        let created = self
            .repository
            .create(&property)
            .await
            .inspect_err(|e| error!(owner_id = %property.owner_id, "Failed to create property: {}", e))?;

        info!(property_id = %created.id, owner_id = %created.owner_id, "Property created");
        Ok(created)
    }
}
