use async_trait::async_trait;

use crate::domain::entities::{NewProperty, Property, PropertyListing};
use crate::domain::value_objects::{Cents, UserId};
#[cfg(test)]
use mockall::automock;

use super::RepositoryError;

/// Validated criteria for the property listing query.
///
/// Every field is optional and present fields are AND-combined. Price bounds
/// are already in minor units; `minimum_rating` applies to the per-property
/// average and is evaluated after grouping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    pub city: Option<String>,
    pub owner_id: Option<UserId>,
    pub minimum_price_per_night: Option<Cents>,
    pub maximum_price_per_night: Option<Cents>,
    pub minimum_rating: Option<f64>,
}

impl PropertyFilter {
    /// Number of bound values the filter contributes to a statement
    pub fn value_count(&self) -> usize {
        [
            self.city.is_some(),
            self.owner_id.is_some(),
            self.minimum_price_per_night.is_some(),
            self.maximum_price_per_night.is_some(),
            self.minimum_rating.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

/// Port for reads and inserts against `properties`
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Reviewed properties matching `filter`, cheapest first, with their
    /// average rating
    async fn list(
        &self,
        filter: &PropertyFilter,
        limit: i64,
    ) -> Result<Vec<PropertyListing>, RepositoryError>;

    /// Insert a property and read the stored row back
    async fn create(&self, property: &NewProperty) -> Result<Property, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_count_empty() {
        assert_eq!(PropertyFilter::default().value_count(), 0);
    }

    #[test]
    fn test_value_count_counts_each_present_field() {
        let filter = PropertyFilter {
            city: Some("Vancouver".to_string()),
            minimum_price_per_night: Some(Cents::new(10000)),
            minimum_rating: Some(4.0),
            ..Default::default()
        };
        assert_eq!(filter.value_count(), 3);
    }
}
