//! Input checks run by the use cases before any statement is issued

use crate::application::dto::PropertySearchRequest;
use crate::application::errors::ListingServiceError;
use crate::application::ports::PropertyFilter;
use crate::domain::value_objects::{Cents, UserId};

/// Result-size bound applied when the caller gives none
pub const DEFAULT_LIST_LIMIT: i64 = 10;

/// Largest result-size bound a caller may request
pub const MAX_LIST_LIMIT: i64 = 1000;

/// Resolve the caller's limit, falling back to `default`
pub fn resolve_limit(limit: Option<i64>, default: i64) -> Result<i64, ListingServiceError> {
    let limit = limit.unwrap_or(default);
    if !(1..=MAX_LIST_LIMIT).contains(&limit) {
        return Err(ListingServiceError::InvalidRequest(format!(
            "limit must be between 1 and {MAX_LIST_LIMIT}, got {limit}"
        )));
    }
    Ok(limit)
}

/// Parse a textual user id
pub fn parse_user_id(id: &str) -> Result<UserId, ListingServiceError> {
    id.parse::<UserId>()
        .map_err(|e| ListingServiceError::InvalidRequest(e.to_string()))
}

/// Convert listing criteria into a [`PropertyFilter`].
///
/// An empty city is treated as absent. Prices are scaled to minor units.
pub fn validate_property_search(
    request: PropertySearchRequest,
) -> Result<PropertyFilter, ListingServiceError> {
    let city = request.city.filter(|c| !c.is_empty());

    let owner_id = request
        .owner_id
        .as_deref()
        .map(parse_user_id)
        .transpose()?;

    let minimum_price_per_night = request
        .minimum_price_per_night
        .map(Cents::from_decimal)
        .transpose()?;
    let maximum_price_per_night = request
        .maximum_price_per_night
        .map(Cents::from_decimal)
        .transpose()?;

    if let (Some(min), Some(max)) = (minimum_price_per_night, maximum_price_per_night) {
        if min > max {
            return Err(ListingServiceError::InvalidRequest(format!(
                "minimum price per night {min} exceeds maximum {max}"
            )));
        }
    }

    if let Some(rating) = request.minimum_rating {
        if !rating.is_finite() {
            return Err(ListingServiceError::InvalidRequest(
                "minimum rating must be a finite number".to_string(),
            ));
        }
    }

    Ok(PropertyFilter {
        city,
        owner_id,
        minimum_price_per_night,
        maximum_price_per_night,
        minimum_rating: request.minimum_rating,
    })
}
