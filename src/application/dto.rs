use serde::{Deserialize, Serialize};

/// Caller-facing listing criteria, before validation.
///
/// Prices are decimal amounts in major currency units and `owner_id` is
/// accepted in textual form; both are converted by
/// [`validate_property_search`](crate::application::validation::validate_property_search).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySearchRequest {
    pub city: Option<String>,
    pub owner_id: Option<String>,
    pub minimum_price_per_night: Option<f64>,
    pub maximum_price_per_night: Option<f64>,
    pub minimum_rating: Option<f64>,
}

