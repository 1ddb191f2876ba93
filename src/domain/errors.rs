use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Invalid user ID: {0}")]
    InvalidUserId(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Price out of range: {0} cannot be stored in minor units")]
    PriceOutOfRange(f64),
}
