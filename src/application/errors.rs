//! Error type shared by the listing use cases

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum ListingServiceError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ListingServiceError {
    /// True when the store rejected a write because the row already exists
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Repository(e) if e.is_conflict())
    }
}
