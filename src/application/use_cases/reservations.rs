use std::sync::Arc;

use tracing::{debug, error};

use crate::application::errors::ListingServiceError;
use crate::application::ports::ReservationRepository;
use crate::application::validation::{parse_user_id, resolve_limit, DEFAULT_LIST_LIMIT};
use crate::domain::entities::Reservation;

/// Use case: list a guest's reservations, earliest stay first
pub struct ListReservationsUseCase {
    repository: Arc<dyn ReservationRepository>,
    default_limit: i64,
}

impl ListReservationsUseCase {
    pub fn new(repository: Arc<dyn ReservationRepository>) -> Self {
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
        guest_id: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Reservation>, ListingServiceError> {
        let guest_id = parse_user_id(guest_id)?;
        let limit = resolve_limit(limit, self.default_limit)?;

        let reservations = self
            .repository
            .list_by_guest(guest_id, limit)
            .await
            .inspect_err(|e| error!(guest_id = %guest_id, "Failed to list reservations: {}", e))?;

        debug!(
            guest_id = %guest_id,
            limit,
            "Listed {} reservation(s)",
            reservations.len()
        );
        Ok(reservations)
    }
}
