use async_trait::async_trait;

use crate::domain::entities::Reservation;
use crate::domain::value_objects::UserId;
#[cfg(test)]
use mockall::automock;

use super::RepositoryError;

/// Port for reads against `reservations`
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Reservations made by `guest_id`, earliest stay first
    async fn list_by_guest(
        &self,
        guest_id: UserId,
        limit: i64,
    ) -> Result<Vec<Reservation>, RepositoryError>;
}
