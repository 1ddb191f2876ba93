use async_trait::async_trait;

use crate::domain::entities::{NewUser, User, UserEmail, UserRef};
use crate::domain::value_objects::UserId;
#[cfg(test)]
use mockall::automock;

use super::RepositoryError;

/// Port for reads and inserts against `users`
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Rows whose email equals `email`, projected to the email column
    async fn find_by_email(&self, email: &str) -> Result<Vec<UserEmail>, RepositoryError>;

    /// Rows whose id equals `id`, projected to the id column
    async fn find_by_id(&self, id: UserId) -> Result<Vec<UserRef>, RepositoryError>;

    /// Insert a user and read the stored row back
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;
}
