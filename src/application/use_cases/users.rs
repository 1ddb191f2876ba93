use std::sync::Arc;

use tracing::{debug, error, info};

use crate::application::errors::ListingServiceError;
use crate::application::ports::UserRepository;
use crate::application::validation::parse_user_id;
use crate::domain::entities::{NewUser, User, UserEmail, UserRef};

/// Use case: look a user up by email.
///
/// Only the `email` column is returned. No match yields an empty `Vec`.
pub struct LookupUserByEmailUseCase {
    repository: Arc<dyn UserRepository>,
}

impl LookupUserByEmailUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, email: &str) -> Result<Vec<UserEmail>, ListingServiceError> {
        let rows = self
            .repository
            .find_by_email(email)
            .await
            .inspect_err(|e| error!("User lookup by email failed: {}", e))?;

        debug!("User lookup by email matched {} row(s)", rows.len());
        Ok(rows)
    }
}

/// Use case: look a user up by id.
///
/// Only the `id` column is returned. No match yields an empty `Vec`.
pub struct LookupUserByIdUseCase {
    repository: Arc<dyn UserRepository>,
}

impl LookupUserByIdUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> Result<Vec<UserRef>, ListingServiceError> {
        let id = parse_user_id(id)?;

        let rows = self
            .repository
            .find_by_id(id)
            .await
            .inspect_err(|e| error!(user_id = %id, "User lookup by id failed: {}", e))?;

        debug!(user_id = %id, "User lookup by id matched {} row(s)", rows.len());
        Ok(rows)
    }
}

/// Use case: insert a user.
///
/// Email uniqueness is left to the store; a duplicate surfaces as a conflict.
pub struct CreateUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, user: NewUser) -> Result<User, ListingServiceError> {
        let created = self.repository.create(&user).await.inspect_err(|e| {
            if e.is_conflict() {
                info!("User with this email already exists: {}", e);
            } else {
                error!("Failed to create user: {}", e);
            }
        })?;

        info!(user_id = %created.id, "User created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockUserRepository, RepositoryError};
    use crate::domain::value_objects::UserId;
    use mockall::predicate::eq;

    fn new_user() -> NewUser {
        NewUser {
            name: "A".to_string(),
            email: "a@a.com".to_string(),
            password: "x".to_string(),
        }
    }

    #[tokio::test]
    async fn test_lookup_by_email_returns_rows() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("a@a.com"))
            .times(1)
            .returning(|email| {
                Ok(vec![UserEmail {
                    email: email.to_string(),
                }])
            });

        let use_case = LookupUserByEmailUseCase::new(Arc::new(repo));
        let rows = use_case.execute("a@a.com").await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].email, "a@a.com");
    }

    #[tokio::test]
    async fn test_lookup_by_email_no_match_is_empty_not_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(vec![]));

        let use_case = LookupUserByEmailUseCase::new(Arc::new(repo));
        let rows = use_case.execute("nobody@example.com").await.unwrap();

        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_by_email_propagates_store_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(RepositoryError::Unavailable("pool timed out".to_string())));

        let use_case = LookupUserByEmailUseCase::new(Arc::new(repo));
        let result = use_case.execute("a@a.com").await;

        assert!(matches!(
            result,
            Err(ListingServiceError::Repository(RepositoryError::Unavailable(_)))
        ));
    }

    #[tokio::test]
    async fn test_lookup_by_id_parses_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(UserId::new(7)))
            .times(1)
            .returning(|id| Ok(vec![UserRef { id }]));

        let use_case = LookupUserByIdUseCase::new(Arc::new(repo));
        let rows = use_case.execute("7").await.unwrap();

        assert_eq!(rows, vec![UserRef { id: UserId::new(7) }]);
    }

    #[tokio::test]
    async fn test_lookup_by_id_rejects_non_numeric_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().never();

        let use_case = LookupUserByIdUseCase::new(Arc::new(repo));
        let result = use_case.execute("seven").await;

        assert!(matches!(result, Err(ListingServiceError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_create_user_returns_stored_row() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().times(1).returning(|user| {
            Ok(User {
                id: UserId::new(1),
                name: user.name.clone(),
                email: user.email.clone(),
                password: user.password.clone(),
            })
        });

        let use_case = CreateUserUseCase::new(Arc::new(repo));
        let user = use_case.execute(new_user()).await.unwrap();

        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.email, "a@a.com");
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email_is_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .returning(|_| Err(RepositoryError::Conflict("users_email_key".to_string())));

        let use_case = CreateUserUseCase::new(Arc::new(repo));
        let err = use_case.execute(new_user()).await.unwrap_err();

        assert!(err.is_conflict());
    }
}
