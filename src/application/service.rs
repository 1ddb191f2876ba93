//! The listing query service: the function-call surface the rest of the
//! application uses to read and write users, properties and reservations.
//!
//! Every operation runs exactly one statement against the injected
//! repositories. Nothing is cached or retried, and failures are returned to
//! the caller as [`ListingServiceError`] rather than being folded into an
//! empty result.

use std::sync::Arc;

use crate::application::dto::PropertySearchRequest;
use crate::application::errors::ListingServiceError;
use crate::application::ports::{PropertyRepository, ReservationRepository, UserRepository};
use crate::application::use_cases::{
    CreatePropertyUseCase, CreateUserUseCase, ListPropertiesUseCase, ListReservationsUseCase,
    LookupUserByEmailUseCase, LookupUserByIdUseCase,
};
use crate::application::validation::DEFAULT_LIST_LIMIT;
use crate::domain::entities::{
    NewProperty, NewUser, Property, PropertyListing, Reservation, User, UserEmail, UserRef,
};

pub struct ListingService {
    lookup_user_by_email: LookupUserByEmailUseCase,
    lookup_user_by_id: LookupUserByIdUseCase,
    create_user: CreateUserUseCase,
    list_reservations: ListReservationsUseCase,
    list_properties: ListPropertiesUseCase,
    create_property: CreatePropertyUseCase,
}

impl ListingService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        reservations: Arc<dyn ReservationRepository>,
        properties: Arc<dyn PropertyRepository>,
    ) -> Self {
        Self::with_default_limit(users, reservations, properties, DEFAULT_LIST_LIMIT)
    }

    /// Build the service with a custom result-size bound for list operations
    /// called without an explicit limit
    pub fn with_default_limit(
        users: Arc<dyn UserRepository>,
        reservations: Arc<dyn ReservationRepository>,
        properties: Arc<dyn PropertyRepository>,
        default_limit: i64,
    ) -> Self {
        Self {
            lookup_user_by_email: LookupUserByEmailUseCase::new(Arc::clone(&users)),
            lookup_user_by_id: LookupUserByIdUseCase::new(Arc::clone(&users)),
            create_user: CreateUserUseCase::new(users),
            list_reservations: ListReservationsUseCase::new(reservations)
                .with_default_limit(default_limit),
            list_properties: ListPropertiesUseCase::new(Arc::clone(&properties))
                .with_default_limit(default_limit),
            create_property: CreatePropertyUseCase::new(properties),
        }
    }

    pub async fn lookup_user_by_email(
        &self,
        email: &str,
    ) -> Result<Vec<UserEmail>, ListingServiceError> {
        self.lookup_user_by_email.execute(email).await
    }

    pub async fn lookup_user_by_id(&self, id: &str) -> Result<Vec<UserRef>, ListingServiceError> {
        self.lookup_user_by_id.execute(id).await
    }

    pub async fn create_user(&self, user: NewUser) -> Result<User, ListingServiceError> {
        self.create_user.execute(user).await
    }

    pub async fn list_reservations_for_guest(
        &self,
        guest_id: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Reservation>, ListingServiceError> {
        self.list_reservations.execute(guest_id, limit).await
    }

    pub async fn list_properties(
        &self,
        filter: PropertySearchRequest,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyListing>, ListingServiceError> {
        self.list_properties.execute(filter, limit).await
    }

    pub async fn create_property(
        &self,
        property: NewProperty,
    ) -> Result<Property, ListingServiceError> {
        self.create_property.execute(property).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MockPropertyRepository, MockReservationRepository, MockUserRepository,
    };
    use mockall::predicate::{always, eq};

    #[tokio::test]
    async fn test_default_limit_is_shared_by_list_operations() {
        let users = MockUserRepository::new();

        let mut reservations = MockReservationRepository::new();
        reservations
            .expect_list_by_guest()
            .with(always(), eq(3_i64))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let mut properties = MockPropertyRepository::new();
        properties
            .expect_list()
            .with(always(), eq(3_i64))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = ListingService::with_default_limit(
            Arc::new(users),
            Arc::new(reservations),
            Arc::new(properties),
            3,
        );

        service.list_reservations_for_guest("1", None).await.unwrap();
        service
            .list_properties(PropertySearchRequest::default(), None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_explicit_limit_overrides_default() {
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_list()
            .with(always(), eq(5_i64))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = ListingService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockReservationRepository::new()),
            Arc::new(properties),
        );

        service
            .list_properties(PropertySearchRequest::default(), Some(5))
            .await
            .unwrap();
    }
}
