mod listing_query;
mod postgres_property_repository;
mod postgres_reservation_repository;
mod postgres_user_repository;
mod store;

pub use listing_query::{Comparison, ListingQuery, QueryParam, RenderedQuery};
pub use postgres_property_repository::PostgresPropertyRepository;
pub use postgres_reservation_repository::PostgresReservationRepository;
pub use postgres_user_repository::PostgresUserRepository;
pub use store::Store;
