mod properties;
mod reservations;
mod users;

pub use properties::{CreatePropertyUseCase, ListPropertiesUseCase};
pub use reservations::ListReservationsUseCase;
pub use users::{CreateUserUseCase, LookupUserByEmailUseCase, LookupUserByIdUseCase};
