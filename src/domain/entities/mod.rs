mod property;
mod reservation;
mod user;

pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::Reservation;
pub use user::{NewUser, User, UserEmail, UserRef};
