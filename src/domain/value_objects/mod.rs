mod cents;
mod property_id;
mod user_id;

pub use cents::Cents;
pub use property_id::PropertyId;
pub use user_id::UserId;
