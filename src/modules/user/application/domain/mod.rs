pub mod entities;
pub mod validation;

pub use entities::{NewUser, User, UserChanges, UserInDb, UserPublic};
pub use validation::UserValidationError;
