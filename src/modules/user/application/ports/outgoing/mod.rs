mod password_verifier;
mod user_repository;

pub use password_verifier::PasswordVerifier;
pub use user_repository::{UserRepository, UserRepositoryError};
