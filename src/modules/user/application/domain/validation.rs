use email_address::EmailAddress;

use crate::shared::persistence::codec::{Codec, LowerCaseCodec};

use super::entities::{NewUser, UserChanges};

pub const EMAIL_MAX_LEN: usize = 255;
pub const USERNAME_MAX_LEN: usize = 50;
pub const FULL_NAME_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("{0}")]
    InvalidEmail(String),

    #[error("{0}")]
    InvalidUsername(String),

    #[error("{0}")]
    InvalidPassword(String),

    #[error("{0}")]
    InvalidFullName(String),
}

/// The length bound applies to the stored (lower-cased) form, which can be
/// longer than the input.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    let stored = LowerCaseCodec
        .encode(email.to_string())
        .map_err(|e| UserValidationError::InvalidEmail(e.to_string()))?;

    if stored.chars().count() > EMAIL_MAX_LEN {
        return Err(UserValidationError::InvalidEmail(format!(
            "Email must be at most {EMAIL_MAX_LEN} characters"
        )));
    }

    if !EmailAddress::is_valid(email) {
        return Err(UserValidationError::InvalidEmail(
            "Email address is not valid".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.trim().is_empty() {
        return Err(UserValidationError::InvalidUsername(
            "Username cannot be empty".to_string(),
        ));
    }

    if username.chars().count() > USERNAME_MAX_LEN {
        return Err(UserValidationError::InvalidUsername(format!(
            "Username must be at most {USERNAME_MAX_LEN} characters"
        )));
    }

    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.is_empty() {
        return Err(UserValidationError::InvalidPassword(
            "Password cannot be empty".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_full_name(full_name: &str) -> Result<(), UserValidationError> {
    if full_name.chars().count() > FULL_NAME_MAX_LEN {
        return Err(UserValidationError::InvalidFullName(format!(
            "Full name must be at most {FULL_NAME_MAX_LEN} characters"
        )));
    }

    Ok(())
}

impl NewUser {
    pub fn validate(&self) -> Result<(), UserValidationError> {
        validate_email(&self.email)?;
        validate_username(&self.username)?;
        validate_password(&self.password)?;
        if let Some(full_name) = &self.full_name {
            validate_full_name(full_name)?;
        }
        Ok(())
    }
}

impl UserChanges {
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(username) = &self.username {
            validate_username(username)?;
        }
        if let Some(password) = &self.password {
            validate_password(password)?;
        }
        if let Some(full_name) = &self.full_name {
            validate_full_name(full_name)?;
        }
        Ok(())
    }
}
