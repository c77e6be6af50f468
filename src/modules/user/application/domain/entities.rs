use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::persistence::{AuditFields, Audited, SoftDeletable, SoftDelete};

/// A user account as loaded from storage.
///
/// `password_hash` holds the stored Argon2id PHC string; plaintext never
/// reaches this type.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    audit: AuditFields,
    deletion: SoftDelete,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Active, non-superuser account with no profile name and no login yet.
    pub fn new(
        audit: AuditFields,
        deletion: SoftDelete,
        email: String,
        username: String,
        password_hash: String,
    ) -> Self {
        Self {
            audit,
            deletion,
            email,
            username,
            password_hash,
            full_name: None,
            is_active: true,
            is_superuser: false,
            last_login: None,
        }
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.audit.created()
    }

    pub fn updated(&self) -> DateTime<Utc> {
        self.audit.updated()
    }

    /// Whether the account may sign in at all.
    pub fn can_authenticate(&self) -> bool {
        self.is_active && !self.is_deleted()
    }

    pub fn to_public(&self) -> UserPublic {
        UserPublic {
            id: self.id(),
            email: self.email.clone(),
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            is_active: self.is_active,
            is_superuser: self.is_superuser,
            created: self.created(),
            updated: self.updated(),
            last_login: self.last_login,
        }
    }

    pub fn into_in_db(self) -> UserInDb {
        UserInDb {
            public: self.to_public(),
            hashed_password: self.password_hash,
        }
    }
}

impl Audited for User {
    fn audit(&self) -> &AuditFields {
        &self.audit
    }
}

impl SoftDeletable for User {
    fn deletion(&self) -> &SoftDelete {
        &self.deletion
    }

    fn deletion_mut(&mut self) -> &mut SoftDelete {
        &mut self.deletion
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id())
            .field("email", &self.email)
            .field("username", &self.username)
            .field("is_active", &self.is_active)
            .field("is_superuser", &self.is_superuser)
            .field("deletion", &self.deletion)
            .finish_non_exhaustive()
    }
}

/// Data for a user that has not been stored yet. `password` is plaintext and
/// is hashed by the storage adapter on write.
#[derive(Clone)]
pub struct NewUser {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub password: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
}

impl NewUser {
    pub fn new(email: String, username: String, password: String) -> Self {
        Self {
            id: AuditFields::new_id(),
            email,
            username,
            password,
            full_name: None,
            is_active: true,
            is_superuser: false,
        }
    }

    /// Uses a caller-assigned id instead of a generated one.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_full_name(mut self, full_name: Option<String>) -> Self {
        self.full_name = full_name;
        self
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("full_name", &self.full_name)
            .field("is_active", &self.is_active)
            .field("is_superuser", &self.is_superuser)
            .finish_non_exhaustive()
    }
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Clone, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub is_active: Option<bool>,
    pub is_superuser: Option<bool>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.full_name.is_none()
            && self.is_active.is_none()
            && self.is_superuser.is_none()
    }
}

impl fmt::Debug for UserChanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserChanges")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "**********"))
            .field("full_name", &self.full_name)
            .field("is_active", &self.is_active)
            .field("is_superuser", &self.is_superuser)
            .finish()
    }
}

/// Outward projection of a user. The only user shape that leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserPublic {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,

    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "jane")]
    pub username: String,

    #[schema(example = "Jane Doe")]
    pub full_name: Option<String>,

    pub is_active: bool,
    pub is_superuser: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// Internal projection carrying the stored hash. Deliberately not
/// `Serialize`.
#[derive(Clone, PartialEq, Eq)]
pub struct UserInDb {
    pub public: UserPublic,
    pub hashed_password: String,
}

impl fmt::Debug for UserInDb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserInDb")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}
