use sea_orm::ActiveValue::{NotSet, Set};

use crate::shared::persistence::codec::{
    Codec, CodecError, LowerCaseCodec, PasswordCodec, UtcDateTimeCodec,
};
use crate::shared::persistence::{AuditFields, SoftDelete};
use crate::user::application::domain::{NewUser, User, UserChanges};
use crate::user::application::ports::outgoing::UserRepositoryError;

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Model as UserModel};

/// The codecs bound to the user table's columns, applied per field on the
/// write and read paths.
#[derive(Clone, Default)]
pub struct UserCodecs {
    pub password: PasswordCodec,
    pub email: LowerCaseCodec,
    pub timestamp: UtcDateTimeCodec,
}

impl UserCodecs {
    pub fn new(password: PasswordCodec) -> Self {
        Self {
            password,
            email: LowerCaseCodec,
            timestamp: UtcDateTimeCodec,
        }
    }

    /// Row for an insert. `created` and `updated` are left to the database.
    pub async fn encode_new(&self, user: NewUser) -> Result<UserActiveModel, CodecError> {
        let password = self.password.encode_in_background(user.password).await?;

        Ok(UserActiveModel {
            id: Set(user.id),
            email: Set(self.email.encode(user.email)?),
            username: Set(user.username),
            password: Set(password),
            full_name: Set(user.full_name),
            is_active: Set(user.is_active),
            is_superuser: Set(user.is_superuser),
            last_login: Set(None),
            is_deleted: Set(false),
            deleted_at: Set(None),
            created: NotSet,
            updated: NotSet,
        })
    }

    pub async fn encode_changes(
        &self,
        active: &mut UserActiveModel,
        changes: UserChanges,
    ) -> Result<(), CodecError> {
        if let Some(email) = changes.email {
            active.email = Set(self.email.encode(email)?);
        }
        if let Some(username) = changes.username {
            active.username = Set(username);
        }
        if let Some(password) = changes.password {
            active.password = Set(self.password.encode_in_background(password).await?);
        }
        if let Some(full_name) = changes.full_name {
            active.full_name = Set(Some(full_name));
        }
        if let Some(is_active) = changes.is_active {
            active.is_active = Set(is_active);
        }
        if let Some(is_superuser) = changes.is_superuser {
            active.is_superuser = Set(is_superuser);
        }
        Ok(())
    }

    pub fn decode(&self, model: UserModel) -> Result<User, UserRepositoryError> {
        let created = UtcDateTimeCodec::to_utc(self.timestamp.decode(model.created)?);
        let updated = UtcDateTimeCodec::to_utc(self.timestamp.decode(model.updated)?);
        let audit = AuditFields::restore(model.id, created, updated)?;

        let deleted_at = self
            .timestamp
            .decode_nullable(model.deleted_at)?
            .map(UtcDateTimeCodec::to_utc);
        let deletion = SoftDelete::restore(model.is_deleted, deleted_at)?;

        let mut user = User::new(
            audit,
            deletion,
            self.email.decode(model.email)?,
            model.username,
            self.password.decode(model.password)?,
        );
        user.full_name = model.full_name;
        user.is_active = model.is_active;
        user.is_superuser = model.is_superuser;
        user.last_login = self
            .timestamp
            .decode_nullable(model.last_login)?
            .map(UtcDateTimeCodec::to_utc);

        Ok(user)
    }
}
