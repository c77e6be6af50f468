use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::shared::persistence::codec::Codec;
use crate::shared::persistence::{SoftDeletable, SoftDeleteOutcome};
use crate::user::application::domain::{NewUser, User, UserChanges};
use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use super::user_codecs::UserCodecs;

#[derive(Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    codecs: UserCodecs,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, codecs: UserCodecs) -> Self {
        Self { db, codecs }
    }

    fn map_db_error(e: DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UserAlreadyExists;
        }
        if matches!(e, DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated) {
            return UserRepositoryError::UserNotFound;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let user_id = user.id;
        let active = self.codecs.encode_new(user).await?;

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            let mapped = Self::map_db_error(e);
            if mapped == UserRepositoryError::UserAlreadyExists {
                debug!(user_id = %user_id, "Insert hit a unique constraint");
            }
            mapped
        })?;

        self.codecs.decode(inserted)
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_error)?
            .map(|model| self.codecs.decode(model))
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let email = self.codecs.email.encode(email.to_string())?;

        UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_error)?
            .map(|model| self.codecs.decode(model))
            .transpose()
    }

    async fn update_user(
        &self,
        user_id: Uuid,
        changes: UserChanges,
    ) -> Result<User, UserRepositoryError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_error)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        if changes.is_empty() {
            return self.codecs.decode(model);
        }

        let mut active: UserActiveModel = model.into();
        self.codecs.encode_changes(&mut active, changes).await?;

        let updated = active
            .update(&*self.db)
            .await
            .map_err(Self::map_db_error)?;

        self.codecs.decode(updated)
    }

    async fn mark_deleted(
        &self,
        user_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<SoftDeleteOutcome, UserRepositoryError> {
        let stored_at = self.codecs.timestamp.encode(at.fixed_offset())?;

        let result = UserEntity::update_many()
            .col_expr(UserColumn::IsDeleted, Expr::value(true))
            .col_expr(UserColumn::DeletedAt, Expr::value(stored_at))
            .col_expr(UserColumn::Updated, Expr::current_timestamp().into())
            .filter(UserColumn::Id.eq(user_id))
            .filter(UserColumn::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_error)?;

        if result.rows_affected > 0 {
            return Ok(SoftDeleteOutcome::Deleted(at));
        }

        // Either the row is gone or another request deleted it first.
        let current = self
            .find_by_id(user_id)
            .await?
            .ok_or(UserRepositoryError::UserNotFound)?;

        match current.deletion().deleted_at() {
            Some(original) => {
                warn!(user_id = %user_id, "Concurrent soft delete kept the earlier timestamp");
                Ok(SoftDeleteOutcome::AlreadyDeleted(original))
            }
            None => Err(UserRepositoryError::DatabaseError(
                "Soft delete affected no rows".to_string(),
            )),
        }
    }

    async fn record_login(
        &self,
        user_id: Uuid,
        at: DateTime<FixedOffset>,
    ) -> Result<User, UserRepositoryError> {
        let active = UserActiveModel {
            id: Set(user_id),
            last_login: Set(Some(self.codecs.timestamp.encode(at)?)),
            ..Default::default()
        };

        let updated = active
            .update(&*self.db)
            .await
            .map_err(Self::map_db_error)?;

        self.codecs.decode(updated)
    }
}
