use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored row that breaks an entity invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    #[error("entity {id}: created ({created}) is later than updated ({updated})")]
    TimestampsOutOfOrder {
        id: Uuid,
        created: DateTime<Utc>,
        updated: DateTime<Utc>,
    },

    #[error("deleted_at must be set exactly when is_deleted is true (is_deleted = {is_deleted})")]
    DeletionStateMismatch { is_deleted: bool },
}
