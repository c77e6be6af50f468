use chrono::{DateTime, Utc};

use super::error::EntityError;

/// Reversible-deletion state embedded in entities that are never physically
/// removed by the application.
///
/// Invariant: `deleted_at.is_some() == is_deleted`. The only transition is
/// live → deleted; there is no undelete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoftDelete {
    is_deleted: bool,
    deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftDeleteOutcome {
    Deleted(DateTime<Utc>),
    /// The entity was already deleted; carries the original timestamp.
    AlreadyDeleted(DateTime<Utc>),
}

impl SoftDeleteOutcome {
    pub fn deleted_at(self) -> DateTime<Utc> {
        match self {
            SoftDeleteOutcome::Deleted(at) | SoftDeleteOutcome::AlreadyDeleted(at) => at,
        }
    }

    pub fn is_repeat(self) -> bool {
        matches!(self, SoftDeleteOutcome::AlreadyDeleted(_))
    }
}

impl SoftDelete {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restore(
        is_deleted: bool,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Result<Self, EntityError> {
        if deleted_at.is_some() != is_deleted {
            return Err(EntityError::DeletionStateMismatch { is_deleted });
        }

        Ok(Self {
            is_deleted,
            deleted_at,
        })
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    pub fn soft_delete(&mut self) -> SoftDeleteOutcome {
        self.soft_delete_at(Utc::now())
    }

    /// Marks the entity deleted at `at`. A second call leaves the first
    /// timestamp in place.
    pub fn soft_delete_at(&mut self, at: DateTime<Utc>) -> SoftDeleteOutcome {
        if let Some(previous) = self.deleted_at {
            return SoftDeleteOutcome::AlreadyDeleted(previous);
        }

        self.is_deleted = true;
        self.deleted_at = Some(at);
        SoftDeleteOutcome::Deleted(at)
    }
}

/// Entities embedding [`SoftDelete`].
pub trait SoftDeletable {
    fn deletion(&self) -> &SoftDelete;

    fn deletion_mut(&mut self) -> &mut SoftDelete;

    fn is_deleted(&self) -> bool {
        self.deletion().is_deleted()
    }

    fn soft_delete(&mut self) -> SoftDeleteOutcome {
        self.deletion_mut().soft_delete()
    }
}
