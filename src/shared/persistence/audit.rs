use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::error::EntityError;

/// Identity and timestamps shared by every persisted entity.
///
/// `created` and `updated` come from the database clock (column defaults and
/// the update trigger). Application code can only read them back, which is
/// why the only constructor that accepts timestamps is [`AuditFields::restore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditFields {
    id: Uuid,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl AuditFields {
    /// Random (v4) identifier for an entity that has not been written yet.
    pub fn new_id() -> Uuid {
        Uuid::new_v4()
    }

    pub fn restore(
        id: Uuid,
        created: DateTime<Utc>,
        updated: DateTime<Utc>,
    ) -> Result<Self, EntityError> {
        if created > updated {
            return Err(EntityError::TimestampsOutOfOrder {
                id,
                created,
                updated,
            });
        }

        Ok(Self {
            id,
            created,
            updated,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }
}

/// Entities embedding [`AuditFields`].
pub trait Audited {
    fn audit(&self) -> &AuditFields;

    fn id(&self) -> Uuid {
        self.audit().id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<Uuid> = (0..10_000).map(|_| AuditFields::new_id()).collect();

        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_generated_ids_are_random_v4() {
        let id = AuditFields::new_id();

        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn test_restore_accepts_equal_timestamps() {
        let now = Utc::now();
        let id = Uuid::new_v4();

        let audit = AuditFields::restore(id, now, now).unwrap();

        assert_eq!(audit.id(), id);
        assert_eq!(audit.created(), now);
        assert_eq!(audit.updated(), now);
    }

    #[test]
    fn test_restore_rejects_created_after_updated() {
        let now = Utc::now();
        let id = Uuid::new_v4();

        let result = AuditFields::restore(id, now, now - Duration::seconds(1));

        assert!(matches!(
            result,
            Err(EntityError::TimestampsOutOfOrder { id: failed, .. }) if failed == id
        ));
    }
}
