pub mod audit;
pub mod codec;
pub mod error;
pub mod soft_delete;

pub use audit::{AuditFields, Audited};
pub use error::EntityError;
pub use soft_delete::{SoftDeletable, SoftDelete, SoftDeleteOutcome};
