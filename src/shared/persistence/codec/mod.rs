//! Column codecs applied by storage adapters on the write (`encode`) and read
//! (`decode`) paths.
//!
//! Every codec is a plain value with no interior mutability, so a single
//! instance can be shared across request workers.

mod case;
mod enumeration;
mod password;
mod utc_datetime;

pub use case::{LowerCaseCodec, UpperCaseCodec};
pub use enumeration::{EnumCodec, EnumStorage, StoredEnum};
pub use password::{PasswordCodec, PASSWORD_HASH_LEN};
pub use utc_datetime::UtcDateTimeCodec;

use sea_orm::sea_query::StringLen;
use sea_orm::ColumnType;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("`{raw}` is not a valid {target}")]
    Decode { target: &'static str, raw: String },

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Invalid password hashing parameters: {0}")]
    Params(String),

    #[error("Background task failed")]
    TaskFailed,
}

/// Paired transformation between an application value and its stored form.
pub trait Codec: Send + Sync {
    type Value;
    type Stored;

    const KIND: CodecKind;

    fn encode(&self, value: Self::Value) -> Result<Self::Stored, CodecError>;

    fn decode(&self, stored: Self::Stored) -> Result<Self::Value, CodecError>;

    /// `None` is stored as `NULL` without invoking the codec.
    fn encode_nullable(
        &self,
        value: Option<Self::Value>,
    ) -> Result<Option<Self::Stored>, CodecError> {
        value.map(|v| self.encode(v)).transpose()
    }

    fn decode_nullable(
        &self,
        stored: Option<Self::Stored>,
    ) -> Result<Option<Self::Value>, CodecError> {
        stored.map(|s| self.decode(s)).transpose()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecKind {
    Password,
    UpperCase,
    LowerCase,
    UtcDateTime,
    IntEnum,
    StrEnum,
}

impl CodecKind {
    pub fn storage(self) -> StorageClass {
        match self {
            CodecKind::Password => StorageClass::FixedString(PASSWORD_HASH_LEN),
            CodecKind::UpperCase | CodecKind::LowerCase | CodecKind::StrEnum => {
                StorageClass::BoundedString
            }
            CodecKind::UtcDateTime => StorageClass::TimestampTz,
            CodecKind::IntEnum => StorageClass::Integer,
        }
    }
}

/// Column shape a codec's stored values require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageClass {
    FixedString(u32),
    BoundedString,
    TimestampTz,
    Integer,
}

impl StorageClass {
    pub fn accepts(self, column_type: &ColumnType) -> bool {
        match (self, column_type) {
            (StorageClass::FixedString(len), ColumnType::String(StringLen::N(n))) => *n == len,
            (StorageClass::FixedString(len), ColumnType::Char(Some(n))) => *n == len,
            (StorageClass::BoundedString, ColumnType::String(StringLen::N(_))) => true,
            (StorageClass::TimestampTz, ColumnType::TimestampWithTimeZone) => true,
            (StorageClass::Integer, ColumnType::Integer) => true,
            _ => false,
        }
    }
}
