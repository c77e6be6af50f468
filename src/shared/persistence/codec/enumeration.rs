use std::fmt;
use std::marker::PhantomData;

use super::{Codec, CodecError, CodecKind};

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for String {}
}

/// Column widths an enumeration may be stored as: `i32` for integer-backed
/// enums and `String` for string-backed ones.
pub trait EnumStorage: sealed::Sealed + Clone + fmt::Display + Send + Sync {
    const KIND: CodecKind;
}

impl EnumStorage for i32 {
    const KIND: CodecKind = CodecKind::IntEnum;
}

impl EnumStorage for String {
    const KIND: CodecKind = CodecKind::StrEnum;
}

/// An enumeration with a fixed raw value per member.
pub trait StoredEnum: Sized + Send + Sync {
    type Raw: EnumStorage;

    /// Used in decode errors.
    const NAME: &'static str;

    fn to_raw(&self) -> Self::Raw;

    fn from_raw(raw: &Self::Raw) -> Option<Self>;
}

/// Stores `E` as its raw value. Unknown raw values fail to decode instead of
/// falling back to a default member.
pub struct EnumCodec<E> {
    _marker: PhantomData<fn() -> E>,
}

impl<E> EnumCodec<E> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<E> Default for EnumCodec<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EnumCodec<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EnumCodec<E> {}

impl<E> fmt::Debug for EnumCodec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnumCodec<{}>", std::any::type_name::<E>())
    }
}

impl<E: StoredEnum> Codec for EnumCodec<E> {
    type Value = E;
    type Stored = E::Raw;

    const KIND: CodecKind = <E::Raw as EnumStorage>::KIND;

    fn encode(&self, value: E) -> Result<E::Raw, CodecError> {
        Ok(value.to_raw())
    }

    fn decode(&self, stored: E::Raw) -> Result<E, CodecError> {
        E::from_raw(&stored).ok_or_else(|| CodecError::Decode {
            target: E::NAME,
            raw: stored.to_string(),
        })
    }
}
