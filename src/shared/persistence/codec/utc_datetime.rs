use chrono::{DateTime, FixedOffset, Utc};

use super::{Codec, CodecError, CodecKind};

/// Normalizes timestamps to UTC before they are written.
///
/// Only offset-carrying values are accepted: the value type is
/// `DateTime<FixedOffset>`, so a naive timestamp cannot reach the codec and
/// text without an offset fails to parse upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcDateTimeCodec;

impl UtcDateTimeCodec {
    pub fn to_utc(value: DateTime<FixedOffset>) -> DateTime<Utc> {
        value.with_timezone(&Utc)
    }
}

impl Codec for UtcDateTimeCodec {
    type Value = DateTime<FixedOffset>;
    type Stored = DateTime<FixedOffset>;

    const KIND: CodecKind = CodecKind::UtcDateTime;

    fn encode(&self, value: DateTime<FixedOffset>) -> Result<DateTime<FixedOffset>, CodecError> {
        Ok(Self::to_utc(value).fixed_offset())
    }

    fn decode(&self, stored: DateTime<FixedOffset>) -> Result<DateTime<FixedOffset>, CodecError> {
        Ok(stored)
    }
}
