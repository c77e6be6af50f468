use super::{Codec, CodecError, CodecKind};

/// Stores strings upper-cased. Applied on reads too, so rows written through
/// other paths still come back canonical.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpperCaseCodec;

impl Codec for UpperCaseCodec {
    type Value = String;
    type Stored = String;

    const KIND: CodecKind = CodecKind::UpperCase;

    fn encode(&self, value: String) -> Result<String, CodecError> {
        Ok(value.to_uppercase())
    }

    fn decode(&self, stored: String) -> Result<String, CodecError> {
        Ok(stored.to_uppercase())
    }
}

/// Lower-case counterpart of [`UpperCaseCodec`]. Used for e-mail addresses so
/// uniqueness and lookups are case-insensitive without a database collation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerCaseCodec;

impl Codec for LowerCaseCodec {
    type Value = String;
    type Stored = String;

    const KIND: CodecKind = CodecKind::LowerCase;

    fn encode(&self, value: String) -> Result<String, CodecError> {
        Ok(value.to_lowercase())
    }

    fn decode(&self, stored: String) -> Result<String, CodecError> {
        Ok(stored.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [&str; 6] = [
        "Jane@Example.com",
        "already lower",
        "ALREADY UPPER",
        "",
        "Straße",
        "ÉCOLE-École",
    ];

    #[test]
    fn test_lower_case_round_trip_is_lowercase() {
        let codec = LowerCaseCodec;

        for sample in SAMPLES {
            let stored = codec.encode(sample.to_string()).unwrap();
            let decoded = codec.decode(stored).unwrap();

            assert_eq!(decoded, sample.to_lowercase());
        }
    }

    #[test]
    fn test_upper_case_round_trip_is_uppercase() {
        let codec = UpperCaseCodec;

        for sample in SAMPLES {
            let stored = codec.encode(sample.to_string()).unwrap();
            let decoded = codec.decode(stored).unwrap();

            assert_eq!(decoded, sample.to_uppercase());
        }
    }

    #[test]
    fn test_encoding_is_idempotent() {
        for sample in SAMPLES {
            let lower = LowerCaseCodec.encode(sample.to_string()).unwrap();
            assert_eq!(LowerCaseCodec.encode(lower.clone()).unwrap(), lower);

            let upper = UpperCaseCodec.encode(sample.to_string()).unwrap();
            assert_eq!(UpperCaseCodec.encode(upper.clone()).unwrap(), upper);
        }
    }

    #[test]
    fn test_decode_canonicalizes_rows_written_elsewhere() {
        let decoded = LowerCaseCodec.decode("John.Doe@EXAMPLE.org".to_string()).unwrap();

        assert_eq!(decoded, "john.doe@example.org");
    }

    #[test]
    fn test_null_passes_through() {
        assert_eq!(UpperCaseCodec.encode_nullable(None).unwrap(), None);
        assert_eq!(UpperCaseCodec.decode_nullable(None).unwrap(), None);
    }
}
