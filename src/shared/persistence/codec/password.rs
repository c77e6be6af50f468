use std::sync::{Arc, OnceLock};

use argon2::{
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;
use tracing::{debug, error};

use super::{Codec, CodecError, CodecKind};

/// Width of the password column. Argon2id PHC strings stay well below this for
/// any realistic parameter set.
pub const PASSWORD_HASH_LEN: u32 = 128;

const DECOY_PLAINTEXT: &str = "decoy-password-for-unknown-accounts";

/// One-way Argon2id codec. `encode` hashes, `decode` is the identity: a stored
/// hash is never turned back into plaintext.
#[derive(Clone)]
pub struct PasswordCodec {
    params: Params,
    decoy: Arc<OnceLock<String>>,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Default for PasswordCodec {
    fn default() -> Self {
        Self::new(Params::default())
    }
}

impl PasswordCodec {
    pub fn new(params: Params) -> Self {
        Self {
            params,
            decoy: Arc::new(OnceLock::new()),
            #[cfg(test)]
            salt_override: None,
        }
    }

    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, CodecError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| CodecError::Params(e.to_string()))?;

        Ok(Self::new(params))
    }

    /// Cheap parameters so test suites do not spend seconds per hash.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::with_params(1024, 1, 1).expect("valid test params")
    }

    #[cfg(test)]
    pub fn with_fixed_salt(salt: &str) -> Self {
        let mut codec = Self::for_tests();
        codec.salt_override = Some(SaltString::from_b64(salt).expect("Invalid salt"));
        codec
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    fn hasher(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    fn salt(&self) -> SaltString {
        #[cfg(test)]
        {
            if let Some(salt) = &self.salt_override {
                return salt.clone();
            }
        }

        SaltString::generate(&mut OsRng)
    }

    /// Checks `plaintext` against a stored PHC string using the algorithm,
    /// parameters and salt embedded in it. Anything that is not a well-formed
    /// hash for the given password yields `false`.
    pub fn verify(&self, plaintext: &str, stored: &str) -> bool {
        let parsed = match PasswordHash::new(stored) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(error = %e, "Stored password hash is not a PHC string");
                return false;
            }
        };

        match Argon2::default().verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => true,
            Err(argon2::password_hash::Error::Password) => false,
            Err(e) => {
                debug!(error = %e, "Stored password hash could not be re-derived");
                false
            }
        }
    }

    /// Hash of a fixed string, computed once. Verifying against it lets
    /// callers spend the same effort for unknown accounts as for real ones.
    fn decoy_hash(&self) -> &str {
        self.decoy.get_or_init(|| {
            self.encode(DECOY_PLAINTEXT.to_string())
                .unwrap_or_default()
        })
    }

    pub async fn encode_in_background(&self, plaintext: String) -> Result<String, CodecError> {
        let codec = self.clone();

        tokio::task::spawn_blocking(move || codec.encode(plaintext))
            .await
            .map_err(|_| CodecError::TaskFailed)?
    }

    /// Runs [`verify`](Self::verify) on the blocking pool. With no stored
    /// hash the decoy is verified instead and the result is always `false`.
    pub async fn verify_in_background(&self, plaintext: String, stored: Option<String>) -> bool {
        let codec = self.clone();

        let result = tokio::task::spawn_blocking(move || match stored {
            Some(hash) => codec.verify(&plaintext, &hash),
            None => {
                let _ = codec.verify(&plaintext, codec.decoy_hash());
                false
            }
        })
        .await;

        match result {
            Ok(matched) => matched,
            Err(e) => {
                error!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}

impl Codec for PasswordCodec {
    type Value = String;
    type Stored = String;

    const KIND: CodecKind = CodecKind::Password;

    fn encode(&self, plaintext: String) -> Result<String, CodecError> {
        let salt = self.salt();

        self.hasher()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| CodecError::Hash(e.to_string()))
    }

    fn decode(&self, stored: String) -> Result<String, CodecError> {
        Ok(stored)
    }
}
