use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

use crate::config::HashingConfig;
use crate::data::error::Error;

/// Length of an encoded salt: 16 random bytes in unpadded B64.
pub const SALT_LEN: usize = 22;

#[derive(Clone)]
pub struct Hasher {
    argon2: Argon2<'static>,
}

impl Hasher {
    pub fn new(config: &HashingConfig) -> Result<Self, Error> {
        let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
            .map_err(|e| Error::Config(format!("invalid password hashing cost: {}", e)))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    pub fn salt_password(&self, password: &str, salt: &str) -> Result<String, Error> {
        let salt = SaltString::from_b64(salt)?;
        let hash = self.argon2.hash_password(password.as_bytes(), &salt)?;

        Ok(hash.to_string())
    }

    /// Re-derives `hash` from `password`. The digest comparison inside
    /// `verify_password` is constant-time, and the cost is taken from the
    /// stored hash rather than from the current configuration.
    pub fn verify(&self, password: &str, salt: &str, hash: &str) -> bool {
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!("unreadable password hash: {}", e);
                return false;
            }
        };

        if parsed.salt.map(|s| s.as_str()) != Some(salt) {
            return false;
        }

        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

pub fn generate_salt() -> String {
    SaltString::generate(&mut rand::thread_rng())
        .as_str()
        .to_owned()
}
