//! Salted password hashing.
//!
//! Hashes are stored as `base64(salt)$base64(sha256(salt || password))`.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::{AuthError, AuthResult};

const SALT_LEN: usize = 16;
const HASH_SEPARATOR: char = '$';

/// Hashes a password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut rng = rand::rng();
    let salt: Vec<u8> = (0..SALT_LEN).map(|_| rng.random::<u8>()).collect();
    let digest = digest_with_salt(&salt, password);

    format!(
        "{}{}{}",
        URL_SAFE_NO_PAD.encode(&salt),
        HASH_SEPARATOR,
        URL_SAFE_NO_PAD.encode(digest)
    )
}

/// Verifies a password against a stored hash.
pub fn verify_password(password: &str, stored: &str) -> AuthResult<bool> {
    let (salt_b64, digest_b64) = stored
        .split_once(HASH_SEPARATOR)
        .ok_or(AuthError::MalformedHash)?;

    let salt = URL_SAFE_NO_PAD
        .decode(salt_b64)
        .map_err(|_| AuthError::MalformedHash)?;
    let expected = URL_SAFE_NO_PAD
        .decode(digest_b64)
        .map_err(|_| AuthError::MalformedHash)?;

    Ok(digest_with_salt(&salt, password) == expected)
}

fn digest_with_salt(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}
