//! Argon2id password hashing

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::RngCore;
use std::sync::OnceLock;
use tracing::{error, warn};

use crate::common::ApiError;

#[cfg(not(test))]
fn hasher() -> Argon2<'static> {
    Argon2::default()
}

// Debug builds make default argon2 parameters slow; tests use minimal cost.
#[cfg(test)]
fn hasher() -> Argon2<'static> {
    let params = argon2::Params::new(8, 1, 1, None).expect("valid test argon2 params");
    Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
}

/// Hash a password into a PHC string
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let mut salt_bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| {
        error!(error = %e, "Failed to encode password salt");
        ApiError::InternalServer("password hashing failed".to_string())
    })?;

    hasher()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            error!(error = %e, "Failed to hash password");
            ApiError::InternalServer("password hashing failed".to_string())
        })
}

/// Check a password against a stored PHC string. Malformed hashes never verify.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(error = %e, "Stored password hash is malformed");
            return false;
        }
    };

    // parameters come from the PHC string itself
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Hash of a password nobody has, verified when the account does not exist
/// so unknown emails cost as much as wrong passwords.
fn dummy_hash() -> &'static str {
    static DUMMY: OnceLock<String> = OnceLock::new();
    DUMMY.get_or_init(|| hash_password("no-such-account").unwrap_or_default())
}

fn blocking_failed(e: tokio::task::JoinError) -> ApiError {
    error!(error = %e, "Password hashing task failed");
    ApiError::InternalServer("password hashing failed".to_string())
}

/// [`hash_password`] on the blocking pool
pub async fn hash_password_async(password: &str) -> Result<String, ApiError> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(blocking_failed)?
}

/// [`verify_password`] on the blocking pool. `None` stands for an unknown
/// account: a full verify still runs and the result is always `false`.
pub async fn verify_password_async(
    password: &str,
    stored_hash: Option<&str>,
) -> Result<bool, ApiError> {
    let password = password.to_string();
    let stored_hash = stored_hash.map(str::to_string);
    tokio::task::spawn_blocking(move || match stored_hash {
        Some(hash) => verify_password(&password, &hash),
        None => {
            verify_password(&password, dummy_hash());
            false
        }
    })
    .await
    .map_err(blocking_failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("secret123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("secret123", &hash));
        assert!(!verify_password("secret124", &hash));
    }

    #[test]
    fn test_salts_differ() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_dummy_hash_is_a_real_hash() {
        assert!(dummy_hash().starts_with("$argon2id$"));
        assert!(!verify_password("", dummy_hash()));
    }

    #[tokio::test]
    async fn test_async_verify() {
        let hash = hash_password_async("secret123").await.unwrap();
        assert!(verify_password_async("secret123", Some(&hash)).await.unwrap());
        assert!(!verify_password_async("secret124", Some(&hash)).await.unwrap());
        assert!(!verify_password_async("no-such-account", None).await.unwrap());
    }

    #[test]
    fn test_malformed_hash_does_not_verify() {
        assert!(!verify_password("anything", "not-a-phc-string"));
        assert!(!verify_password("anything", ""));
    }
}
