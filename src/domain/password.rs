//! Password value object - Domain layer password handling.
//!
//! Stored hashes are the standard base64 encoding of a single SHA-256 digest
//! over the UTF-8 bytes of the password. There is no salt and no work factor;
//! the format is kept so existing account rows keep verifying.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha256};

/// Hash a plain text password into its stored representation.
pub fn hash_password(plain_text: &str) -> String {
    let digest = Sha256::digest(plain_text.as_bytes());
    STANDARD.encode(digest)
}

/// Password value object that handles hashing and verification.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    pub fn new(plain_text: &str) -> Self {
        Self {
            hash: hash_password(plain_text),
        }
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str) -> bool {
        hash_password(plain_text) == self.hash
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash_password("secret"), hash_password("secret"));
    }

    #[test]
    fn test_known_digest() {
        assert_eq!(
            hash_password("secret"),
            "K7gNU3sdo+OL0wNhqoVWhr3g6s1xYv72ol/pe/Unols="
        );
    }

    #[test]
    fn test_different_passwords_different_hashes() {
        let inputs = ["secret", "Secret", "secret ", "hunter2", "", "pässwörd"];
        for (i, a) in inputs.iter().enumerate() {
            for b in inputs.iter().skip(i + 1) {
                assert_ne!(hash_password(a), hash_password(b), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_password_hash_and_verify() {
        let password = Password::new("SecurePassword123!");

        assert!(password.verify("SecurePassword123!"));
        assert!(!password.verify("WrongPassword123"));
    }

    #[test]
    fn test_password_from_hash() {
        let hash = Password::new("TestPassword123").into_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify("TestPassword123"));
        assert_eq!(restored, Password::new("TestPassword123"));
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = Password::new("secret");
        let printed = format!("{:?}", password);
        assert!(!printed.contains(password.as_str()));
    }
}
