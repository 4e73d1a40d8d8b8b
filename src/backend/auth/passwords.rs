/**
 * Password Hashing
 *
 * Thin wrapper over bcrypt. A hash is the self-describing modular-crypt
 * string (`$2b$<cost>$<22-char salt><31-char digest>`), so verification
 * needs nothing but the stored value.
 *
 * bcrypt only reads the first 72 bytes of its NUL-terminated input, which
 * leaves room for 71 bytes of password. Longer passwords are refused with
 * `BcryptError::Truncation` instead of being cut short, so two passwords
 * sharing a long prefix never match each other.
 */

use bcrypt::{non_truncating_hash, non_truncating_verify, BcryptError};

/// Longest password bcrypt can hash without truncation
pub const MAX_PASSWORD_BYTES: usize = 71;

/// Hash a password with a fresh random salt
///
/// # Arguments
/// * `password` - Plaintext password
/// * `cost` - bcrypt work factor (4..=31)
///
/// # Returns
/// Self-describing bcrypt hash string, or `BcryptError::Truncation` when
/// the password is longer than `MAX_PASSWORD_BYTES`
pub fn hash_password(password: &str, cost: u32) -> Result<String, BcryptError> {
    non_truncating_hash(password, cost)
}

/// Check a password against a stored hash
///
/// Mismatches, malformed hashes and over-long passwords all yield `false`.
/// The digest comparison inside bcrypt runs in constant time.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    non_truncating_verify(password, password_hash).unwrap_or_else(|e| {
        tracing::debug!("Password hash could not be checked: {}", e);
        false
    })
}
