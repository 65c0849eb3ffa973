use thiserror::Error;

/// Error type for password operations.
///
/// A password that simply does not match is not an error; see
/// [`PasswordHasher::verify`](super::PasswordHasher::verify).
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is unusable: {0}")]
    VerificationFailed(String),
}
