use thiserror::Error;

use crate::radix64::DecodeError;

/// Everything that can go wrong while hashing or verifying.
///
/// A password that simply does not match is not an error: [`crate::verify`]
/// reports it as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BCryptError {
    #[error("Invalid cost: {0} is outside the allowed range 4..=31")]
    InvalidCost(u32),
    #[error("Malformed hash: {0}")]
    MalformedHash(String),
    #[error("Unsupported version: {0:?}")]
    UnsupportedVersion(String),
    #[error("Salt generation failed: {0}")]
    SaltGenerationFailed(String),
}

impl From<DecodeError> for BCryptError {
    fn from(err: DecodeError) -> Self {
        BCryptError::MalformedHash(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BCryptError>;
