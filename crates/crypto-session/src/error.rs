//! Crypto session error types

use shared_protocol::ErrorKind;
use thiserror::Error;

/// Session and channel operation error
///
/// Display text never depends on key material or on why authentication
/// failed.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Session not found")]
    SessionNotFound,

    #[error("Session has no buddy")]
    NotPaired,

    #[error("A session cannot be paired with itself")]
    SelfPairing,

    #[error("Decryption failed")]
    DecryptionFailed,

    #[error("Decrypted message is not valid UTF-8")]
    EncodingError,

    #[error("Secure random source unavailable")]
    EntropyUnavailable,

    #[error("Key exchange failed: {0}")]
    KeyExchange(&'static str),

    #[error("Encryption failed")]
    Encryption,
}

impl CryptoError {
    /// Stable tag for the transport layer
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SessionNotFound => ErrorKind::NotFound,
            Self::NotPaired => ErrorKind::NotPaired,
            Self::SelfPairing => ErrorKind::InvalidRequest,
            Self::DecryptionFailed => ErrorKind::DecryptionFailed,
            Self::EncodingError => ErrorKind::EncodingError,
            Self::EntropyUnavailable => ErrorKind::FatalEntropyFailure,
            Self::KeyExchange(_) | Self::Encryption => ErrorKind::Internal,
        }
    }
}

pub type CryptoResult<T> = Result<T, CryptoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_has_stable_kind() {
        let cases = [
            (CryptoError::SessionNotFound, ErrorKind::NotFound),
            (CryptoError::NotPaired, ErrorKind::NotPaired),
            (CryptoError::SelfPairing, ErrorKind::InvalidRequest),
            (CryptoError::DecryptionFailed, ErrorKind::DecryptionFailed),
            (CryptoError::EncodingError, ErrorKind::EncodingError),
            (CryptoError::EntropyUnavailable, ErrorKind::FatalEntropyFailure),
            (
                CryptoError::KeyExchange("non-contributory public key"),
                ErrorKind::Internal,
            ),
            (CryptoError::Encryption, ErrorKind::Internal),
        ];

        for (error, kind) in cases {
            assert_eq!(error.kind(), kind, "{error}");
        }
    }

    #[test]
    fn test_messages_are_fixed_text() {
        assert_eq!(CryptoError::DecryptionFailed.to_string(), "Decryption failed");
        assert_eq!(
            CryptoError::EntropyUnavailable.to_string(),
            "Secure random source unavailable"
        );
        assert_eq!(
            CryptoError::KeyExchange("non-contributory public key").to_string(),
            "Key exchange failed: non-contributory public key"
        );
        assert_eq!(CryptoError::Encryption.to_string(), "Encryption failed");
    }
}
