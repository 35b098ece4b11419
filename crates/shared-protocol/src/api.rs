//! Request and response records for the session service

use serde::{Deserialize, Serialize};

use crate::SessionId;

/// Stable error tag reported to clients
///
/// Tags never carry secret-dependent detail; a failed decryption is
/// `DecryptionFailed` whatever the underlying cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Unknown session identifier
    NotFound,
    /// Operation needs a buddy link that is absent
    NotPaired,
    /// Authentication failed or the envelope is unreadable
    DecryptionFailed,
    /// Authenticated plaintext is not valid UTF-8
    EncodingError,
    /// Secure random source unavailable
    FatalEntropyFailure,
    /// Request is well-formed but not acceptable
    InvalidRequest,
    /// Anything else
    Internal,
}

impl ErrorKind {
    /// Wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::NotPaired => "not_paired",
            Self::DecryptionFailed => "decryption_failed",
            Self::EncodingError => "encoding_error",
            Self::FatalEntropyFailure => "fatal_entropy_failure",
            Self::InvalidRequest => "invalid_request",
            Self::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error body returned by every failing operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorKind,
    pub message: String,
}

/// StartSession response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartSessionResponse {
    pub session_id: SessionId,
    /// Standard base64 X25519 public key
    pub public_key: String,
}

/// EndSession request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndSessionRequest {
    pub session_id: String,
}

/// Lifecycle status reported by EndSession
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Ended,
}

/// EndSession response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndSessionResponse {
    pub status: SessionStatus,
    pub session_id: SessionId,
}

/// PairSessions request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairSessionsRequest {
    pub session_id_a: String,
    pub session_id_b: String,
}

/// PairSessions response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairSessionsResponse {
    pub public_key_a: String,
    pub public_key_b: String,
}

/// Encrypt request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptRequest {
    pub session_id: String,
    pub plaintext: String,
}

/// Encrypt response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptResponse {
    /// Opaque envelope blob
    pub envelope: String,
}

/// Decrypt request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptRequest {
    pub session_id: String,
    pub envelope: String,
}

/// Decrypt response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptResponse {
    pub plaintext: String,
}

/// Service statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub sessions: usize,
}
