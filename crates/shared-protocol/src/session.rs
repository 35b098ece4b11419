//! Session identifiers and key encodings

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::{ProtocolError, ProtocolResult, PUBLIC_KEY_SIZE, SESSION_ID_BYTES};

/// Opaque session identifier
///
/// URL-safe base64 (no padding) over [`SESSION_ID_BYTES`] random bytes,
/// 22 characters on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Build an identifier from freshly drawn random bytes
    pub fn from_bytes(bytes: &[u8; SESSION_ID_BYTES]) -> Self {
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    /// Parse an identifier received from a client
    pub fn parse(s: &str) -> ProtocolResult<Self> {
        let trimmed = s.trim();
        let bytes = URL_SAFE_NO_PAD
            .decode(trimmed)
            .map_err(|_| ProtocolError::InvalidSessionId)?;
        if bytes.len() != SESSION_ID_BYTES {
            return Err(ProtocolError::InvalidSessionId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Encode a public key as standard base64
pub fn encode_public_key(key: &[u8; PUBLIC_KEY_SIZE]) -> String {
    STANDARD.encode(key)
}
