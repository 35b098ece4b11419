//! Cipher envelope wire format
//!
//! Wire form: `base64(json{"ciphertext": base64(ct || tag), "nonce": base64(nonce)})`.
//! The outer encoding keeps the envelope a single scalar in any request or
//! response field.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use tracing::debug;

use crate::{CryptoError, CryptoResult, NONCE_SIZE, TAG_SIZE};

/// One encrypted message: ciphertext with its nonce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherEnvelope {
    /// Ciphertext followed by the 16-byte authentication tag
    pub ciphertext: Vec<u8>,
    /// Per-message nonce; not secret, never reused under one pair key
    pub nonce: [u8; NONCE_SIZE],
}

#[derive(Deserialize)]
struct EnvelopeRecord {
    ciphertext: String,
    nonce: String,
}

impl CipherEnvelope {
    /// Encode into the transport-safe text blob
    pub fn encode(&self) -> String {
        let record = serde_json::json!({
            "ciphertext": STANDARD.encode(&self.ciphertext),
            "nonce": STANDARD.encode(self.nonce),
        });
        STANDARD.encode(record.to_string())
    }

    /// Decode a text blob
    ///
    /// Any structural defect is reported as [`CryptoError::DecryptionFailed`]
    /// so that a corrupted envelope looks the same as a tampered one.
    pub fn decode(blob: &str) -> CryptoResult<Self> {
        let json = STANDARD.decode(blob.trim()).map_err(|e| {
            debug!("Envelope outer encoding invalid: {}", e);
            CryptoError::DecryptionFailed
        })?;
        let record: EnvelopeRecord = serde_json::from_slice(&json).map_err(|e| {
            debug!("Envelope record invalid: {}", e);
            CryptoError::DecryptionFailed
        })?;

        let ciphertext = STANDARD
            .decode(&record.ciphertext)
            .map_err(|_| CryptoError::DecryptionFailed)?;
        if ciphertext.len() < TAG_SIZE {
            return Err(CryptoError::DecryptionFailed);
        }

        let nonce: [u8; NONCE_SIZE] = STANDARD
            .decode(&record.nonce)
            .map_err(|_| CryptoError::DecryptionFailed)?
            .try_into()
            .map_err(|_| CryptoError::DecryptionFailed)?;

        Ok(Self { ciphertext, nonce })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CipherEnvelope {
        CipherEnvelope {
            ciphertext: (0..40u8).collect(),
            nonce: [9u8; NONCE_SIZE],
        }
    }

    #[test]
    fn test_encode_decode_exact() {
        let envelope = sample();
        let blob = envelope.encode();
        assert_eq!(CipherEnvelope::decode(&blob).unwrap(), envelope);
    }

    #[test]
    fn test_wire_format_is_double_encoded() {
        let blob = sample().encode();
        let json = STANDARD.decode(&blob).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();

        let nonce = STANDARD.decode(value["nonce"].as_str().unwrap()).unwrap();
        assert_eq!(nonce, vec![9u8; NONCE_SIZE]);
        let ciphertext = STANDARD
            .decode(value["ciphertext"].as_str().unwrap())
            .unwrap();
        assert_eq!(ciphertext, (0..40u8).collect::<Vec<_>>());
    }

    #[test]
    fn test_malformed_blobs_rejected() {
        let short_nonce = STANDARD.encode(
            serde_json::json!({
                "ciphertext": STANDARD.encode([0u8; 32]),
                "nonce": STANDARD.encode([0u8; 12]),
            })
            .to_string(),
        );
        let short_ciphertext = STANDARD.encode(
            serde_json::json!({
                "ciphertext": STANDARD.encode([0u8; 4]),
                "nonce": STANDARD.encode([0u8; NONCE_SIZE]),
            })
            .to_string(),
        );
        let missing_field = STANDARD.encode(r#"{"ciphertext":"AAAA"}"#);

        for blob in [
            "%%%not-base64%%%".to_string(),
            STANDARD.encode("not json"),
            missing_field,
            short_nonce,
            short_ciphertext,
        ] {
            assert!(matches!(
                CipherEnvelope::decode(&blob),
                Err(CryptoError::DecryptionFailed)
            ));
        }
    }
}
