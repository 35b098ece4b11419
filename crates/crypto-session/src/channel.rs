//! Buddy channel: X25519 + HKDF-SHA256 + XChaCha20Poly1305

use chacha20poly1305::{
    aead::{Aead, KeyInit},
    Key, XChaCha20Poly1305, XNonce,
};
use hkdf::Hkdf;
use sha2::Sha256;
use shared_protocol::{SessionId, PUBLIC_KEY_SIZE};
use tracing::debug;
use zeroize::Zeroizing;

use crate::keys::fill_random;
use crate::{
    CipherEnvelope, CryptoError, CryptoResult, KeyPair, SessionStore, NONCE_SIZE, PAIR_KEY_SIZE,
};

/// HKDF info label binding derived keys to this protocol
const PAIR_KEY_INFO: &[u8] = b"buddybox/pair-key/v1";

/// Authenticated cipher shared by two buddies
///
/// Derivation is deterministic for a key pair and symmetric: both buddies
/// derive the same key because `DH(a, B) == DH(b, A)`.
pub struct SecureChannel {
    cipher: XChaCha20Poly1305,
}

impl SecureChannel {
    /// Derive the channel from our key pair and the buddy's public key
    pub fn derive(
        keys: &KeyPair,
        buddy_public: &[u8; PUBLIC_KEY_SIZE],
    ) -> CryptoResult<Self> {
        let shared = keys.diffie_hellman(buddy_public)?;

        let mut key = Zeroizing::new([0u8; PAIR_KEY_SIZE]);
        Hkdf::<Sha256>::new(None, shared.as_bytes())
            .expand(PAIR_KEY_INFO, &mut key[..])
            .map_err(|_| CryptoError::KeyExchange("key derivation failed"))?;

        let cipher = XChaCha20Poly1305::new(Key::from_slice(&key[..]));
        Ok(Self { cipher })
    }

    /// Encrypt under a fresh random nonce
    pub fn seal(&self, plaintext: &[u8]) -> CryptoResult<CipherEnvelope> {
        let mut nonce = [0u8; NONCE_SIZE];
        fill_random(&mut nonce)?;

        let ciphertext = self
            .cipher
            .encrypt(XNonce::from_slice(&nonce), plaintext)
            .map_err(|_| CryptoError::Encryption)?;

        Ok(CipherEnvelope { ciphertext, nonce })
    }

    /// Verify and decrypt an envelope
    ///
    /// Every authentication failure is the same [`CryptoError::DecryptionFailed`].
    pub fn open(&self, envelope: &CipherEnvelope) -> CryptoResult<Vec<u8>> {
        self.cipher
            .decrypt(
                XNonce::from_slice(&envelope.nonce),
                envelope.ciphertext.as_slice(),
            )
            .map_err(|_| CryptoError::DecryptionFailed)
    }
}

impl SessionStore {
    /// Derive the channel between a session and its current buddy
    pub fn channel(&self, session_id: &SessionId) -> CryptoResult<SecureChannel> {
        self.with_session(session_id, |entry| {
            let buddy = entry.buddy.as_ref().ok_or(CryptoError::NotPaired)?;
            SecureChannel::derive(&entry.keys, &buddy.public_key)
        })
    }

    /// Encrypt UTF-8 text from a session to its buddy
    pub fn encrypt(&self, session_id: &SessionId, plaintext: &str) -> CryptoResult<CipherEnvelope> {
        let envelope = self.channel(session_id)?.seal(plaintext.as_bytes())?;
        debug!(
            "Encrypted {} bytes for session {}",
            plaintext.len(),
            session_id
        );
        Ok(envelope)
    }

    /// Decrypt an envelope sent to a session by its buddy
    pub fn decrypt(&self, session_id: &SessionId, envelope: &CipherEnvelope) -> CryptoResult<String> {
        let plaintext = self.channel(session_id)?.open(envelope).inspect_err(|_| {
            debug!("Decryption failed for session {}", session_id);
        })?;
        String::from_utf8(plaintext).map_err(|_| CryptoError::EncodingError)
    }
}
