//! Ephemeral X25519 key pairs

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::error;
use x25519_dalek::{PublicKey, SharedSecret, StaticSecret};
use zeroize::Zeroizing;

use crate::{CryptoError, CryptoResult, PUBLIC_KEY_SIZE};

/// Fill `buf` from the OS CSPRNG
///
/// There is no fallback source: if the OS cannot supply entropy the
/// operation fails with [`CryptoError::EntropyUnavailable`].
pub(crate) fn fill_random(buf: &mut [u8]) -> CryptoResult<()> {
    OsRng.try_fill_bytes(buf).map_err(|e| {
        error!("OS random source failed: {}", e);
        CryptoError::EntropyUnavailable
    })
}

/// Session key pair
///
/// The secret half is zeroized when the pair is dropped and is never
/// exposed outside this crate.
pub struct KeyPair {
    secret: StaticSecret,
    public: PublicKey,
}

impl KeyPair {
    /// Generate a fresh key pair from the OS CSPRNG
    pub fn generate() -> CryptoResult<Self> {
        let mut seed = Zeroizing::new([0u8; 32]);
        fill_random(&mut seed[..])?;
        let secret = StaticSecret::from(*seed);
        let public = PublicKey::from(&secret);
        Ok(Self { secret, public })
    }

    /// Get the public key bytes
    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        *self.public.as_bytes()
    }

    /// Perform Diffie-Hellman with a buddy's public key
    ///
    /// Rejects low-order points, which would yield an all-zero secret.
    pub(crate) fn diffie_hellman(
        &self,
        their_public: &[u8; PUBLIC_KEY_SIZE],
    ) -> CryptoResult<SharedSecret> {
        let their_public = PublicKey::from(*their_public);
        let shared = self.secret.diffie_hellman(&their_public);
        if !shared.was_contributory() {
            return Err(CryptoError::KeyExchange("non-contributory public key"));
        }
        Ok(shared)
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_fresh() {
        let a = KeyPair::generate().unwrap();
        let b = KeyPair::generate().unwrap();
        assert_ne!(a.public_key_bytes(), b.public_key_bytes());
    }

    #[test]
    fn test_diffie_hellman_is_symmetric() {
        let a = KeyPair::generate().unwrap();
        let b = KeyPair::generate().unwrap();

        let ab = a.diffie_hellman(&b.public_key_bytes()).unwrap();
        let ba = b.diffie_hellman(&a.public_key_bytes()).unwrap();
        assert_eq!(ab.as_bytes(), ba.as_bytes());
    }

    #[test]
    fn test_low_order_point_rejected() {
        let a = KeyPair::generate().unwrap();
        let result = a.diffie_hellman(&[0u8; PUBLIC_KEY_SIZE]);
        assert!(matches!(result, Err(CryptoError::KeyExchange(_))));
    }

    #[test]
    fn test_debug_hides_secret() {
        let a = KeyPair::generate().unwrap();
        let rendered = format!("{:?}", a);
        assert!(rendered.contains("public"));
        assert!(!rendered.contains("secret"));
    }
}
