//! Crypto Session - ephemeral buddy encryption for Buddybox
//!
//! Each session owns a short-lived X25519 keypair. Two sessions are paired
//! as buddies, after which either side can encrypt to or decrypt from the
//! other with XChaCha20-Poly1305 under an HKDF-derived pair key.

mod channel;
mod envelope;
mod error;
mod keys;
mod pairing;
mod store;

pub use channel::*;
pub use envelope::*;
pub use error::*;
pub use keys::*;
pub use store::*;

pub use shared_protocol::{PUBLIC_KEY_SIZE, SessionId};

/// Nonce size for XChaCha20Poly1305 (192 bits / 24 bytes)
pub const NONCE_SIZE: usize = 24;

/// Authentication tag size (128 bits / 16 bytes)
pub const TAG_SIZE: usize = 16;

/// Derived pair key size (256 bits / 32 bytes)
pub const PAIR_KEY_SIZE: usize = 32;
