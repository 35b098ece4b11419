//! Shared Protocol Definitions for Buddybox
//!
//! This crate contains the wire vocabulary shared between the session core
//! and the HTTP service: session identifiers, key encodings, request and
//! response records, and the stable error kinds.

mod api;
mod error;
mod session;

pub use api::*;
pub use error::*;
pub use session::*;

/// Random bytes behind a session identifier (128 bits)
pub const SESSION_ID_BYTES: usize = 16;

/// X25519 public key size (256 bits / 32 bytes)
pub const PUBLIC_KEY_SIZE: usize = 32;
