//! Process-wide session table
//!
//! One `RwLock` guards the whole table. Every read-modify-write on an entry
//! (create, pair both sides, end) happens under a single write guard, and no
//! I/O is performed while it is held.

use std::collections::HashMap;

use parking_lot::RwLock;
use shared_protocol::{SessionId, PUBLIC_KEY_SIZE, SESSION_ID_BYTES};
use tracing::{debug, info, warn};

use crate::keys::fill_random;
use crate::{CryptoError, CryptoResult, KeyPair};

/// Buddy link held by one side of a pairing
#[derive(Debug, Clone)]
pub(crate) struct Buddy {
    pub(crate) session_id: SessionId,
    pub(crate) public_key: [u8; PUBLIC_KEY_SIZE],
}

/// A live session
///
/// The key pair is fixed at creation; only the buddy link changes.
#[derive(Debug)]
pub(crate) struct SessionEntry {
    pub(crate) keys: KeyPair,
    pub(crate) buddy: Option<Buddy>,
}

/// Public view of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub session_id: SessionId,
    pub public_key: [u8; PUBLIC_KEY_SIZE],
    /// Public key of the current buddy, if paired
    pub buddy_public_key: Option<[u8; PUBLIC_KEY_SIZE]>,
}

/// Table of live sessions keyed by identifier
#[derive(Debug, Default)]
pub struct SessionStore {
    pub(crate) sessions: RwLock<HashMap<SessionId, SessionEntry>>,
}

fn mint_session_id() -> CryptoResult<SessionId> {
    let mut bytes = [0u8; SESSION_ID_BYTES];
    fill_random(&mut bytes)?;
    Ok(SessionId::from_bytes(&bytes))
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with a fresh key pair
    ///
    /// Returns the new identifier and public key. The private key stays in
    /// the table.
    pub fn create(&self) -> CryptoResult<(SessionId, [u8; PUBLIC_KEY_SIZE])> {
        let keys = KeyPair::generate()?;
        let public_key = keys.public_key_bytes();

        let mut sessions = self.sessions.write();
        let session_id = loop {
            let candidate = mint_session_id()?;
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
            warn!("Session ID collision, regenerating");
        };
        sessions.insert(session_id.clone(), SessionEntry { keys, buddy: None });
        drop(sessions);

        info!("Session started: {}", session_id);
        Ok((session_id, public_key))
    }

    /// Look up the public view of a session
    pub fn lookup(&self, session_id: &SessionId) -> CryptoResult<SessionInfo> {
        let sessions = self.sessions.read();
        let entry = sessions
            .get(session_id)
            .ok_or(CryptoError::SessionNotFound)?;
        Ok(SessionInfo {
            session_id: session_id.clone(),
            public_key: entry.keys.public_key_bytes(),
            buddy_public_key: entry.buddy.as_ref().map(|b| b.public_key),
        })
    }

    /// End a session, discarding its key pair
    ///
    /// The removed entry is dropped before returning, which zeroizes the
    /// private key. Every link still naming the ended session is cleared in
    /// the same write guard, so no session stays paired with a removed one.
    pub fn end(&self, session_id: &SessionId) -> CryptoResult<()> {
        let mut sessions = self.sessions.write();
        let entry = sessions
            .remove(session_id)
            .ok_or(CryptoError::SessionNotFound)?;

        let mut unlinked = 0;
        for other in sessions.values_mut() {
            if other
                .buddy
                .as_ref()
                .is_some_and(|buddy| &buddy.session_id == session_id)
            {
                other.buddy = None;
                unlinked += 1;
            }
        }
        drop(sessions);
        drop(entry);

        if unlinked > 0 {
            debug!("Cleared {} buddy links to {}", unlinked, session_id);
        }
        info!("Session ended: {}", session_id);
        Ok(())
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    /// Drop every session (shutdown)
    pub fn clear(&self) {
        let drained: Vec<_> = self.sessions.write().drain().collect();
        if !drained.is_empty() {
            info!("Discarded {} live sessions", drained.len());
        }
    }

    /// Run `f` against a live entry under the read guard
    pub(crate) fn with_session<R>(
        &self,
        session_id: &SessionId,
        f: impl FnOnce(&SessionEntry) -> CryptoResult<R>,
    ) -> CryptoResult<R> {
        let sessions = self.sessions.read();
        let entry = sessions
            .get(session_id)
            .ok_or(CryptoError::SessionNotFound)?;
        f(entry)
    }
}
