//! Buddy pairing

use shared_protocol::{SessionId, PUBLIC_KEY_SIZE};
use tracing::{info, warn};

use crate::store::Buddy;
use crate::{CryptoError, CryptoResult, SessionStore};

impl SessionStore {
    /// Pair two sessions as buddies
    ///
    /// Both links are written under one write guard after re-checking that
    /// both sessions are still live, so a concurrent `end` can never leave one
    /// side linked to a removed session. Prior links on either side are
    /// overwritten; the former buddies keep their own links.
    ///
    /// Returns the public keys of `a` and `b`.
    pub fn pair(
        &self,
        a: &SessionId,
        b: &SessionId,
    ) -> CryptoResult<([u8; PUBLIC_KEY_SIZE], [u8; PUBLIC_KEY_SIZE])> {
        if a == b {
            warn!("Rejected self-pairing of {}", a);
            return Err(CryptoError::SelfPairing);
        }

        let mut sessions = self.sessions.write();

        let public_a = sessions
            .get(a)
            .map(|entry| entry.keys.public_key_bytes())
            .ok_or(CryptoError::SessionNotFound)?;
        let public_b = sessions
            .get(b)
            .map(|entry| entry.keys.public_key_bytes())
            .ok_or(CryptoError::SessionNotFound)?;

        for (own, buddy_id, buddy_key) in [(a, b, public_b), (b, a, public_a)] {
            if let Some(entry) = sessions.get_mut(own) {
                entry.buddy = Some(Buddy {
                    session_id: buddy_id.clone(),
                    public_key: buddy_key,
                });
            }
        }
        drop(sessions);

        info!("Sessions paired: {} <-> {}", a, b);
        Ok((public_a, public_b))
    }
}
