//! Single-slot holder for the invite currently awaiting an answer.

use crate::effects::SoundEffects;
use crate::invite::PendingInvite;
use crate::wire::SoundEffect;
use tracing::{debug, warn};

/// Holds at most one [`PendingInvite`]. A newer invite replaces the current one; nothing is
/// queued and nothing is kept once the slot is cleared.
pub struct PendingInviteStore<S> {
    slot: Option<PendingInvite>,
    sound: S,
}

impl<S: SoundEffects> PendingInviteStore<S> {
    pub fn new(sound: S) -> Self {
        Self { slot: None, sound }
    }

    /// Puts `invite` in the slot and plays the invite chime.
    ///
    /// Returns the invite it replaced, which will never be acted on.
    pub fn show(&mut self, invite: PendingInvite) -> Option<PendingInvite> {
        debug!(
            "Showing {} invite for room {} from {}",
            invite.kind, invite.room_id, invite.user.user_id
        );
        let superseded = self.slot.replace(invite);
        if let Some(old) = &superseded {
            warn!(
                "Invite for room {} superseded before it was answered",
                old.room_id
            );
        }
        self.sound.play_effect(SoundEffect::RoomInvite);
        superseded
    }

    pub fn read(&self) -> Option<&PendingInvite> {
        self.slot.as_ref()
    }

    /// Idempotent.
    pub fn clear(&mut self) {
        self.take();
    }

    /// Empties the slot and hands back what was in it.
    pub fn take(&mut self) -> Option<PendingInvite> {
        let taken = self.slot.take();
        if let Some(invite) = &taken {
            debug!("Cleared pending invite for room {}", invite.room_id);
        }
        taken
    }

    #[cfg(test)]
    fn sound(&self) -> &S {
        &self.sound
    }
}
