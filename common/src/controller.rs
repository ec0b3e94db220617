//! Drives the invite dialog: receive, confirm, cancel.

use crate::action::ConfirmAction;
use crate::copy::DialogView;
use crate::effects::{Navigator, SoundEffects, Transport, Translator};
use crate::error::InviteError;
use crate::invite::{InviteEvent, PendingInvite};
use crate::store::PendingInviteStore;
use tracing::debug;

/// Owns the pending-invite store and the collaborators a confirmed invite is run against.
///
/// Whoever drives the event loop owns one of these and calls into it in arrival order.
pub struct InviteController<S, T, N> {
    store: PendingInviteStore<S>,
    transport: T,
    navigator: N,
}

impl<S, T, N> InviteController<S, T, N>
where
    S: SoundEffects,
    T: Transport,
    N: Navigator,
{
    pub fn new(sound: S, transport: T, navigator: N) -> Self {
        Self {
            store: PendingInviteStore::new(sound),
            transport,
            navigator,
        }
    }

    /// Resolves the confirm action and makes the invite the pending one.
    ///
    /// Returns the previously pending invite if this one replaced it.
    pub fn on_invite_received(&mut self, event: InviteEvent) -> Option<PendingInvite> {
        self.store.show(PendingInvite::new(event))
    }

    /// Runs the pending invite's action. Does nothing when nothing is pending.
    ///
    /// The slot is emptied before the action runs and stays empty if the action fails.
    pub fn on_confirm(&mut self) -> Result<Option<ConfirmAction>, InviteError> {
        let Some(invite) = self.store.take() else {
            debug!("Confirm with no pending invite");
            return Ok(None);
        };

        invite.action.run(&mut self.transport, &mut self.navigator)?;
        Ok(Some(invite.action))
    }

    pub fn on_cancel(&mut self) -> Option<PendingInvite> {
        let dismissed = self.store.take();
        if let Some(invite) = &dismissed {
            debug!("Cancelled invite for room {}", invite.room_id);
        }
        dismissed
    }

    pub fn pending(&self) -> Option<&PendingInvite> {
        self.store.read()
    }

    pub fn dialog(&self, translator: &dyn Translator) -> Option<DialogView> {
        self.pending().map(|invite| DialogView::for_invite(invite, translator))
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}
