//! Display copy for the invite dialog and the default English catalog.

use crate::effects::Translator;
use crate::invite::{InviteKind, PendingInvite};
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

pub const ROOM_INVITE_FROM: &str = "components.modals.invitedToJoinRoomModal.roomInviteFrom";
pub const INVITE_RECEIVED: &str = "components.modals.invitedToJoinRoomModal.inviteReceived";
pub const NEW_ROOM_CREATED: &str = "components.modals.invitedToJoinRoomModal.newRoomCreated";
pub const JUST_STARTED: &str = "components.modals.invitedToJoinRoomModal.justStarted";
pub const SOMEONE_JOINED_WAITING_ROOM: &str =
    "components.modals.invitedToJoinRoomModal.someoneJoinedWaitingRoom";
pub const JOINED_WAITING_ROOM: &str = "components.modals.invitedToJoinRoomModal.joinedWaitingRoom";
pub const CONFIRM_LABEL: &str = "common.yes";
pub const CANCEL_LABEL: &str = "common.cancel";

/// Translation keys for the header and body of a dialog of the given kind.
pub fn copy_keys(kind: InviteKind) -> (&'static str, &'static str) {
    match kind {
        InviteKind::Invite => (ROOM_INVITE_FROM, INVITE_RECEIVED),
        InviteKind::FollowedUserCreatedRoom => (NEW_ROOM_CREATED, JUST_STARTED),
        InviteKind::WaitingRoomJoin => (SOMEONE_JOINED_WAITING_ROOM, JOINED_WAITING_ROOM),
    }
}

/// Everything a presentation layer needs to draw the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogView {
    pub kind: InviteKind,
    pub header: String,
    pub body: String,
    pub room_name: String,
    pub display_name: String,
    /// `@username`
    pub handle: String,
    pub avatar_url: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl DialogView {
    pub fn for_invite(invite: &PendingInvite, translator: &dyn Translator) -> Self {
        let (header_key, body_key) = copy_keys(invite.kind);
        DialogView {
            kind: invite.kind,
            header: translator.translate(header_key),
            body: translator.translate(body_key),
            room_name: invite.room_name.clone(),
            display_name: invite.user.display_name.clone(),
            handle: format!("@{}", invite.user.username),
            avatar_url: invite.user.avatar_url.clone(),
            confirm_label: translator.translate(CONFIRM_LABEL),
            cancel_label: translator.translate(CANCEL_LABEL),
        }
    }
}

/// Key to string lookup. Unknown keys come back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn english() -> Self {
        let entries = [
            (ROOM_INVITE_FROM, "Room invite from"),
            (INVITE_RECEIVED, "You have been invited to a room by"),
            (NEW_ROOM_CREATED, "New room created"),
            (JUST_STARTED, "A room was just started by"),
            (SOMEONE_JOINED_WAITING_ROOM, "Someone joined the waiting room"),
            (JOINED_WAITING_ROOM, "Waiting to be let in:"),
            (CONFIRM_LABEL, "Yes"),
            (CANCEL_LABEL, "Cancel"),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
        Self { entries }
    }

    /// Entries from `overrides` win over entries already present.
    pub fn merge(mut self, overrides: HashMap<String, String>) -> Self {
        self.entries.extend(overrides);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> String {
        match self.get(key) {
            Some(text) => text.to_string(),
            None => {
                warn!("Missing translation for {}", key);
                key.to_string()
            }
        }
    }
}
