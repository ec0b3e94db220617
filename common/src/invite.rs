//! Invite data carried from the event source into the pending-invite store.

use crate::action::ConfirmAction;
use crate::error::InviteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Why a confirmation dialog is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InviteKind {
    /// A direct invitation to a room.
    #[serde(rename = "invite")]
    Invite,
    /// Someone the user follows just started a room.
    #[serde(rename = "someone_you_follow_created_a_room")]
    FollowedUserCreatedRoom,
    /// Someone entered a waiting room and can be admitted.
    #[serde(rename = "someone_joined_waiting_room")]
    WaitingRoomJoin,
}

impl InviteKind {
    pub const ALL: [InviteKind; 3] = [
        InviteKind::Invite,
        InviteKind::FollowedUserCreatedRoom,
        InviteKind::WaitingRoomJoin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InviteKind::Invite => "invite",
            InviteKind::FollowedUserCreatedRoom => "someone_you_follow_created_a_room",
            InviteKind::WaitingRoomJoin => "someone_joined_waiting_room",
        }
    }
}

impl fmt::Display for InviteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InviteKind {
    type Err = InviteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InviteKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| InviteError::UnknownKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        RoomId(id.to_string())
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId(id.to_string())
    }
}

/// The user shown in the dialog: inviter, room creator or waiting user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreview {
    pub username: String,
    pub display_name: String,
    pub avatar_url: String,
    pub user_id: UserId,
}

/// An invite as delivered by the event source.
///
/// Matches the chat server payload, where the user preview fields sit next to the room
/// fields rather than in a nested object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteEvent {
    #[serde(rename = "type")]
    pub kind: InviteKind,
    pub room_id: RoomId,
    pub room_name: String,
    #[serde(flatten)]
    pub user: UserPreview,
}

/// The single invite currently awaiting the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingInvite {
    pub kind: InviteKind,
    pub room_id: RoomId,
    pub room_name: String,
    pub user: UserPreview,
    /// Resolved when the invite arrived; confirming runs exactly this.
    pub action: ConfirmAction,
}

impl PendingInvite {
    pub fn new(event: InviteEvent) -> Self {
        let action = ConfirmAction::resolve(event.kind, &event.room_id, &event.user.user_id);
        PendingInvite {
            kind: event.kind,
            room_id: event.room_id,
            room_name: event.room_name,
            user: event.user,
            action,
        }
    }
}
