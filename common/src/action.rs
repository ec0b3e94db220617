//! Maps an invite to the one thing confirming it should do.

use crate::effects::{Navigator, Transport};
use crate::error::InviteError;
use crate::invite::{InviteKind, RoomId, UserId};
use crate::wire::OutboundMessage;
use tracing::info;

/// What confirming a pending invite does, with every id it needs already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Join the room and open it.
    JoinRoom { room_id: RoomId },
    /// Let a waiting user into the room. The current view stays where it is.
    AdmitFromWaitingRoom { room_id: RoomId, user_id: UserId },
}

impl ConfirmAction {
    pub fn resolve(kind: InviteKind, room_id: &RoomId, user_id: &UserId) -> Self {
        match kind {
            InviteKind::WaitingRoomJoin => ConfirmAction::AdmitFromWaitingRoom {
                room_id: room_id.clone(),
                user_id: user_id.clone(),
            },
            InviteKind::Invite | InviteKind::FollowedUserCreatedRoom => ConfirmAction::JoinRoom {
                room_id: room_id.clone(),
            },
        }
    }

    pub fn outbound(&self) -> OutboundMessage {
        match self {
            ConfirmAction::JoinRoom { room_id } => OutboundMessage::JoinRoom {
                room_id: room_id.clone(),
            },
            ConfirmAction::AdmitFromWaitingRoom { room_id, user_id } => {
                OutboundMessage::AddFromWaiting {
                    room_id: room_id.clone(),
                    user_id: user_id.clone(),
                }
            }
        }
    }

    /// Route to open after the message is sent, if any.
    pub fn navigation(&self) -> Option<String> {
        match self {
            ConfirmAction::JoinRoom { room_id } => Some(room_path(room_id)),
            ConfirmAction::AdmitFromWaitingRoom { .. } => None,
        }
    }

    /// Sends the outbound message, then navigates. Stops at the first failure.
    pub fn run<T, N>(&self, transport: &mut T, navigator: &mut N) -> Result<(), InviteError>
    where
        T: Transport + ?Sized,
        N: Navigator + ?Sized,
    {
        let message = self.outbound();
        info!("Sending {} for confirmed invite", message.op());
        transport.send(message)?;

        if let Some(path) = self.navigation() {
            info!("Navigating to {}", path);
            navigator.go_to(&path)?;
        }

        Ok(())
    }
}

pub fn room_path(room_id: &RoomId) -> String {
    format!("/room/{}", room_id)
}
