//! Messages this crate hands to the outbound transport.

use crate::invite::{RoomId, UserId};
use serde::{Deserialize, Serialize};

/// A command for the chat server, shaped as `{ "op": ..., "data": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "data", rename_all = "snake_case")]
pub enum OutboundMessage {
    JoinRoom {
        #[serde(rename = "roomId")]
        room_id: RoomId,
    },
    AddFromWaiting {
        #[serde(rename = "roomId")]
        room_id: RoomId,
        #[serde(rename = "userId")]
        user_id: UserId,
    },
}

impl OutboundMessage {
    pub fn op(&self) -> &'static str {
        match self {
            OutboundMessage::JoinRoom { .. } => "join_room",
            OutboundMessage::AddFromWaiting { .. } => "add_from_waiting",
        }
    }

    /// The text frame sent over the websocket.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Named sound effects the notification player knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoundEffect {
    RoomInvite,
}

impl SoundEffect {
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::RoomInvite => "roomInvite",
        }
    }
}
