//! Collaborators the confirmation flow drives but does not own.
//!
//! Every method is synchronous. Implementations that sit on top of async machinery (a
//! websocket, say) should only enqueue work here and do the I/O elsewhere.

use crate::error::InviteError;
use crate::wire::{OutboundMessage, SoundEffect};

pub trait SoundEffects {
    /// Fire and forget.
    fn play_effect(&mut self, effect: SoundEffect);
}

pub trait Transport {
    fn send(&mut self, message: OutboundMessage) -> Result<(), InviteError>;
}

pub trait Navigator {
    fn go_to(&mut self, path: &str) -> Result<(), InviteError>;
}

pub trait Translator {
    /// Looks up a display string. What happens for an unknown key is up to the implementation.
    fn translate(&self, key: &str) -> String;
}

/// Sound player that does nothing, for headless callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SoundEffects for Silent {
    fn play_effect(&mut self, _effect: SoundEffect) {}
}
