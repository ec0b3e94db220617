//! Collaborators that report to the terminal instead of a browser.

use crate::output::{emit, Emitted, OutputFormat};
use roomcall_core::{InviteError, Navigator, OutboundMessage, SoundEffect, SoundEffects, Transport};
use tracing::warn;

pub struct TerminalSound {
    enabled: bool,
    format: OutputFormat,
}

impl TerminalSound {
    pub fn new(enabled: bool, format: OutputFormat) -> Self {
        Self { enabled, format }
    }
}

impl SoundEffects for TerminalSound {
    fn play_effect(&mut self, effect: SoundEffect) {
        if !self.enabled {
            return;
        }
        if let Err(e) = emit(&Emitted::Sound { effect }, self.format) {
            warn!("Failed to play {}: {}", effect.name(), e);
        }
    }
}

/// Prints outbound messages rather than sending them anywhere.
pub struct StdoutTransport {
    format: OutputFormat,
}

impl StdoutTransport {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Transport for StdoutTransport {
    fn send(&mut self, message: OutboundMessage) -> Result<(), InviteError> {
        emit(&Emitted::Send { message }, self.format)
            .map_err(|e| InviteError::Transport(e.to_string()))
    }
}

/// Tracks the route the user is on.
pub struct TerminalNavigator {
    current: Option<String>,
    format: OutputFormat,
}

impl TerminalNavigator {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            current: None,
            format,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl Navigator for TerminalNavigator {
    fn go_to(&mut self, path: &str) -> Result<(), InviteError> {
        self.current = Some(path.to_string());
        emit(
            &Emitted::Navigate {
                path: path.to_string(),
            },
            self.format,
        )
        .map_err(|e| InviteError::Navigation(e.to_string()))
    }
}
