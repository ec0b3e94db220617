//! Confirmation flow for room invites.
//!
//! An event source reports invites to an [`InviteController`], which keeps at most one of
//! them pending. A presentation layer reads the pending invite, renders its [`DialogView`],
//! and reports the user's answer back with [`InviteController::on_confirm`] or
//! [`InviteController::on_cancel`].

pub mod action;
pub mod controller;
pub mod copy;
pub mod effects;
pub mod error;
pub mod invite;
pub mod store;
pub mod wire;

pub use action::ConfirmAction;
pub use controller::InviteController;
pub use copy::{Catalog, DialogView};
pub use effects::{Navigator, Silent, SoundEffects, Transport, Translator};
pub use error::InviteError;
pub use invite::{InviteEvent, InviteKind, PendingInvite, RoomId, UserId, UserPreview};
pub use store::PendingInviteStore;
pub use wire::{OutboundMessage, SoundEffect};
