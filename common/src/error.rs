use thiserror::Error;

/// Failures surfaced by the invite confirmation flow.
///
/// The resolver itself cannot fail; these come from the collaborators an action is run
/// against, or from parsing an invite kind off the wire.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InviteError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("navigation error: {0}")]
    Navigation(String),

    #[error("unknown invite kind: {0}")]
    UnknownKind(String),
}
