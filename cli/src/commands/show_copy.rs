use crate::config::Config;
use crate::output::{emit, Emitted, OutputFormat};
use anyhow::Result;
use clap::Args;
use roomcall_core::{DialogView, InviteEvent, InviteKind, PendingInvite, UserPreview};

#[derive(Args)]
pub struct ShowCopyArgs {
    /// Invite kind: invite, someone_you_follow_created_a_room or someone_joined_waiting_room
    pub kind: String,

    /// Room name to show in the preview
    #[arg(long, default_value = "Example Room")]
    pub room_name: String,

    /// Username to show in the preview
    #[arg(long, default_value = "example")]
    pub username: String,
}

/// Renders the dialog a kind would produce with the configured translations.
pub fn execute(args: ShowCopyArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let kind: InviteKind = args.kind.parse()?;
    let preview = PendingInvite::new(InviteEvent {
        kind,
        room_id: "preview".into(),
        room_name: args.room_name,
        user: UserPreview {
            display_name: args.username.clone(),
            username: args.username,
            avatar_url: String::new(),
            user_id: "preview".into(),
        },
    });

    let view = DialogView::for_invite(&preview, &config.catalog());
    emit(&Emitted::Dialog(view), format)
}
