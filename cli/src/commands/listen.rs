use crate::api::{Connection, DEFAULT_NODE_URL};
use crate::config::Config;
use crate::output::OutputFormat;
use crate::terminal::{TerminalNavigator, TerminalSound};
use anyhow::Result;
use clap::Args;
use dialoguer::Confirm;
use roomcall_core::InviteController;
use tracing::info;

#[derive(Args)]
pub struct ListenArgs {
    /// Chat server WebSocket URL (overrides the config file)
    #[arg(long, env = "ROOMCALL_NODE_URL")]
    pub node_url: Option<String>,

    /// Accept every invite without prompting
    #[arg(long, conflicts_with = "auto_decline")]
    pub auto_accept: bool,

    /// Decline every invite without prompting
    #[arg(long)]
    pub auto_decline: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Ask,
    Accept,
    Decline,
}

fn answer_policy(args: &ListenArgs, config: &Config, interactive: bool) -> Answer {
    if args.auto_accept {
        Answer::Accept
    } else if args.auto_decline {
        Answer::Decline
    } else if interactive {
        Answer::Ask
    } else if config.auto_accept {
        Answer::Accept
    } else {
        Answer::Decline
    }
}

pub async fn execute(args: ListenArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let node_url = args
        .node_url
        .clone()
        .or_else(|| config.node_url.clone())
        .unwrap_or_else(|| DEFAULT_NODE_URL.to_string());
    let policy = answer_policy(&args, config, atty::is(atty::Stream::Stdin));

    let mut connection = Connection::connect(&node_url).await?;
    let catalog = config.catalog();
    let mut controller = InviteController::new(
        TerminalSound::new(config.sound, format),
        connection.transport(format),
        TerminalNavigator::new(format),
    );

    info!("Waiting for invites (policy: {:?})", policy);

    // Frames that arrive while a prompt is open stay queued and are handled in order.
    while let Some(event) = connection.invites.recv().await {
        controller.on_invite_received(event);
        super::render_pending(&controller, &catalog, format)?;

        let accept = match policy {
            Answer::Accept => true,
            Answer::Decline => false,
            Answer::Ask => {
                let prompt = controller
                    .dialog(&catalog)
                    .map(|view| format!("{} ({})", view.confirm_label, view.room_name))
                    .unwrap_or_default();
                tokio::task::spawn_blocking(move || {
                    Confirm::new().with_prompt(prompt).default(false).interact()
                })
                .await??
            }
        };

        if accept {
            super::confirm(&mut controller, format)?;
        } else {
            super::cancel(&mut controller, format)?;
        }
    }

    // The controller holds a sender; drop it so the writer can drain and finish.
    drop(controller);
    connection.shutdown().await
}
