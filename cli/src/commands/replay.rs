use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;
use crate::terminal::{StdoutTransport, TerminalNavigator, TerminalSound};
use anyhow::Result;
use clap::Args;
use roomcall_core::{InviteController, InviteEvent};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use tracing::{debug, info};

#[derive(Args)]
pub struct ReplayArgs {
    /// JSON-lines script to replay, or `-` for stdin
    pub script: String,
}

/// One line of a replay script.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptStep {
    Invite(InviteEvent),
    Confirm,
    Cancel,
}

pub fn parse_script(contents: &str) -> Result<Vec<ScriptStep>, CliError> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| CliError::Script {
                line: index + 1,
                message: e.to_string(),
            })
        })
        .collect()
}

pub fn execute(args: ReplayArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let contents = if args.script == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&args.script)?
    };
    let steps = parse_script(&contents)?;
    info!("Replaying {} steps", steps.len());

    let catalog = config.catalog();
    let mut controller = InviteController::new(
        TerminalSound::new(config.sound, format),
        StdoutTransport::new(format),
        TerminalNavigator::new(format),
    );

    for step in steps {
        debug!("Step: {:?}", step);
        match step {
            ScriptStep::Invite(event) => {
                controller.on_invite_received(event);
                super::render_pending(&controller, &catalog, format)?;
            }
            ScriptStep::Confirm => super::confirm(&mut controller, format)?,
            ScriptStep::Cancel => super::cancel(&mut controller, format)?,
        }
    }

    if let Some(path) = controller.navigator().current() {
        info!("Replay finished on {}", path);
    }
    if let Some(invite) = controller.pending() {
        info!("Replay finished with invite for room {} unanswered", invite.room_id);
    }
    Ok(())
}
