use colored::Colorize;
use roomcall_core::{DialogView, OutboundMessage, RoomId, SoundEffect};
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One line of output per thing that happened to the dialog. In JSON mode these are
/// written as JSON lines tagged by `event`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Emitted {
    Sound { effect: SoundEffect },
    Dialog(DialogView),
    Send { message: OutboundMessage },
    Navigate { path: String },
    Dismissed {
        #[serde(rename = "roomId")]
        room_id: RoomId,
    },
    NothingPending,
    Failed { error: String },
}

pub fn emit(event: &Emitted, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(event)?),
        OutputFormat::Human => print_human(event)?,
    }
    Ok(())
}

fn print_human(event: &Emitted) -> anyhow::Result<()> {
    match event {
        Emitted::Sound { .. } => {
            // Terminal bell
            let mut stdout = std::io::stdout();
            stdout.write_all(b"\x07")?;
            stdout.flush()?;
        }
        Emitted::Dialog(view) => {
            println!();
            println!("{}", view.header.bold());
            println!(
                "{} {} ({})",
                view.body,
                view.display_name.bold(),
                view.handle.dimmed()
            );
            println!("Room: {}", view.room_name.cyan());
            if !view.avatar_url.is_empty() {
                println!("Avatar: {}", view.avatar_url.dimmed());
            }
            println!("[{}] / [{}]", view.confirm_label.green(), view.cancel_label);
        }
        Emitted::Send { message } => {
            println!("{} {}", "→".green(), message.to_json()?);
        }
        Emitted::Navigate { path } => println!("{} {}", "Opened".green(), path),
        Emitted::Dismissed { room_id } => {
            println!("{}", format!("Dismissed invite for room {}", room_id).yellow())
        }
        Emitted::NothingPending => println!("Nothing to confirm."),
        Emitted::Failed { error } => eprintln!("{} {}", "Error:".red(), error),
    }
    Ok(())
}
