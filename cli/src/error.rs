use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("WebSocket error: {0}")]
    WebSocket(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Script line {line}: {message}")]
    Script { line: usize, message: String },
}
