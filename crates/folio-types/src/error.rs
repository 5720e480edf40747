//! Error types for FOLIO.

use std::io;

/// Errors produced by the FOLIO terminal and its host services.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("command error: {0}")]
    Command(String),

    #[error("command already registered: {0}")]
    DuplicateCommand(String),

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FolioError {
    /// Message shown to the terminal user, without the category prefix.
    ///
    /// Handler failures are rendered as `Error: {detail}`, so a command that
    /// fails with `Command("Sidebar element not found")` reads naturally.
    pub fn detail(&self) -> String {
        match self {
            Self::Command(msg) => msg.clone(),
            Self::MissingElement(id) => format!("Element not found: {id}"),
            other => other.to_string(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
