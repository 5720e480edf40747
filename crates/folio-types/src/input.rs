//! Host-agnostic key events for the terminal input surface.
//!
//! The page host maps its native keyboard events to [`Key`]. The terminal
//! core never sees raw browser or console input.

use serde::{Deserialize, Serialize};

/// A key recognised by the terminal input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Printable character typed into the input.
    Char(char),
    /// Delete the character left of the cursor.
    Backspace,
    /// Submit the current line.
    Enter,
    /// Recall the previous history entry.
    ArrowUp,
    /// Recall the next history entry.
    ArrowDown,
    /// Autocomplete a command name or enumerated argument.
    Tab,
    /// Abandon the current line.
    Escape,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name to a [`Key`].
    ///
    /// Single-character names become [`Key::Char`]; unrecognised named keys
    /// (`Shift`, `F5`, ...) return `None` so the host can let them through.
    pub fn from_dom_name(name: &str) -> Option<Self> {
        match name {
            "Enter" => Some(Self::Enter),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "Tab" => Some(Self::Tab),
            "Backspace" => Some(Self::Backspace),
            "Escape" | "Esc" => Some(Self::Escape),
            "Spacebar" => Some(Self::Char(' ')),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(Self::Char(ch)),
                    _ => None,
                }
            },
        }
    }

    /// Whether the host should suppress its default action for this key.
    ///
    /// Arrow keys would move the caret and Tab would move focus away from
    /// the terminal.
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::ArrowUp | Self::ArrowDown | Self::Tab | Self::Enter)
    }
}
