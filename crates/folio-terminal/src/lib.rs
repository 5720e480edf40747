//! Command interpreter for the portfolio terminal.
//!
//! Commands implement the `Command` trait and are registered by name. A
//! `TerminalSession` splits submitted lines, resolves the command, runs it
//! against borrowed host services, and renders the result into its output
//! buffer. History recall and Tab completion sit on the same session.

mod command;
mod commands;
pub mod completion;
pub mod doc_commands;
mod history;
mod input;
mod output;
pub mod page_commands;
pub mod profile_commands;
mod registry;
mod session;
pub mod shell_commands;
mod typewriter;

#[cfg(test)]
mod test_support;

/// Output produced by a command (text or a signal for the session).
pub use command::CommandOutput;
/// A single executable command.
pub use command::Command;
/// Static metadata and parameter declarations.
pub use command::{CommandSpec, ParamKind, ParamSpec};
/// Services and session state visible to a running command.
pub use command::Environment;
/// A command backed by a closure.
pub use command::FnCommand;
/// Register every built-in command into a registry.
pub use commands::register_builtins;
/// Result of Tab completion on an input line.
pub use completion::Completion;
/// Register `help` and `man`.
pub use doc_commands::register_doc_commands;
/// Submitted-line history.
pub use history::History;
/// The editable input line.
pub use input::InputLine;
pub use output::{LineStyle, OutputBuffer, OutputLine};
/// Register page-facing commands (nav, sidebar, openmenu, title, theme).
pub use page_commands::register_page_commands;
/// Register profile commands (cv, ls, about).
pub use profile_commands::register_profile_commands;
/// Registry of available commands.
pub use registry::CommandRegistry;
/// A terminal session and the outcome of a submission.
pub use session::{Submission, TerminalSession};
/// Register clear, history, echo, time and date.
pub use shell_commands::register_shell_commands;
/// The header typing effect.
pub use typewriter::TypewriterTask;
