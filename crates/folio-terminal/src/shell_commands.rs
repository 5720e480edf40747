//! Shell-style commands: clear, history, echo, time, date.

use folio_types::error::{FolioError, Result};

use crate::command::{Command, CommandOutput, CommandSpec, Environment, ParamSpec};
use crate::registry::CommandRegistry;

/// Register shell commands.
pub fn register_shell_commands(reg: &mut CommandRegistry) -> Result<()> {
    reg.register(Box::new(ClearCmd::new()))?;
    reg.register(Box::new(HistoryCmd::new()))?;
    reg.register(Box::new(EchoCmd::new()))?;
    reg.register(Box::new(TimeCmd::new()))?;
    reg.register(Box::new(DateCmd::new()))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd {
    spec: CommandSpec,
}

impl ClearCmd {
    fn new() -> Self {
        Self {
            spec: CommandSpec::new("clear", "Clear the terminal screen")
                .example("clear - Remove all output"),
        }
    }
}

impl Command for ClearCmd {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd {
    spec: CommandSpec,
}

impl HistoryCmd {
    fn new() -> Self {
        Self {
            spec: CommandSpec::new("history", "Show command history")
                .param(ParamSpec::choice("action", ["clear"]).with_help("Optional: clear"))
                .example("history - List previous commands")
                .example("history clear - Forget previous commands"),
        }
    }
}

impl Command for HistoryCmd {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        if let Some(action) = args.first() {
            return match self.spec.params[0].resolve_choice(action) {
                Some(_) => Ok(CommandOutput::ClearHistory),
                None => Err(FolioError::Command("Invalid action. Use clear".to_string())),
            };
        }
        if env.history.is_empty() {
            return Ok(CommandOutput::text("No commands in history"));
        }
        let lines: Vec<String> = env
            .history
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{:4}  {entry}", i + 1))
            .collect();
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd {
    spec: CommandSpec,
}

impl EchoCmd {
    fn new() -> Self {
        Self {
            spec: CommandSpec::new("echo", "Display a line of text")
                .param(ParamSpec::free("text").with_help("Text to print"))
                .example("echo hello world - Prints: hello world"),
        }
    }
}

impl Command for EchoCmd {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(args.join(" ")))
    }
}

// ---------------------------------------------------------------------------
// time / date
// ---------------------------------------------------------------------------

fn clock_unavailable() -> FolioError {
    FolioError::Command("Clock not available".to_string())
}

struct TimeCmd {
    spec: CommandSpec,
}

impl TimeCmd {
    fn new() -> Self {
        Self {
            spec: CommandSpec::new("time", "Show current time")
                .example("time - Prints the local time as HH:MM:SS"),
        }
    }
}

impl Command for TimeCmd {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let clock = env.time.ok_or_else(clock_unavailable)?;
        Ok(CommandOutput::Text(clock.now()?.time_string()))
    }
}

struct DateCmd {
    spec: CommandSpec,
}

impl DateCmd {
    fn new() -> Self {
        Self {
            spec: CommandSpec::new("date", "Show current date")
                .example("date - Prints the local date as YYYY-MM-DD"),
        }
    }
}

impl Command for DateCmd {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let clock = env.time.ok_or_else(clock_unavailable)?;
        Ok(CommandOutput::Text(clock.now()?.date_string()))
    }
}
