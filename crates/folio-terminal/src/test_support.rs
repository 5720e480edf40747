//! Shared fixtures for unit tests.

use folio_platform::{LocalTime, MemoryPage, MemoryPreferences, TimeService};
use folio_types::config::TerminalConfig;
use folio_types::error::{FolioError, Result};

use crate::command::{CommandOutput, Environment};
use crate::registry::CommandRegistry;

/// A clock stuck at one instant.
pub(crate) struct FixedClock(pub LocalTime);

impl Default for FixedClock {
    fn default() -> Self {
        Self(LocalTime {
            year: 2025,
            month: 3,
            day: 7,
            hour: 9,
            minute: 5,
            second: 42,
        })
    }
}

impl TimeService for FixedClock {
    fn now(&self) -> Result<LocalTime> {
        Ok(self.0)
    }
}

/// Services and state for running a single command outside a session.
pub(crate) struct Harness {
    pub page: MemoryPage,
    pub prefs: MemoryPreferences,
    pub clock: FixedClock,
    pub config: TerminalConfig,
    pub history: Vec<String>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(TerminalConfig::default())
    }

    pub fn with_config(config: TerminalConfig) -> Self {
        Self {
            page: MemoryPage::from_config(&config),
            prefs: MemoryPreferences::new(),
            clock: FixedClock::default(),
            config,
            history: Vec::new(),
        }
    }

    /// Execute `name` from `reg` with `args`.
    pub fn run(
        &mut self,
        reg: &CommandRegistry,
        name: &str,
        args: &[&str],
    ) -> Result<CommandOutput> {
        let cmd = reg
            .lookup(name)
            .ok_or_else(|| FolioError::Command(format!("no such command: {name}")))?;
        let mut env = Environment {
            page: &mut self.page,
            prefs: &mut self.prefs,
            time: Some(&self.clock),
            registry: reg,
            history: &self.history,
            config: &self.config,
        };
        cmd.execute(args, &mut env)
    }
}
