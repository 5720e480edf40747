//! Command registry.
//!
//! Names are unique and matched exactly (case-sensitive). Storage is a
//! `BTreeMap`, so every listing comes out in ascending name order without
//! a separate sort.

use std::collections::BTreeMap;

use folio_types::error::{FolioError, Result};

use crate::command::{Command, CommandSpec};

/// Registry of available commands.
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Fails if the name is already taken.
    pub fn register(&mut self, cmd: Box<dyn Command>) -> Result<()> {
        let name = cmd.name().to_string();
        if self.commands.contains_key(&name) {
            return Err(FolioError::DuplicateCommand(name));
        }
        log::debug!("Registered command '{name}'");
        self.commands.insert(name, cmd);
        Ok(())
    }

    /// Exact-match lookup.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Descriptors in name order, hidden ones only when asked for.
    pub fn list(&self, include_hidden: bool) -> impl Iterator<Item = &CommandSpec> + '_ {
        self.commands
            .values()
            .map(|c| c.spec())
            .filter(move |spec| include_hidden || !spec.hidden)
    }

    /// Names in order, hidden ones only when asked for.
    pub fn names(&self, include_hidden: bool) -> Vec<&str> {
        self.list(include_hidden).map(|s| s.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandOutput, Environment, FnCommand};

    fn named(name: &str) -> Box<dyn Command> {
        Box::new(FnCommand::new(
            CommandSpec::new(name, "desc"),
            |_: &[&str], _: &mut Environment<'_>| Ok(CommandOutput::None),
        ))
    }

    fn hidden(name: &str) -> Box<dyn Command> {
        Box::new(FnCommand::new(
            CommandSpec::new(name, "secret").hidden(),
            |_: &[&str], _: &mut Environment<'_>| Ok(CommandOutput::None),
        ))
    }

    #[test]
    fn default_creates_empty_registry() {
        let reg = CommandRegistry::default();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
    }

    #[test]
    fn register_and_lookup() {
        let mut reg = CommandRegistry::new();
        reg.register(named("echo")).unwrap();
        assert!(reg.contains("echo"));
        assert_eq!(reg.lookup("echo").unwrap().name(), "echo");
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut reg = CommandRegistry::new();
        reg.register(named("help")).unwrap();
        match reg.register(named("help")) {
            Err(FolioError::DuplicateCommand(name)) => assert_eq!(name, "help"),
            other => panic!("expected DuplicateCommand, got {other:?}"),
        }
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut reg = CommandRegistry::new();
        reg.register(named("goHome")).unwrap();
        assert!(reg.lookup("goHome").is_some());
        assert!(reg.lookup("gohome").is_none());
        assert!(reg.lookup("GOHOME").is_none());
    }

    #[test]
    fn list_sorted_and_skips_hidden() {
        let mut reg = CommandRegistry::new();
        reg.register(named("zeta")).unwrap();
        reg.register(named("alpha")).unwrap();
        reg.register(hidden("mid")).unwrap();
        reg.register(named("beta")).unwrap();
        assert_eq!(reg.names(false), vec!["alpha", "beta", "zeta"]);
        assert_eq!(reg.names(true), vec!["alpha", "beta", "mid", "zeta"]);
    }

    #[test]
    fn hidden_command_still_resolves() {
        let mut reg = CommandRegistry::new();
        reg.register(hidden("secret")).unwrap();
        assert!(reg.lookup("secret").is_some());
        assert_eq!(reg.list(false).count(), 0);
    }

    #[test]
    fn uppercase_sorts_before_lowercase() {
        let mut reg = CommandRegistry::new();
        reg.register(named("nav")).unwrap();
        reg.register(named("Nav")).unwrap();
        assert_eq!(reg.names(false), vec!["Nav", "nav"]);
    }
}
