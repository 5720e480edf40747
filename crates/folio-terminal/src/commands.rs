//! Built-in command set.

use folio_types::config::TerminalConfig;
use folio_types::error::Result;

use crate::registry::CommandRegistry;

/// Register every built-in command. Enumerated parameters (sections, menus,
/// CV sections, themes) are taken from `config`.
pub fn register_builtins(reg: &mut CommandRegistry, config: &TerminalConfig) -> Result<()> {
    crate::register_doc_commands(reg)?;
    crate::register_shell_commands(reg)?;
    crate::register_page_commands(reg, config)?;
    crate::register_profile_commands(reg, config)?;
    log::debug!("Registered {} built-in commands", reg.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_command_table() {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg, &TerminalConfig::default()).unwrap();
        assert_eq!(
            reg.names(false),
            vec![
                "about", "clear", "cv", "date", "echo", "help", "history", "ls", "man", "nav",
                "openmenu", "sidebar", "theme", "time", "title",
            ]
        );
    }

    #[test]
    fn hidden_commands_registered() {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg, &TerminalConfig::default()).unwrap();
        let hidden: Vec<&str> = reg
            .list(true)
            .filter(|s| s.hidden)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(
            hidden,
            vec!["changeHeader", "closeSidebar", "goAbout", "goHome", "goWork", "openSidebar"]
        );
    }

    #[test]
    fn registering_twice_fails() {
        let config = TerminalConfig::default();
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg, &config).unwrap();
        assert!(register_builtins(&mut reg, &config).is_err());
    }
}
