//! Documentation commands: `help` and `man`.
//!
//! Both read the registry they were dispatched from, so their output always
//! reflects exactly what is registered.

use folio_types::error::Result;

use crate::command::{Command, CommandOutput, CommandSpec, Environment, ParamSpec};
use crate::registry::CommandRegistry;

/// Register documentation commands.
pub fn register_doc_commands(reg: &mut CommandRegistry) -> Result<()> {
    reg.register(Box::new(HelpCmd::new()))?;
    reg.register(Box::new(ManCmd::new()))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd {
    spec: CommandSpec,
}

impl HelpCmd {
    fn new() -> Self {
        Self {
            spec: CommandSpec::new("help", "Show brief help for all commands")
                .example("help - List all available commands"),
        }
    }
}

impl Command for HelpCmd {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(render_help(env.registry)))
    }
}

/// One bullet per listed command, alphabetical.
pub fn render_help(registry: &CommandRegistry) -> String {
    let mut out = String::from("Available commands:");
    for spec in registry.list(false) {
        out.push_str("\n• ");
        out.push_str(&spec.name);
        if spec.takes_params() {
            out.push(' ');
            out.push_str(&spec.param_list());
        }
        out.push_str(": ");
        out.push_str(&spec.description);
    }
    out
}

// ---------------------------------------------------------------------------
// man
// ---------------------------------------------------------------------------

struct ManCmd {
    spec: CommandSpec,
}

impl ManCmd {
    fn new() -> Self {
        Self {
            spec: CommandSpec::new("man", "Show command documentation")
                .param(ParamSpec::free("command").with_help("Command to describe"))
                .example("man nav - Show the manual for nav")
                .example("man - List documented commands"),
        }
    }
}

impl Command for ManCmd {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let text = match args.first() {
            None => format!(
                "Available commands:\n{}\n\nUse 'man <command>' for details",
                env.registry.names(false).join(", ")
            ),
            Some(name) => match env.registry.lookup(name) {
                Some(cmd) => render_manual(cmd.spec()),
                None => format!(
                    "No manual entry for '{name}'\nTry 'help' for available commands"
                ),
            },
        };
        Ok(CommandOutput::Text(text))
    }
}

/// Full manual page for one command.
pub fn render_manual(spec: &CommandSpec) -> String {
    let mut lines = vec![
        "NAME".to_string(),
        format!("    {} - {}", spec.name, spec.description),
        String::new(),
        "SYNOPSIS".to_string(),
    ];
    let mut synopsis = format!("    {}", spec.name);
    for p in &spec.params {
        synopsis.push_str(&format!(" <{}>", p.name));
    }
    lines.push(synopsis);
    lines.push(String::new());
    lines.push("DESCRIPTION".to_string());
    lines.push(format!("    {}", spec.description));

    if spec.takes_params() {
        lines.push(String::new());
        lines.push("ARGUMENTS".to_string());
        for p in &spec.params {
            lines.push(format!("    {}", p.name));
            if let Some(help) = &p.help {
                lines.push(format!("        {help}"));
            }
            if p.is_enumerated() {
                lines.push(format!("        Values: {}", p.options().join(", ")));
            }
        }
    }

    if !spec.examples.is_empty() {
        lines.push(String::new());
        lines.push("EXAMPLES".to_string());
        for example in &spec.examples {
            lines.push(format!("    {example}"));
        }
    }

    if spec.hidden {
        lines.push(String::new());
        lines.push("Note: This is a hidden command".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Harness;

    fn registry() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        register_doc_commands(&mut reg).unwrap();
        reg.register(Box::new(crate::command::FnCommand::new(
            CommandSpec::new("nav", "Navigate to a section")
                .param(
                    ParamSpec::choice("section", ["home", "about"])
                        .with_help("Available sections: home, about"),
                )
                .example("nav home - Scroll to the home section"),
            |_: &[&str], _: &mut Environment<'_>| Ok(CommandOutput::None),
        )))
        .unwrap();
        reg.register(Box::new(crate::command::FnCommand::new(
            CommandSpec::new("goHome", "Scroll to top").hidden(),
            |_: &[&str], _: &mut Environment<'_>| Ok(CommandOutput::None),
        )))
        .unwrap();
        reg
    }

    #[test]
    fn help_lists_visible_commands_alphabetically() {
        let reg = registry();
        let text = render_help(&reg);
        assert_eq!(
            text,
            "Available commands:\n\
             • help: Show brief help for all commands\n\
             • man command: Show command documentation\n\
             • nav section: Navigate to a section"
        );
        assert!(!text.contains("goHome"));
    }

    #[test]
    fn help_through_execute() {
        let reg = registry();
        let mut h = Harness::new();
        let out = h.run(&reg, "help", &[]).unwrap();
        match out {
            CommandOutput::Text(s) => assert!(s.starts_with("Available commands:")),
            other => panic!("expected Text, got {other:?}"),
        }
    }

    #[test]
    fn man_without_args_lists_names() {
        let reg = registry();
        let mut h = Harness::new();
        let out = h.run(&reg, "man", &[]).unwrap();
        assert_eq!(
            out,
            CommandOutput::Text(
                "Available commands:\nhelp, man, nav\n\nUse 'man <command>' for details".into()
            )
        );
    }

    #[test]
    fn man_unknown_is_deterministic_text() {
        let reg = registry();
        let mut h = Harness::new();
        let out = h.run(&reg, "man", &["frobnicate"]).unwrap();
        assert_eq!(
            out,
            CommandOutput::Text(
                "No manual entry for 'frobnicate'\nTry 'help' for available commands".into()
            )
        );
    }

    #[test]
    fn man_page_sections() {
        let reg = registry();
        let spec = reg.lookup("nav").unwrap().spec();
        let page = render_manual(spec);
        assert_eq!(
            page,
            "NAME\n    nav - Navigate to a section\n\n\
             SYNOPSIS\n    nav <section>\n\n\
             DESCRIPTION\n    Navigate to a section\n\n\
             ARGUMENTS\n    section\n        Available sections: home, about\n        Values: home, about\n\n\
             EXAMPLES\n    nav home - Scroll to the home section"
        );
    }

    #[test]
    fn man_page_without_params_skips_arguments() {
        let reg = registry();
        let page = render_manual(reg.lookup("help").unwrap().spec());
        assert!(page.contains("SYNOPSIS\n    help\n"));
        assert!(!page.contains("ARGUMENTS"));
        assert!(page.contains("EXAMPLES"));
    }

    #[test]
    fn man_page_notes_hidden_commands() {
        let reg = registry();
        let page = render_manual(reg.lookup("goHome").unwrap().spec());
        assert!(page.ends_with("Note: This is a hidden command"));
        assert!(!page.contains("EXAMPLES"));
    }
}
