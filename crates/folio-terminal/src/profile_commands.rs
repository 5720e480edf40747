//! Informational commands rendering configured profile content.

use folio_types::config::{CV_ALL, TerminalConfig};
use folio_types::error::{FolioError, Result};

use crate::command::{Command, CommandOutput, CommandSpec, Environment, ParamSpec};
use crate::registry::CommandRegistry;

/// Register profile commands.
pub fn register_profile_commands(
    reg: &mut CommandRegistry,
    config: &TerminalConfig,
) -> Result<()> {
    reg.register(Box::new(CvCmd::new(config)))?;
    reg.register(Box::new(LsCmd::new()))?;
    reg.register(Box::new(AboutCmd::new()))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// cv
// ---------------------------------------------------------------------------

struct CvCmd {
    spec: CommandSpec,
}

impl CvCmd {
    fn new(config: &TerminalConfig) -> Self {
        let mut values = config.profile.cv_names();
        values.push(CV_ALL.to_string());
        let help = format!("Sections: {}", values.join(", "));
        Self {
            spec: CommandSpec::new("cv", "Display my professional information")
                .param(ParamSpec::choice("section", values).with_help(&help))
                .example("cv education - Show education only")
                .example("cv - Show every section"),
        }
    }
}

impl Command for CvCmd {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let profile = &env.config.profile;
        let section = match args.first() {
            None => CV_ALL,
            Some(raw) => self.spec.params[0].resolve_choice(raw).ok_or_else(|| {
                FolioError::Command(format!(
                    "Invalid CV section. Available: {}",
                    self.spec.params[0].options().join(", ")
                ))
            })?,
        };

        if section == CV_ALL {
            let all: Vec<&str> = profile.cv.iter().map(|s| s.body.as_str()).collect();
            return Ok(CommandOutput::Text(all.join("\n\n")));
        }
        // Registered choices mirror the profile, so this only misses when a
        // command was built from a different config than the session's.
        let body = profile
            .cv_section(section)
            .ok_or_else(|| FolioError::Command(format!("CV section not found: {section}")))?;
        Ok(CommandOutput::Text(body.body.clone()))
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd {
    spec: CommandSpec,
}

impl LsCmd {
    fn new() -> Self {
        Self {
            spec: CommandSpec::new("ls", "List website sections")
                .example("ls - Show the site structure"),
        }
    }
}

impl Command for LsCmd {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let config = env.config;
        let mut lines = vec!["SITE STRUCTURE:".to_string(), String::new()];
        for s in &config.targets.sections {
            lines.push(format!("{:<14}- {}", format!("/{}", s.name), s.description));
        }
        if !config.profile.resources.is_empty() {
            lines.push(String::new());
            lines.push("RESOURCES:".to_string());
            for r in &config.profile.resources {
                lines.push(format!("{:<14}- {}", format!("/{}", r.name), r.description));
            }
        }
        lines.push(String::new());
        lines.push("Use 'nav <section>' to navigate".to_string());
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

struct AboutCmd {
    spec: CommandSpec,
}

impl AboutCmd {
    fn new() -> Self {
        Self {
            spec: CommandSpec::new("about", "Show information about my university")
                .example("about - Print the profile summary"),
        }
    }
}

impl Command for AboutCmd {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(env.config.profile.about.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Harness;
    use folio_types::config::{CvSection, SiteEntry};

    fn setup(config: TerminalConfig) -> (CommandRegistry, Harness) {
        let mut reg = CommandRegistry::new();
        register_profile_commands(&mut reg, &config).unwrap();
        (reg, Harness::with_config(config))
    }

    fn small_config() -> TerminalConfig {
        let mut config = TerminalConfig::default();
        config.profile.cv = vec![
            CvSection::new("education", "EDU"),
            CvSection::new("skills", "SKILLS"),
        ];
        config.targets.sections = vec![
            SiteEntry::new("home", "Landing page"),
            SiteEntry::new("work", "Projects"),
        ];
        config.profile.resources = vec![SiteEntry::new("cv", "Professional CV")];
        config
    }

    #[test]
    fn cv_single_section() {
        let (reg, mut h) = setup(small_config());
        assert_eq!(
            h.run(&reg, "cv", &["Skills"]).unwrap(),
            CommandOutput::text("SKILLS")
        );
    }

    #[test]
    fn cv_all_joins_with_blank_line() {
        let (reg, mut h) = setup(small_config());
        let expected = CommandOutput::text("EDU\n\nSKILLS");
        assert_eq!(h.run(&reg, "cv", &[]).unwrap(), expected);
        assert_eq!(h.run(&reg, "cv", &["all"]).unwrap(), expected);
    }

    #[test]
    fn cv_invalid_section() {
        let (reg, mut h) = setup(small_config());
        let err = h.run(&reg, "cv", &["hobbies"]).unwrap_err();
        assert_eq!(
            err.detail(),
            "Invalid CV section. Available: education, skills, all"
        );
    }

    #[test]
    fn cv_choices_from_default_profile() {
        let (reg, _) = setup(TerminalConfig::default());
        let spec = reg.lookup("cv").unwrap().spec();
        assert_eq!(
            spec.params[0].options(),
            ["education", "experience", "skills", "languages", "contact", "all"]
        );
    }

    #[test]
    fn ls_lists_sections_and_resources() {
        let (reg, mut h) = setup(small_config());
        assert_eq!(
            h.run(&reg, "ls", &[]).unwrap(),
            CommandOutput::text(
                "SITE STRUCTURE:\n\n\
                 /home         - Landing page\n\
                 /work         - Projects\n\n\
                 RESOURCES:\n\
                 /cv           - Professional CV\n\n\
                 Use 'nav <section>' to navigate"
            )
        );
    }

    #[test]
    fn ls_without_resources() {
        let mut config = small_config();
        config.profile.resources.clear();
        let (reg, mut h) = setup(config);
        let CommandOutput::Text(text) = h.run(&reg, "ls", &[]).unwrap() else {
            panic!("expected text");
        };
        assert!(!text.contains("RESOURCES"));
    }

    #[test]
    fn about_prints_profile() {
        let (reg, mut h) = setup(TerminalConfig::default());
        let CommandOutput::Text(text) = h.run(&reg, "about", &[]).unwrap() else {
            panic!("expected text");
        };
        assert!(text.starts_with("YILDIZ TECHNICAL UNIVERSITY"));
    }
}
