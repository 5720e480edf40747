//! Commands that act on the host page: navigation, sidebar, menus, header
//! text and theme, plus the hidden shortcuts kept for old bookmarks.

use folio_platform::{PageService, PreferenceStore};
use folio_types::config::{THEME_LIST, TerminalConfig};
use folio_types::error::{FolioError, Result};

use crate::command::{Command, CommandOutput, CommandSpec, Environment, ParamSpec};
use crate::registry::CommandRegistry;

/// Register page commands. Choice lists come from `config`.
pub fn register_page_commands(reg: &mut CommandRegistry, config: &TerminalConfig) -> Result<()> {
    reg.register(Box::new(NavCmd::new(config)))?;
    reg.register(Box::new(SidebarCmd::new()))?;
    reg.register(Box::new(OpenMenuCmd::new(config)))?;
    reg.register(Box::new(TitleCmd::new()))?;
    reg.register(Box::new(ThemeCmd::new(config)))?;

    reg.register(Box::new(ShortcutCmd::new(
        "goHome",
        "Scroll to the top of the page",
        Shortcut::Top,
        "Navigating to the homepage...",
    )))?;
    reg.register(Box::new(ShortcutCmd::new(
        "goAbout",
        "Scroll to the about section",
        Shortcut::Section("about"),
        "Navigating to the About section...",
    )))?;
    reg.register(Box::new(ShortcutCmd::new(
        "goWork",
        "Scroll to the work section",
        Shortcut::Section("work"),
        "Navigating to the Work section...",
    )))?;
    reg.register(Box::new(ShortcutCmd::new(
        "openSidebar",
        "Show the sidebar",
        Shortcut::Sidebar(true),
        "Sidebar is now open.",
    )))?;
    reg.register(Box::new(ShortcutCmd::new(
        "closeSidebar",
        "Hide the sidebar",
        Shortcut::Sidebar(false),
        "Sidebar is now closed.",
    )))?;
    reg.register(Box::new(ChangeHeaderCmd::new()))?;
    Ok(())
}

/// Apply `name` to the page. The default theme is the page's built-in look.
pub fn apply_theme(page: &mut dyn PageService, config: &TerminalConfig, name: &str) -> Result<()> {
    if name == config.theme.default {
        page.set_theme(None)
    } else {
        page.set_theme(Some(name))
    }
}

/// Theme stored in preferences, falling back to the configured default when
/// nothing (or something unknown) is stored.
pub fn stored_theme(prefs: &dyn PreferenceStore, config: &TerminalConfig) -> Result<String> {
    match prefs.get(&config.theme.storage_key)? {
        Some(name) if config.theme.contains(&name) => Ok(name),
        Some(name) => {
            log::warn!("Ignoring unknown stored theme '{name}'");
            Ok(config.theme.default.clone())
        },
        None => Ok(config.theme.default.clone()),
    }
}

/// Rewrite a missing-element failure into a user-facing message.
fn missing_as(err: FolioError, message: impl FnOnce() -> String) -> FolioError {
    match err {
        FolioError::MissingElement(_) => FolioError::Command(message()),
        other => other,
    }
}

fn set_sidebar(page: &mut dyn PageService, id: &str, open: bool) -> Result<()> {
    page.set_display(id, open)
        .map_err(|e| missing_as(e, || "Sidebar element not found".to_string()))
}

/// Check that every header target exists before the typing effect starts.
fn check_headers(env: &Environment<'_>) -> Result<Vec<String>> {
    let headers = &env.config.targets.headers;
    if headers.is_empty() {
        return Err(FolioError::Command("Header text element not found".to_string()));
    }
    for id in headers {
        env.page
            .text(id)
            .map_err(|e| missing_as(e, || "Header text element not found".to_string()))?;
    }
    Ok(headers.clone())
}

// ---------------------------------------------------------------------------
// nav
// ---------------------------------------------------------------------------

struct NavCmd {
    spec: CommandSpec,
}

impl NavCmd {
    fn new(config: &TerminalConfig) -> Self {
        let sections = config.section_ids();
        let help = format!("Available sections: {}", sections.join(", "));
        let mut spec = CommandSpec::new("nav", "Navigate to a section")
            .param(ParamSpec::choice("section", sections.iter().cloned()).with_help(&help));
        for s in &config.targets.sections {
            spec = spec.example(&format!("nav {} - {}", s.name, s.description));
        }
        Self { spec }
    }
}

impl Command for NavCmd {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(&raw) = args.first() else {
            return Err(FolioError::Command("Please specify a section".to_string()));
        };
        let section = self.spec.params[0].resolve_choice(raw).unwrap_or(raw);
        env.page
            .scroll_to(section)
            .map_err(|e| missing_as(e, || format!("Section not found: {raw}")))?;
        Ok(CommandOutput::Text(format!("Navigating to {section} section...")))
    }
}

// ---------------------------------------------------------------------------
// sidebar
// ---------------------------------------------------------------------------

struct SidebarCmd {
    spec: CommandSpec,
}

impl SidebarCmd {
    fn new() -> Self {
        Self {
            spec: CommandSpec::new("sidebar", "Control the sidebar")
                .param(
                    ParamSpec::choice("action", ["open", "close", "toggle"])
                        .with_help("open, close, or toggle"),
                )
                .example("sidebar open - Show the sidebar")
                .example("sidebar toggle - Flip the sidebar"),
        }
    }
}

impl Command for SidebarCmd {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let invalid = || FolioError::Command("Invalid action. Use open, close, or toggle".into());
        let raw = args.first().ok_or_else(invalid)?;
        let action = self.spec.params[0].resolve_choice(raw).ok_or_else(invalid)?;
        let id = env.config.targets.sidebar.as_str();

        let open = match action {
            "open" => true,
            "close" => false,
            _ => {
                let state = env
                    .page
                    .display_state(id)
                    .map_err(|e| missing_as(e, || "Sidebar element not found".to_string()))?;
                state != Some(true)
            },
        };
        set_sidebar(env.page, id, open)?;
        let word = if open { "opened" } else { "closed" };
        Ok(CommandOutput::Text(format!("Sidebar {word}")))
    }
}

// ---------------------------------------------------------------------------
// openmenu
// ---------------------------------------------------------------------------

struct OpenMenuCmd {
    spec: CommandSpec,
}

impl OpenMenuCmd {
    fn new(config: &TerminalConfig) -> Self {
        let menus = &config.targets.menus;
        let help = format!("Available: {}", menus.join(", "));
        let mut spec = CommandSpec::new("openmenu", "Open a menu category")
            .param(ParamSpec::choice("category", menus.iter().cloned()).with_help(&help));
        if let Some(first) = menus.first() {
            spec = spec.example(&format!("openmenu {first} - Show the {first} menu"));
        }
        Self { spec }
    }
}

impl Command for OpenMenuCmd {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(&raw) = args.first() else {
            return Err(FolioError::Command("Please specify a category".to_string()));
        };
        let param = &self.spec.params[0];
        let Some(category) = param.resolve_choice(raw) else {
            return Err(FolioError::Command(format!(
                "Invalid category '{raw}'. Available: {}",
                param.options().join(", ")
            )));
        };

        for menu in param.options() {
            env.page
                .set_display(menu, false)
                .map_err(|e| missing_as(e, || format!("Menu element not found for {menu}")))?;
        }
        env.page
            .set_display(category, true)
            .map_err(|e| missing_as(e, || format!("Menu element not found for {category}")))?;
        Ok(CommandOutput::Text(format!("Opening {category}...")))
    }
}

// ---------------------------------------------------------------------------
// title
// ---------------------------------------------------------------------------

struct TitleCmd {
    spec: CommandSpec,
}

impl TitleCmd {
    fn new() -> Self {
        Self {
            spec: CommandSpec::new("title", "Change the header text")
                .param(ParamSpec::free("text").with_help("New header text"))
                .example("title Hello there - Types 'Hello there' into the header"),
        }
    }
}

impl Command for TitleCmd {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        if args.is_empty() {
            return Err(FolioError::Command("Please provide a new title".to_string()));
        }
        let targets = check_headers(env)?;
        let text = args.join(" ");
        Ok(CommandOutput::Typewrite {
            targets,
            message: format!("Title changed to: {text}"),
            text,
        })
    }
}

// ---------------------------------------------------------------------------
// theme
// ---------------------------------------------------------------------------

struct ThemeCmd {
    spec: CommandSpec,
}

impl ThemeCmd {
    fn new(config: &TerminalConfig) -> Self {
        let mut values = vec![THEME_LIST.to_string()];
        values.extend(config.theme.names());
        Self {
            spec: CommandSpec::new("theme", "Change the color theme")
                .param(
                    ParamSpec::choice("name", values)
                        .with_help("Theme name, or 'list' to show themes"),
                )
                .example("theme list - Show available themes")
                .example("theme light - Switch to the light theme"),
        }
    }

    fn listing(env: &Environment<'_>) -> Result<String> {
        let current = stored_theme(&*env.prefs, env.config)?;
        let mut out = String::from("Available themes:");
        for t in &env.config.theme.themes {
            out.push_str(&format!("\n• {:<9}- {}", t.name, t.description));
        }
        out.push_str(&format!("\n\nCurrent theme: {current}"));
        Ok(out)
    }
}

impl Command for ThemeCmd {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(&raw) = args.first() else {
            return Ok(CommandOutput::Text(Self::listing(env)?));
        };
        let Some(name) = self.spec.params[0].resolve_choice(raw) else {
            return Err(FolioError::Command(format!(
                "Invalid theme. Available: {}",
                env.config.theme.names().join(", ")
            )));
        };
        if name == THEME_LIST {
            return Ok(CommandOutput::Text(Self::listing(env)?));
        }

        env.prefs.set(&env.config.theme.storage_key, name)?;
        apply_theme(env.page, env.config, name)?;
        log::info!("Theme set to '{name}'");
        Ok(CommandOutput::Text(format!("Theme changed to {name}")))
    }
}

// ---------------------------------------------------------------------------
// Hidden shortcuts
// ---------------------------------------------------------------------------

enum Shortcut {
    Top,
    Section(&'static str),
    Sidebar(bool),
}

struct ShortcutCmd {
    spec: CommandSpec,
    action: Shortcut,
    message: &'static str,
}

impl ShortcutCmd {
    fn new(name: &str, description: &str, action: Shortcut, message: &'static str) -> Self {
        Self {
            spec: CommandSpec::new(name, description).hidden(),
            action,
            message,
        }
    }
}

impl Command for ShortcutCmd {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        match self.action {
            Shortcut::Top => env.page.scroll_to_top()?,
            Shortcut::Section(id) => env
                .page
                .scroll_to(id)
                .map_err(|e| missing_as(e, || format!("Section not found: {id}")))?,
            Shortcut::Sidebar(open) => {
                let id = env.config.targets.sidebar.as_str();
                set_sidebar(env.page, id, open)?;
            },
        }
        Ok(CommandOutput::text(self.message))
    }
}

struct ChangeHeaderCmd {
    spec: CommandSpec,
}

impl ChangeHeaderCmd {
    fn new() -> Self {
        Self {
            spec: CommandSpec::new("changeHeader", "Type new text into the header")
                .param(ParamSpec::free("text"))
                .hidden(),
        }
    }
}

impl Command for ChangeHeaderCmd {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        if args.is_empty() {
            return Ok(CommandOutput::text(
                "Please provide a new header text after the command.",
            ));
        }
        let targets = check_headers(env)?;
        let text = args.join(" ");
        Ok(CommandOutput::Typewrite {
            targets,
            message: format!("Header changed to: \"{text}\""),
            text,
        })
    }
}
