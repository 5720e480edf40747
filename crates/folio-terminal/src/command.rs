//! Command trait, descriptors, and the environment handlers run in.

use folio_platform::{PageService, PreferenceStore, TimeService};
use folio_types::config::TerminalConfig;
use folio_types::error::Result;

use crate::registry::CommandRegistry;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Text block appended as one output line (empty text appends nothing).
    Text(String),
    /// Command produced no visible output.
    None,
    /// Signal to empty the output buffer.
    Clear,
    /// Signal to forget the command history.
    ClearHistory,
    /// Signal to start the header typing effect.
    Typewrite {
        /// Elements receiving the text.
        targets: Vec<String>,
        /// Text revealed one character at a time.
        text: String,
        /// Line shown in the terminal once the effect starts.
        message: String,
    },
}

impl CommandOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// Allowed values for a positional parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKind {
    /// Any token.
    Free,
    /// One of a closed list of literal values.
    Choice(Vec<String>),
}

/// Positional parameter declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: String,
    pub help: Option<String>,
    pub kind: ParamKind,
}

impl ParamSpec {
    /// A parameter accepting any token.
    pub fn free(name: &str) -> Self {
        Self {
            name: name.to_string(),
            help: None,
            kind: ParamKind::Free,
        }
    }

    /// A parameter restricted to `values`.
    pub fn choice<I, S>(name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            help: None,
            kind: ParamKind::Choice(values.into_iter().map(Into::into).collect()),
        }
    }

    pub fn with_help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }

    /// Enumerated values, empty for free parameters.
    pub fn options(&self) -> &[String] {
        match &self.kind {
            ParamKind::Free => &[],
            ParamKind::Choice(values) => values,
        }
    }

    pub fn is_enumerated(&self) -> bool {
        matches!(self.kind, ParamKind::Choice(_))
    }

    /// Match `token` against the allowed values, ignoring ASCII case.
    ///
    /// Returns the canonical spelling. Free parameters accept nothing here;
    /// callers use the raw token instead.
    pub fn resolve_choice(&self, token: &str) -> Option<&str> {
        self.options()
            .iter()
            .find(|v| v.eq_ignore_ascii_case(token))
            .map(String::as_str)
    }
}

/// Static metadata for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: String,
    pub description: String,
    pub params: Vec<ParamSpec>,
    pub examples: Vec<String>,
    pub hidden: bool,
}

impl CommandSpec {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            params: Vec::new(),
            examples: Vec::new(),
            hidden: false,
        }
    }

    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    pub fn example(mut self, example: &str) -> Self {
        self.examples.push(example.to_string());
        self
    }

    /// Keep the command out of listings while leaving it dispatchable.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Declared parameter names joined by spaces.
    pub fn param_list(&self) -> String {
        self.params
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `name` followed by the declared parameter names.
    pub fn usage(&self) -> String {
        if self.params.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.param_list())
        }
    }

    pub fn takes_params(&self) -> bool {
        !self.params.is_empty()
    }
}

/// Host services and session state visible to a running command.
pub struct Environment<'a> {
    pub page: &'a mut dyn PageService,
    pub prefs: &'a mut dyn PreferenceStore,
    pub time: Option<&'a dyn TimeService>,
    /// The registry the command was dispatched from (for `help`/`man`).
    pub registry: &'a CommandRegistry,
    /// Submitted lines, oldest first, including the current one.
    pub history: &'a [String],
    pub config: &'a TerminalConfig,
}

/// A single executable command.
pub trait Command {
    fn spec(&self) -> &CommandSpec;

    /// Run with the whitespace-split argument tokens.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput>;

    fn name(&self) -> &str {
        &self.spec().name
    }
}

/// A command whose handler is a plain function or closure.
pub struct FnCommand<F> {
    spec: CommandSpec,
    handler: F,
}

impl<F> FnCommand<F>
where
    F: Fn(&[&str], &mut Environment<'_>) -> Result<CommandOutput>,
{
    pub fn new(spec: CommandSpec, handler: F) -> Self {
        Self { spec, handler }
    }
}

impl<F> Command for FnCommand<F>
where
    F: Fn(&[&str], &mut Environment<'_>) -> Result<CommandOutput>,
{
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        (self.handler)(args, env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_without_params_has_no_trailing_space() {
        let spec = CommandSpec::new("clear", "Clear the terminal screen");
        assert_eq!(spec.usage(), "clear");
        assert!(!spec.takes_params());
    }

    #[test]
    fn usage_lists_params_in_order() {
        let spec = CommandSpec::new("copy", "Copy")
            .param(ParamSpec::free("from"))
            .param(ParamSpec::free("to"));
        assert_eq!(spec.usage(), "copy from to");
        assert_eq!(spec.param_list(), "from to");
    }

    #[test]
    fn choice_resolves_case_insensitively() {
        let p = ParamSpec::choice("action", ["open", "close", "toggle"]);
        assert_eq!(p.resolve_choice("OPEN"), Some("open"));
        assert_eq!(p.resolve_choice("Toggle"), Some("toggle"));
        assert_eq!(p.resolve_choice("flip"), None);
        assert!(p.is_enumerated());
    }

    #[test]
    fn free_param_has_no_options() {
        let p = ParamSpec::free("text").with_help("Text to echo back");
        assert!(p.options().is_empty());
        assert!(!p.is_enumerated());
        assert_eq!(p.resolve_choice("anything"), None);
        assert_eq!(p.help.as_deref(), Some("Text to echo back"));
    }

    #[test]
    fn builder_sets_hidden_and_examples() {
        let spec = CommandSpec::new("goHome", "Scroll to top")
            .example("goHome")
            .hidden();
        assert!(spec.hidden);
        assert_eq!(spec.examples, vec!["goHome"]);
    }

    #[test]
    fn text_helper() {
        assert_eq!(CommandOutput::text("hi"), CommandOutput::Text("hi".into()));
    }
}
