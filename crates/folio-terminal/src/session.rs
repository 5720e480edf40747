//! Terminal session: dispatch, signal handling, key input and the typing
//! effect.
//!
//! The session owns everything stateful (history, output, input line, the
//! in-flight typewriter task). Host services are borrowed per call through
//! [`Services`], so the session never holds on to the page.

use std::time::Duration;

use folio_platform::{PageService, Services};
use folio_types::config::TerminalConfig;
use folio_types::error::Result;
use folio_types::input::Key;

use crate::command::{Command, CommandOutput, Environment};
use crate::commands::register_builtins;
use crate::completion::{Completion, complete_line};
use crate::history::History;
use crate::input::InputLine;
use crate::output::{LineStyle, OutputBuffer, OutputLine};
use crate::page_commands::{apply_theme, stored_theme};
use crate::registry::CommandRegistry;
use crate::typewriter::TypewriterTask;

/// How a submitted line was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Blank line; nothing happened.
    Ignored,
    /// No command with that name.
    NotFound,
    Succeeded,
    /// The handler failed; an `Error:`/`Usage:` line was appended.
    Failed,
}

/// One interactive terminal.
pub struct TerminalSession {
    registry: CommandRegistry,
    config: TerminalConfig,
    history: History,
    output: OutputBuffer,
    input: InputLine,
    typing: Option<TypewriterTask>,
    next_task_id: u64,
}

impl TerminalSession {
    pub fn new(registry: CommandRegistry, config: TerminalConfig) -> Self {
        Self {
            registry,
            history: History::new(config.history_limit),
            config,
            output: OutputBuffer::new(),
            input: InputLine::new(),
            typing: None,
            next_task_id: 0,
        }
    }

    /// A session with the built-in command table for `config`.
    pub fn with_builtins(config: TerminalConfig) -> Result<Self> {
        config.validate()?;
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry, &config)?;
        log::info!("Terminal ready with {} commands", registry.len());
        Ok(Self::new(registry, config))
    }

    /// Add a command after construction.
    pub fn register(&mut self, cmd: Box<dyn Command>) -> Result<()> {
        self.registry.register(cmd)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn output(&self) -> &OutputBuffer {
        &self.output
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    /// Show the banner, restore the saved theme, run the startup commands.
    pub fn boot(&mut self, services: &mut Services<'_>) {
        self.output
            .push(OutputLine::new(self.config.banner.clone(), LineStyle::Banner));

        let theme = stored_theme(&*services.prefs, &self.config).unwrap_or_else(|e| {
            log::warn!("Failed to read theme preference: {e}");
            self.config.theme.default.clone()
        });
        if let Err(e) = apply_theme(services.page, &self.config, &theme) {
            log::warn!("Failed to apply theme '{theme}': {e}");
        }
        log::info!("Booted with theme '{theme}'");

        for line in self.config.startup_commands.clone() {
            self.submit(&line, services);
        }
    }

    /// Dispatch one raw line.
    pub fn submit(&mut self, line: &str, services: &mut Services<'_>) -> Submission {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Submission::Ignored;
        };
        let args: Vec<&str> = tokens.collect();
        self.history.record(line);

        let outcome = match self.registry.lookup(name) {
            None => {
                log::debug!("Unknown command '{name}'");
                self.output
                    .push(OutputLine::error(format!("Command not found: {name}")));
                Submission::NotFound
            },
            Some(cmd) => {
                log::debug!("Dispatching '{name}' with {} args", args.len());
                let usage = cmd.spec().usage();
                let mut env = Environment {
                    page: &mut *services.page,
                    prefs: &mut *services.prefs,
                    time: services.time,
                    registry: &self.registry,
                    history: self.history.entries(),
                    config: &self.config,
                };
                let result = cmd
                    .execute(&args, &mut env)
                    .and_then(|output| self.apply_output(output, services.page));
                match result {
                    Ok(()) => Submission::Succeeded,
                    Err(e) => {
                        log::debug!("Command '{name}' failed: {e}");
                        self.output.push(OutputLine::error(format!(
                            "Error: {}\nUsage: {usage}",
                            e.detail()
                        )));
                        Submission::Failed
                    },
                }
            },
        };

        self.reveal(services.page);
        outcome
    }

    fn apply_output(&mut self, output: CommandOutput, page: &mut dyn PageService) -> Result<()> {
        match output {
            CommandOutput::Text(text) => {
                if !text.is_empty() {
                    self.output.push(OutputLine::plain(text));
                }
            },
            CommandOutput::None => {},
            CommandOutput::Clear => {
                self.cancel_typing();
                self.output.clear();
                if self.config.clear_resets_history {
                    self.history.clear();
                }
            },
            CommandOutput::ClearHistory => self.history.clear(),
            CommandOutput::Typewrite {
                targets,
                text,
                message,
            } => {
                self.cancel_typing();
                self.start_typing(targets, &text, page)?;
                if !message.is_empty() {
                    self.output.push(OutputLine::plain(message));
                }
            },
        }
        Ok(())
    }

    /// Keep the newest output visible and the prompt focused.
    fn reveal(&self, page: &mut dyn PageService) {
        let targets = &self.config.targets;
        if let Err(e) = page.scroll_to_end(&targets.output) {
            log::warn!("Could not scroll output: {e}");
        }
        if let Err(e) = page.focus(&targets.input) {
            log::warn!("Could not focus input: {e}");
        }
    }

    // -- input surface --

    /// Feed one key. Returns the submission outcome when the key was Enter.
    pub fn handle_key(&mut self, key: Key, services: &mut Services<'_>) -> Option<Submission> {
        match key {
            Key::Char(ch) => self.input.insert(ch),
            Key::Backspace => self.input.backspace(),
            Key::Escape => self.input.clear(),
            Key::ArrowUp => {
                let recalled = self.history.recall_previous(self.input.text());
                self.input.set(recalled);
            },
            Key::ArrowDown => {
                let recalled = self.history.recall_next();
                self.input.set(recalled);
            },
            Key::Tab => self.complete(services.page),
            Key::Enter => {
                let line = self.input.take();
                if !line.trim().is_empty() {
                    self.output.push(OutputLine::new(
                        format!("{}{line}", self.config.prompt),
                        LineStyle::Command,
                    ));
                }
                return Some(self.submit(&line, services));
            },
        }
        None
    }

    /// Tab completion on the current input.
    pub fn complete(&mut self, page: &mut dyn PageService) {
        let suggestion = match complete_line(&self.registry, self.input.text()) {
            Completion::NoMatch => return,
            Completion::Replace(line) => {
                self.input.set(line);
                return;
            },
            Completion::Commands(names) => format!("Possible commands: {}", names.join(", ")),
            Completion::Values(values) => format!("Possible values: {}", values.join(", ")),
        };
        self.output
            .push(OutputLine::new(suggestion, LineStyle::Suggestion));
        self.reveal(page);
    }

    // -- typing effect --

    fn start_typing(
        &mut self,
        targets: Vec<String>,
        text: &str,
        page: &mut dyn PageService,
    ) -> Result<()> {
        self.next_task_id += 1;
        let interval = Duration::from_millis(self.config.typing_interval_ms);
        let mut task = TypewriterTask::new(self.next_task_id, targets, text, interval);
        task.start(page)?;
        log::debug!("Typing task {} started", task.id());
        if !task.is_finished() {
            self.typing = Some(task);
        }
        Ok(())
    }

    pub fn is_typing(&self) -> bool {
        self.typing.is_some()
    }

    /// Drop the in-flight typing task. Returns whether one was running.
    pub fn cancel_typing(&mut self) -> bool {
        match self.typing.take() {
            Some(task) => {
                log::debug!("Typing task {} cancelled", task.id());
                true
            },
            None => false,
        }
    }

    /// Advance the typing effect by `elapsed`.
    pub fn tick(&mut self, elapsed: Duration, services: &mut Services<'_>) {
        let Some(task) = self.typing.as_mut() else {
            return;
        };
        match task.tick(elapsed, services.page) {
            Ok(false) => {},
            Ok(true) => {
                log::debug!("Typing task {} finished", task.id());
                self.typing = None;
            },
            Err(e) => {
                log::warn!("Typing task {} stopped: {e}", task.id());
                self.typing = None;
            },
        }
    }

    /// Reveal the rest of the typing effect at once.
    pub fn finish_typing(&mut self, services: &mut Services<'_>) {
        if let Some(mut task) = self.typing.take()
            && let Err(e) = task.finish(services.page)
        {
            log::warn!("Typing task {} stopped: {e}", task.id());
        }
    }
}
