//! Tab completion for command names and enumerated arguments.
//!
//! Only two things complete: command names (case-sensitive prefix) and
//! values of `Choice` parameters (ASCII case-insensitive prefix, matching
//! how those values are resolved at dispatch). Free-form parameters never
//! complete.

use crate::registry::CommandRegistry;

/// What the input surface should do after Tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Nothing matched; leave the input alone.
    NoMatch,
    /// Exactly one candidate; replace the input with this line.
    Replace(String),
    /// Several command names; show them, leave the input alone.
    Commands(Vec<String>),
    /// Several argument values; show them, leave the input alone.
    Values(Vec<String>),
}

/// Sorted names of listed commands starting with `partial`.
pub fn complete_command(registry: &CommandRegistry, partial: &str) -> Vec<String> {
    registry
        .list(false)
        .filter(|spec| spec.name.starts_with(partial))
        .map(|spec| spec.name.clone())
        .collect()
}

/// Sorted values of the enumerated parameter at `arg_index` starting with
/// `partial`. Empty for unknown commands, out-of-range indices and free
/// parameters.
pub fn complete_argument(
    registry: &CommandRegistry,
    command: &str,
    arg_index: usize,
    partial: &str,
) -> Vec<String> {
    let Some(cmd) = registry.lookup(command) else {
        return Vec::new();
    };
    let Some(param) = cmd.spec().params.get(arg_index) else {
        return Vec::new();
    };
    let needle = partial.to_ascii_lowercase();
    let mut matches: Vec<String> = param
        .options()
        .iter()
        .filter(|v| v.to_ascii_lowercase().starts_with(&needle))
        .cloned()
        .collect();
    matches.sort();
    matches.dedup();
    matches
}

/// Apply the Tab policy to a whole input line.
pub fn complete_line(registry: &CommandRegistry, input: &str) -> Completion {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let trailing_space = input.ends_with(char::is_whitespace);

    // Still typing the command name.
    if tokens.is_empty() || (tokens.len() == 1 && !trailing_space) {
        let partial = tokens.first().copied().unwrap_or("");
        let matches = complete_command(registry, partial);
        return match matches.len() {
            0 => Completion::NoMatch,
            1 => {
                let name = &matches[0];
                let takes_params = registry
                    .lookup(name)
                    .is_some_and(|c| c.spec().takes_params());
                if takes_params {
                    Completion::Replace(format!("{name} "))
                } else {
                    Completion::Replace(name.clone())
                }
            },
            _ => Completion::Commands(matches),
        };
    }

    let command = tokens[0];
    let Some(cmd) = registry.lookup(command) else {
        return Completion::NoMatch;
    };

    let (done, partial) = if trailing_space {
        (&tokens[1..], "")
    } else {
        (&tokens[1..tokens.len() - 1], tokens[tokens.len() - 1])
    };
    let arg_index = done.len();
    let matches = complete_argument(registry, command, arg_index, partial);
    match matches.len() {
        0 => Completion::NoMatch,
        1 => {
            let mut line = String::from(command);
            for arg in done {
                line.push(' ');
                line.push_str(arg);
            }
            line.push(' ');
            line.push_str(&matches[0]);
            if arg_index + 1 < cmd.spec().params.len() {
                line.push(' ');
            }
            Completion::Replace(line)
        },
        _ => Completion::Values(matches),
    }
}
