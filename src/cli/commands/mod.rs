pub mod assistant;
pub mod overview;
pub mod records;
pub mod system;

use crate::cli::context::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// A shell command: its name, help text, argument completions and handler.
#[derive(Clone)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub summary: &'static str,
    pub usage: &'static str,
    /// Words offered by tab completion after the command name.
    pub completions: &'static [&'static str],
    pub handler: CommandHandler,
}

impl CommandDefinition {
    pub const fn new(
        name: &'static str,
        summary: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            summary,
            usage,
            completions: &[],
            handler,
        }
    }

    pub fn with_completions(mut self, completions: &'static [&'static str]) -> Self {
        self.completions = completions;
        self
    }
}

/// Commands in the order `help` lists them.
pub struct CommandRegistry {
    definitions: Vec<CommandDefinition>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        Self { definitions }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.definitions.iter().find(|entry| entry.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.definitions.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.definitions.iter().map(|entry| entry.name)
    }
}

pub(crate) fn all_definitions() -> Vec<CommandDefinition> {
    [
        records::definitions(),
        overview::definitions(),
        assistant::definitions(),
        system::definitions(),
    ]
    .into_iter()
    .flatten()
    .collect()
}
