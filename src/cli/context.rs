//! Shell state, dispatch and error reporting.

use std::{io, sync::Arc};

use strsim::levenshtein;
use thiserror::Error;
use tokio::runtime::{Builder, Runtime};

use crate::{
    assistant::AssistantSession,
    config::{Config, ConfigManager},
    errors::{AssistantError, BudgeError, CliError, ValidationError},
    fixtures::Dataset,
    theme::Palette,
    utils::{Clock, SystemClock},
    view::Presenter,
};

use super::commands::{all_definitions, CommandDefinition, CommandRegistry};
use super::output;

const MAX_SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] BudgeError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Core(BudgeError::Validation(err))
    }
}

impl From<AssistantError> for CommandError {
    fn from(err: AssistantError) -> Self {
        CommandError::Core(BudgeError::Assistant(err))
    }
}

pub type CommandResult = Result<(), CommandError>;

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub presenter: Presenter,
    pub data: Dataset,
    pub clock: Arc<dyn Clock>,
    pub session: AssistantSession,
    pub runtime: Runtime,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let runtime = Builder::new_current_thread().enable_time().build()?;
        let mut session = AssistantSession::from_config(&config.assistant, Arc::clone(&clock))
            .map_err(BudgeError::from)?;
        session.greet();

        let data = Dataset::demo(&config.currency);
        for rejection in &data.rejected {
            tracing::warn!(
                collection = %rejection.collection,
                id = %rejection.record.id,
                error = %rejection.record.error,
                "skipped demo record"
            );
        }

        tracing::debug!(path = %config_manager.path().display(), ?mode, "shell started");

        Ok(Self {
            mode,
            registry: CommandRegistry::new(all_definitions()),
            presenter: Presenter::from_config(&config),
            config_manager,
            config,
            data,
            clock,
            session,
            runtime,
            running: true,
        })
    }

    pub fn palette(&self) -> Palette {
        self.config.theme.palette()
    }

    pub fn prompt(&self) -> String {
        format!("{} ", output::paint("budge>", self.palette().primary))
    }

    pub fn command(&self, name: &str) -> Option<&CommandDefinition> {
        self.registry.get(name)
    }

    /// Command names paired with the argument words they complete.
    pub(crate) fn completion_table(&self) -> Vec<(&'static str, &'static [&'static str])> {
        self.registry
            .iter()
            .map(|entry| (entry.name, entry.completions))
            .collect()
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager
            .save(&self.config)
            .map_err(CommandError::from)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        typed: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.get(command).map(|entry| entry.handler) else {
            self.suggest_command(typed);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            result => result.map(|()| LoopControl::Continue),
        }
    }

    /// Warns about an unknown command and names the closest known one, if any.
    pub(crate) fn suggest_command(&self, typed: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            typed
        ));
        let typed = typed.to_lowercase();
        let closest = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &typed), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = closest {
            if distance <= MAX_SUGGESTION_DISTANCE {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(&message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Core(BudgeError::Assistant(AssistantError::EmptyInput)) => {
                output::error("Type a message for the assistant.");
                output::hint("Use `questions` to see suggested questions.");
                Ok(())
            }
            other => {
                output::error(other);
                Ok(())
            }
        }
    }
}
