use std::{
    collections::BTreeMap,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};

use crate::cli::context::{CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::output;
use crate::errors::CliError;

/// Set to any value to read commands from stdin without prompts or colours.
pub const SCRIPT_ENV: &str = "BUDGE_CLI_SCRIPT";

const COMMENT_PREFIX: char = '#';

pub fn run_cli() -> Result<(), CliError> {
    let mode = match std::env::var_os(SCRIPT_ENV) {
        Some(_) => CliMode::Script,
        None => CliMode::Interactive,
    };
    if mode == CliMode::Script {
        colored::control::set_override(false);
    }

    let mut context = ShellContext::new(mode)?;
    let outcome = if mode == CliMode::Script {
        run_script(&mut context)
    } else {
        run_interactive(&mut context)
    };

    let cancelled = context.session.shutdown();
    tracing::debug!(cancelled, "shell finished");
    outcome
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor: Editor<ShellCompleter, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(ShellCompleter::new(context.completion_table())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    output::section("Budge");
    output::info("Type `help` to see available commands.");

    while context.running {
        let input = match editor.readline(&context.prompt()) {
            Ok(input) => input,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        };
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(input);
        if execute(context, input)? == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for (number, input) in io::stdin().lock().lines().enumerate() {
        let input = input?;
        let input = input.trim();
        if input.is_empty() || input.starts_with(COMMENT_PREFIX) {
            continue;
        }
        tracing::debug!(line = number + 1, "script command");
        if execute(context, input)? == LoopControl::Exit || !context.running {
            break;
        }
    }
    Ok(())
}

/// Runs one input line, reporting command failures without ending the shell.
fn execute(context: &mut ShellContext, input: &str) -> Result<LoopControl, CliError> {
    match handle_line(context, input) {
        Ok(control) => Ok(control),
        Err(err) => {
            context.report_error(err)?;
            Ok(LoopControl::Continue)
        }
    }
}

fn handle_line(context: &mut ShellContext, input: &str) -> Result<LoopControl, CommandError> {
    let words = match shell_words::split(input) {
        Ok(words) => words,
        Err(err) => {
            output::warning(format!("Could not read `{}`: {}", input, err));
            return Ok(LoopControl::Continue);
        }
    };
    let Some((typed, rest)) = words.split_first() else {
        return Ok(LoopControl::Continue);
    };

    let command = typed.to_lowercase();
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    tracing::debug!(%command, args = args.len(), "dispatching command");

    let control = context.dispatch(&command, typed, &args)?;
    if control == LoopControl::Exit {
        context.running = false;
    }
    Ok(control)
}

/// Completes command names, then the option words of the command being typed.
struct ShellCompleter {
    commands: BTreeMap<&'static str, &'static [&'static str]>,
}

impl ShellCompleter {
    fn new(table: Vec<(&'static str, &'static [&'static str])>) -> Self {
        Self {
            commands: table.into_iter().collect(),
        }
    }

    fn candidates(&self, before_cursor: &str) -> (usize, Vec<&'static str>) {
        let word_start = before_cursor
            .rfind(char::is_whitespace)
            .map_or(0, |index| index + 1);
        let partial = before_cursor[word_start..].to_ascii_lowercase();

        let mut preceding = before_cursor[..word_start].split_whitespace();
        let words: Vec<&'static str> = match preceding.next() {
            None => self.commands.keys().copied().collect(),
            Some(command) => self
                .commands
                .get(command.to_ascii_lowercase().as_str())
                .map(|words| words.to_vec())
                .unwrap_or_default(),
        };
        let matches = words
            .into_iter()
            .filter(|word| word.to_ascii_lowercase().starts_with(&partial))
            .collect();
        (word_start, matches)
    }
}

impl Helper for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = self.candidates(&line[..pos]);
        let pairs = words
            .into_iter()
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Highlighter for ShellCompleter {}

impl Validator for ShellCompleter {}
