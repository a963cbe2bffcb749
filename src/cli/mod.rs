pub mod commands;
mod context;
mod help;
pub mod output;
mod render;
mod shell;

pub use context::{CliMode, CommandError, CommandResult, ShellContext};
pub use shell::{run_cli, SCRIPT_ENV};
