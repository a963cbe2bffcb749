use crate::cli::commands::{CommandDefinition, CommandRegistry};
use crate::cli::output;

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Available commands");
    for entry in registry.iter() {
        output::line(format!("  {:<14} {}", entry.name, entry.summary));
    }
    output::info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandDefinition) {
    output::section(format!("Help: {}", entry.name));
    output::line(format!("  Description: {}", entry.summary));
    output::line(format!("  Usage: {}", entry.usage));
}
