use crate::cli::commands::CommandDefinition;
use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::{help, output};
use crate::theme::ThemePreset;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "theme",
            "Show or switch the colour theme",
            "theme [light|dark]",
            cmd_theme,
        )
        .with_completions(&["light", "dark"]),
        CommandDefinition::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandDefinition::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_theme(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(raw) = args.first() else {
        output::info(format!("Current theme: {}", context.config.theme));
        return Ok(());
    };
    let preset: ThemePreset = raw.parse()?;
    if preset == context.config.theme {
        output::info(format!("Theme already set to {}.", preset));
        return Ok(());
    }
    context.config.theme = preset;
    context.persist_config()?;
    tracing::info!(theme = %preset, "theme changed");
    output::success(format!("Theme set to {}.", preset));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(command) = args.first().map(|name| name.to_lowercase()) {
        if let Some(command) = context.command(&command) {
            help::print_command(command);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
