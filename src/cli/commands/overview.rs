use crate::cli::commands::CommandDefinition;
use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::render;
use crate::summary::{admin_stats, cash_flow, goals_overview, spending_by_category};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "summary",
            "Show cash flow, spending and goal progress",
            "summary",
            cmd_summary,
        ),
        CommandDefinition::new("admin", "Show platform statistics", "admin", cmd_admin),
    ]
}

fn expect_no_args(args: &[&str], usage: &str) -> CommandResult {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::InvalidArguments(format!("usage: {}", usage)))
    }
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_no_args(args, "summary")?;
    let data = &context.data;
    let palette = context.palette();
    render::cash_flow(&cash_flow(&data.transactions), &context.presenter);
    render::spending(
        &spending_by_category(&data.transactions),
        &context.presenter,
        &palette,
    );
    render::goals_overview(&goals_overview(&data.goals), &context.presenter);
    Ok(())
}

fn cmd_admin(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_no_args(args, "admin")?;
    let stats = admin_stats(&context.data.users, &context.data.transactions);
    render::admin_stats(&stats, &context.presenter);

    let now = context.clock.now();
    let views = context.presenter.derive_all(&context.data.users, now);
    render::users(&views, context.data.users.len(), &context.palette());
    Ok(())
}
