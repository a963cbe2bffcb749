use crate::cli::commands::CommandDefinition;
use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::render;
use crate::domain::goal::{STATUS_ACTIVE, STATUS_COMPLETED};
use crate::domain::{TransactionKind, UserStatus};
use crate::errors::ValidationError;
use crate::view::{fields, filter, FilterCriteria, Selection};

const TRANSACTIONS_USAGE: &str =
    "transactions [query] [--category <name>] [--type income|expense]";
const GOALS_USAGE: &str = "goals [query] [--category <name>] [--status active|completed]";
const USERS_USAGE: &str = "users [query] [--status active|inactive]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "transactions",
            "Search and filter transactions",
            TRANSACTIONS_USAGE,
            cmd_transactions,
        )
        .with_completions(&["--category", "--type", "income", "expense"]),
        CommandDefinition::new(
            "goals",
            "Show savings goals and their progress",
            GOALS_USAGE,
            cmd_goals,
        )
        .with_completions(&["--category", "--status", "active", "completed"]),
        CommandDefinition::new("users", "Search platform users", USERS_USAGE, cmd_users)
            .with_completions(&["--status", "active", "inactive"]),
    ]
}

type Normalizer = fn(&str) -> Result<String, ValidationError>;

/// A `--flag <value>` option that constrains one categorical field.
struct Flag {
    name: &'static str,
    field: &'static str,
    normalize: Normalizer,
}

fn verbatim(value: &str) -> Result<String, ValidationError> {
    Ok(value.trim().to_string())
}

fn transaction_kind(value: &str) -> Result<String, ValidationError> {
    value
        .parse::<TransactionKind>()
        .map(|kind| kind.as_str().to_string())
}

fn goal_status(value: &str) -> Result<String, ValidationError> {
    let lowered = value.trim().to_ascii_lowercase();
    if lowered == STATUS_ACTIVE || lowered == STATUS_COMPLETED {
        Ok(lowered)
    } else {
        Err(ValidationError::UnknownVariant {
            field: "status",
            value: value.to_string(),
        })
    }
}

fn user_status(value: &str) -> Result<String, ValidationError> {
    value
        .parse::<UserStatus>()
        .map(|status| status.as_str().to_string())
}

/// Splits shell arguments into a free-text query and categorical constraints.
fn parse_criteria(
    args: &[&str],
    flags: &[Flag],
    usage: &str,
) -> Result<FilterCriteria, CommandError> {
    let mut words = Vec::new();
    let mut criteria = FilterCriteria::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if !arg.starts_with("--") {
            words.push(*arg);
            continue;
        }
        let flag = flags.iter().find(|flag| flag.name == *arg).ok_or_else(|| {
            CommandError::InvalidArguments(format!("unknown option `{}`. Usage: {}", arg, usage))
        })?;
        let value = iter.next().ok_or_else(|| {
            CommandError::InvalidArguments(format!("{} requires a value. Usage: {}", arg, usage))
        })?;
        let selection = match Selection::parse(value.trim()) {
            Selection::All => Selection::All,
            Selection::Only(value) => Selection::Only((flag.normalize)(&value)?),
        };
        criteria = criteria.with_constraint(flag.field, selection);
    }

    if !words.is_empty() {
        criteria = criteria.with_query(words.join(" "));
    }
    Ok(criteria)
}

fn cmd_transactions(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let flags = [
        Flag {
            name: "--category",
            field: fields::CATEGORY,
            normalize: verbatim,
        },
        Flag {
            name: "--type",
            field: fields::TYPE,
            normalize: transaction_kind,
        },
    ];
    let criteria = parse_criteria(args, &flags, TRANSACTIONS_USAGE)?;
    let records = &context.data.transactions;
    let views = context
        .presenter
        .derive_all(filter(records, &criteria), context.clock.now());
    render::transactions(&views, records.len(), &context.palette());
    Ok(())
}

fn cmd_goals(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let flags = [
        Flag {
            name: "--category",
            field: fields::CATEGORY,
            normalize: verbatim,
        },
        Flag {
            name: "--status",
            field: fields::STATUS,
            normalize: goal_status,
        },
    ];
    let criteria = parse_criteria(args, &flags, GOALS_USAGE)?;
    let records = &context.data.goals;
    let views = context
        .presenter
        .derive_all(filter(records, &criteria), context.clock.now());
    render::goals(&views, records.len(), &context.palette());
    Ok(())
}

fn cmd_users(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let flags = [Flag {
        name: "--status",
        field: fields::STATUS,
        normalize: user_status,
    }];
    let criteria = parse_criteria(args, &flags, USERS_USAGE)?;
    let records = &context.data.users;
    let views = context
        .presenter
        .derive_all(filter(records, &criteria), context.clock.now());
    render::users(&views, records.len(), &context.palette());
    Ok(())
}
