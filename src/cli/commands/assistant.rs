use crate::assistant::{MessageId, QUICK_QUESTIONS};
use crate::cli::commands::CommandDefinition;
use crate::cli::context::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::{output, render};

const ASK_USAGE: &str = "ask <message> | ask -q <number>";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "ask",
            "Send a message to the assistant and wait for the reply",
            ASK_USAGE,
            cmd_ask,
        )
        .with_completions(&["-q"]),
        CommandDefinition::new(
            "questions",
            "List suggested questions for the assistant",
            "questions",
            cmd_questions,
        ),
        CommandDefinition::new("chat", "Show the conversation so far", "chat", cmd_chat),
    ]
}

fn quick_question(raw: &str) -> Result<&'static str, CommandError> {
    raw.parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| QUICK_QUESTIONS.get(index).copied())
        .ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "choose a question between 1 and {}",
                QUICK_QUESTIONS.len()
            ))
        })
}

fn cmd_ask(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let text = match args {
        ["-q", number] => quick_question(number)?.to_string(),
        ["-q", ..] => return Err(CommandError::InvalidArguments(format!("usage: {}", ASK_USAGE))),
        _ => args.join(" "),
    };

    let sent = {
        // Reply timers are spawned onto the shell's runtime.
        let _guard = context.runtime.enter();
        context.session.submit(&text)?
    };
    show_message(context, sent);

    if context.mode == CliMode::Interactive {
        output::hint("Assistant is typing...");
    }
    let reply = context.runtime.block_on(context.session.next_reply())?;
    show_message(context, reply);
    Ok(())
}

fn cmd_questions(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Quick questions");
    for (index, question) in QUICK_QUESTIONS.iter().enumerate() {
        output::line(format!("  {}. {}", index + 1, question));
    }
    output::hint("Use `ask -q <number>` to send one.");
    Ok(())
}

fn cmd_chat(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("AI Financial Assistant");
    let now = context.clock.now();
    let palette = context.palette();
    for view in context.presenter.derive_all(context.session.messages(), now) {
        render::message(&view, &palette);
    }
    Ok(())
}

fn show_message(context: &ShellContext, id: MessageId) {
    if let Some(message) = context.session.log().get(id) {
        let view = context.presenter.derive(message, context.clock.now());
        render::message(&view, &context.palette());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_questions_are_numbered_from_one() {
        assert_eq!(quick_question("1").unwrap(), QUICK_QUESTIONS[0]);
        assert_eq!(quick_question("5").unwrap(), QUICK_QUESTIONS[4]);
        assert!(quick_question("0").is_err());
        assert!(quick_question("6").is_err());
        assert!(quick_question("two").is_err());
    }
}
