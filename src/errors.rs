use thiserror::Error;

/// Error type that captures crate-level failures.
#[derive(Debug, Error)]
pub enum BudgeError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Assistant error: {0}")]
    Assistant(#[from] AssistantError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, BudgeError>;

/// User-facing shell error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BudgeError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Core(BudgeError::from(err))
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Input(err.to_string())
    }
}

impl From<std::io::Error> for BudgeError {
    fn from(err: std::io::Error) -> Self {
        BudgeError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BudgeError {
    fn from(err: serde_json::Error) -> Self {
        BudgeError::Config(err.to_string())
    }
}

/// A record failed a structural check while being accepted into the engine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NonFiniteAmount { field: &'static str },
    #[error("{field} is too large to represent")]
    AmountOutOfRange { field: &'static str },
    #[error("{field} is not a valid date: `{value}`")]
    InvalidDate { field: &'static str, value: String },
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("unknown {field} `{value}`")]
    UnknownVariant { field: &'static str, value: String },
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
    #[error("duplicate record id `{0}`")]
    DuplicateId(String),
}

/// Failures reported by the assistant message log and session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssistantError {
    /// The submitted text was empty after trimming whitespace.
    #[error("message text must not be empty")]
    EmptyInput,
    #[error("the assistant has no candidate replies")]
    NoCandidates,
    #[error("no assistant reply is pending")]
    NoPendingReply,
    /// Replies are timed by tokio; scheduling needs a running runtime.
    #[error("no async runtime is available to schedule replies")]
    NoRuntime,
}
