//! Scripted chat assistant: an append-only message log plus delayed canned replies.

pub mod message;
pub mod script;
pub mod session;
pub mod strategy;

pub use message::{Message, MessageId, MessageLog, Sender};
pub use script::{default_replies, DEFAULT_REPLIES, GREETING, QUICK_QUESTIONS};
pub use session::{AssistantSession, ReplyTicket};
pub use strategy::{ReplyPolicy, ReplyStrategy, RoundRobin, UniformRandom};
