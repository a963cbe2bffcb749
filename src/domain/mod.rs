pub mod admin_user;
pub mod common;
pub mod goal;
pub mod money;
pub mod transaction;

pub use admin_user::{AdminUser, RawAdminUser, UserStatus};
pub use common::{Identifiable, NamedEntity, RecordId};
pub use goal::{Goal, RawGoal};
pub use money::Money;
pub use transaction::{RawTransaction, Transaction, TransactionKind};
