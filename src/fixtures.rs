//! Demo data set shown by the shell and used in tests.

use std::fmt;

use crate::currency::CurrencyCode;
use crate::domain::{AdminUser, Goal, RawAdminUser, RawGoal, RawTransaction, Transaction};
use crate::view::{ingest, Rejected};

fn raw_transaction(
    id: &str,
    description: &str,
    amount: f64,
    category: &str,
    kind: &str,
    date: &str,
) -> RawTransaction {
    RawTransaction {
        id: id.into(),
        description: description.into(),
        amount,
        category: category.into(),
        kind: kind.into(),
        date: date.into(),
    }
}

pub fn raw_transactions() -> Vec<RawTransaction> {
    vec![
        raw_transaction("1", "Salary", 50000.0, "Income", "income", "2024-01-15"),
        raw_transaction("2", "Grocery Shopping", 2500.0, "Food", "expense", "2024-01-14"),
        raw_transaction("3", "Uber Ride", 350.0, "Transport", "expense", "2024-01-13"),
        raw_transaction("4", "Online Shopping", 1200.0, "Shopping", "expense", "2024-01-12"),
    ]
}

fn raw_goal(
    id: &str,
    title: &str,
    target: f64,
    current: f64,
    date: &str,
    category: &str,
    completed: bool,
) -> RawGoal {
    RawGoal {
        id: id.into(),
        title: title.into(),
        target_amount: target,
        current_amount: current,
        target_date: date.into(),
        category: category.into(),
        completed,
    }
}

pub fn raw_goals() -> Vec<RawGoal> {
    vec![
        raw_goal("1", "Emergency Fund", 100000.0, 65000.0, "2024-06-30", "Savings", false),
        raw_goal("2", "Vacation to Japan", 150000.0, 45000.0, "2024-12-15", "Travel", false),
        raw_goal("3", "New Laptop", 80000.0, 80000.0, "2024-03-01", "Technology", true),
    ]
}

pub fn raw_users() -> Vec<RawAdminUser> {
    let user = |id: &str, name: &str, email: &str, status: &str, join_date: &str| RawAdminUser {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        status: status.into(),
        join_date: join_date.into(),
    };
    vec![
        user("1", "John Doe", "john@example.com", "active", "2024-01-15"),
        user("2", "Jane Smith", "jane@example.com", "active", "2024-01-14"),
        user("3", "Mike Johnson", "mike@example.com", "inactive", "2024-01-13"),
    ]
}

/// Which collection of a [`Dataset`] a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Transactions,
    Goals,
    Users,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Transactions => "transactions",
            Collection::Goals => "goals",
            Collection::Users => "users",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected record together with the collection it was submitted in.
///
/// `record.index` is the position within that collection's batch.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRejection {
    pub collection: Collection,
    pub record: Rejected,
}

/// Validated collections ready for filtering and deriving.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
    pub users: Vec<AdminUser>,
    /// Rejections from every collection, in ingest order.
    pub rejected: Vec<DatasetRejection>,
}

impl Dataset {
    pub fn from_raw(
        transactions: Vec<RawTransaction>,
        goals: Vec<RawGoal>,
        users: Vec<RawAdminUser>,
        currency: &CurrencyCode,
    ) -> Self {
        let transactions = ingest(transactions, currency);
        let goals = ingest(goals, currency);
        let users = ingest(users, currency);

        let rejected = [
            (Collection::Transactions, transactions.rejected),
            (Collection::Goals, goals.rejected),
            (Collection::Users, users.rejected),
        ]
        .into_iter()
        .flat_map(|(collection, records)| {
            records
                .into_iter()
                .map(move |record| DatasetRejection { collection, record })
        })
        .collect();

        Self {
            transactions: transactions.accepted,
            goals: goals.accepted,
            users: users.accepted,
            rejected,
        }
    }

    pub fn demo(currency: &CurrencyCode) -> Self {
        Self::from_raw(raw_transactions(), raw_goals(), raw_users(), currency)
    }
}
