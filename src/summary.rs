//! Aggregates behind the dashboard and admin overview.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{AdminUser, Goal, Money, Transaction, TransactionKind};
use crate::view::progress_ratio;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    pub income: Money,
    pub expenses: Money,
    /// Income minus expenses; negative when spending exceeds income.
    pub net: Money,
    /// Share of income left after expenses, in percent. `None` without income.
    pub savings_rate: Option<f64>,
}

impl CashFlow {
    pub fn from_parts(income: Money, expenses: Money) -> Self {
        let net = income - expenses;
        let savings_rate = if income.is_positive() {
            Some(net.minor() as f64 / income.minor() as f64 * 100.0)
        } else {
            None
        };
        Self {
            income,
            expenses,
            net,
            savings_rate,
        }
    }
}

pub fn cash_flow<'a, I>(transactions: I) -> CashFlow
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut income = Money::ZERO;
    let mut expenses = Money::ZERO;
    for txn in transactions {
        match txn.kind {
            TransactionKind::Income => income = income + txn.amount,
            TransactionKind::Expense => expenses = expenses + txn.amount,
        }
    }
    CashFlow::from_parts(income, expenses)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpend {
    pub category: String,
    pub total: Money,
    pub transactions: usize,
    /// Share of all expenses, in `[0, 1]`.
    pub share: f64,
}

/// Expense totals per category, largest first. Ties are ordered by name.
pub fn spending_by_category<'a, I>(transactions: I) -> Vec<CategorySpend>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: BTreeMap<&str, (Money, usize)> = BTreeMap::new();
    for txn in transactions {
        if txn.kind != TransactionKind::Expense {
            continue;
        }
        let entry = totals.entry(txn.category.as_str()).or_default();
        entry.0 = entry.0 + txn.amount;
        entry.1 += 1;
    }

    let overall: Money = totals.values().map(|(total, _)| *total).sum();
    let mut breakdown: Vec<CategorySpend> = totals
        .into_iter()
        .map(|(category, (total, transactions))| CategorySpend {
            category: category.to_string(),
            total,
            transactions,
            share: progress_ratio(total, overall),
        })
        .collect();
    // BTreeMap iteration is already name-ordered and the sort is stable.
    breakdown.sort_by(|a, b| b.total.cmp(&a.total));
    breakdown
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalsOverview {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    pub saved: Money,
    pub target: Money,
    pub overall_ratio: f64,
}

pub fn goals_overview(goals: &[Goal]) -> GoalsOverview {
    let completed = goals.iter().filter(|goal| goal.is_completed()).count();
    let saved: Money = goals.iter().map(|goal| goal.current_amount).sum();
    let target: Money = goals.iter().map(|goal| goal.target_amount).sum();
    GoalsOverview {
        total: goals.len(),
        completed,
        active: goals.len() - completed,
        saved,
        target,
        overall_ratio: progress_ratio(saved, target),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: usize,
    pub active_users: usize,
    pub total_transactions: usize,
    /// Sum of all transaction amounts regardless of direction.
    pub total_volume: Money,
}

pub fn admin_stats(users: &[AdminUser], transactions: &[Transaction]) -> AdminStats {
    AdminStats {
        total_users: users.len(),
        active_users: users.iter().filter(|user| user.is_active()).count(),
        total_transactions: transactions.len(),
        total_volume: transactions.iter().map(|txn| txn.amount).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordId;
    use chrono::NaiveDate;

    fn txn(id: &str, amount: i64, category: &str, kind: TransactionKind) -> Transaction {
        Transaction::new(
            RecordId::from(id),
            format!("txn {id}"),
            Money::from_minor(amount),
            category,
            kind,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[test]
    fn cash_flow_splits_income_and_expenses() {
        let txns = vec![
            txn("1", 50_000, "Income", TransactionKind::Income),
            txn("2", 2_500, "Food", TransactionKind::Expense),
            txn("3", 7_500, "Bills", TransactionKind::Expense),
        ];
        let flow = cash_flow(&txns);
        assert_eq!(flow.income, Money::from_minor(50_000));
        assert_eq!(flow.expenses, Money::from_minor(10_000));
        assert_eq!(flow.net, Money::from_minor(40_000));
        assert_eq!(flow.savings_rate, Some(80.0));
    }

    #[test]
    fn cash_flow_without_income_has_no_savings_rate() {
        let txns = vec![txn("1", 100, "Food", TransactionKind::Expense)];
        let flow = cash_flow(&txns);
        assert!(flow.net.is_negative());
        assert_eq!(flow.savings_rate, None);
    }

    #[test]
    fn spending_is_sorted_by_total_then_name() {
        let txns = vec![
            txn("1", 300, "Transport", TransactionKind::Expense),
            txn("2", 500, "Food", TransactionKind::Expense),
            txn("3", 300, "Bills", TransactionKind::Expense),
            txn("4", 200, "Food", TransactionKind::Expense),
            txn("5", 9_000, "Income", TransactionKind::Income),
        ];
        let breakdown = spending_by_category(&txns);
        let names: Vec<&str> = breakdown.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Food", "Bills", "Transport"]);
        assert_eq!(breakdown[0].total, Money::from_minor(700));
        assert_eq!(breakdown[0].transactions, 2);
        let shares: f64 = breakdown.iter().map(|c| c.share).sum();
        assert!((shares - 1.0).abs() < 1e-9);
    }

    #[test]
    fn admin_stats_count_active_users_and_volume() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let users = vec![
            AdminUser {
                id: RecordId::from("1"),
                name: "John Doe".into(),
                email: "john@example.com".into(),
                status: crate::domain::UserStatus::Active,
                join_date: date,
            },
            AdminUser {
                id: RecordId::from("2"),
                name: "Mike Johnson".into(),
                email: "mike@example.com".into(),
                status: crate::domain::UserStatus::Inactive,
                join_date: date,
            },
        ];
        let txns = vec![
            txn("1", 50_000, "Income", TransactionKind::Income),
            txn("2", 2_500, "Food", TransactionKind::Expense),
        ];
        let stats = admin_stats(&users, &txns);
        assert_eq!(stats.total_users, 2);
        assert_eq!(stats.active_users, 1);
        assert_eq!(stats.total_transactions, 2);
        assert_eq!(stats.total_volume, Money::from_minor(52_500));
    }
}
