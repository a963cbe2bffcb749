mod common;

use budge_core::currency::CurrencyCode;
use budge_core::domain::{Money, RawGoal, RawTransaction, TransactionKind};
use budge_core::errors::ValidationError;
use budge_core::fixtures::Dataset;
use budge_core::summary::{admin_stats, cash_flow, goals_overview, spending_by_category};
use budge_core::view::{fields, filter, ingest, FilterCriteria, Presenter};

#[test]
fn query_matches_description_case_insensitively() {
    let records = vec![
        common::transaction("1", "Grocery Shopping", "Food", TransactionKind::Expense, 250_000),
        common::transaction("2", "Uber Ride", "Transport", TransactionKind::Expense, 35_000),
    ];
    let criteria = FilterCriteria::new()
        .with_query("uber")
        .with_constraint(fields::CATEGORY, "All");

    let result = filter(&records, &criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id.as_str(), "2");
}

#[test]
fn goal_progress_and_completion() {
    let presenter = Presenter::default();
    let now = common::fixed_now();

    let emergency = presenter.derive(&common::goal("1", 6_500_000, 10_000_000, false), now);
    assert_eq!(emergency.progress_ratio, 0.65);
    assert!(!emergency.completed);
    assert_eq!(emergency.progress_label, "65.0%");

    let laptop = presenter.derive(&common::goal("3", 8_000_000, 8_000_000, false), now);
    assert_eq!(laptop.progress_ratio, 1.0);
    assert!(laptop.completed);
}

#[test]
fn demo_transactions_render_with_rupee_labels() {
    let data = Dataset::demo(&CurrencyCode::default());
    let presenter = Presenter::default();
    let views = presenter.derive_all(&data.transactions, common::fixed_now());

    assert_eq!(views[0].amount_label, "+₹50,000.00");
    assert_eq!(views[0].subtitle, "Income • 2024-01-15");
    assert_eq!(views[0].icon, "cash");
    assert_eq!(views[1].amount_label, "-₹2,500.00");
    assert_eq!(views[2].icon, "car");
    assert_eq!(views[3].age_days, 8);
}

#[test]
fn category_and_type_constraints_combine() {
    let data = Dataset::demo(&CurrencyCode::default());
    let shopping = FilterCriteria::new()
        .with_query("shop")
        .with_constraint(fields::CATEGORY, "Shopping")
        .with_constraint(fields::TYPE, "expense");
    let ids: Vec<&str> = filter(&data.transactions, &shopping)
        .iter()
        .map(|txn| txn.id.as_str())
        .collect();
    assert_eq!(ids, vec!["4"]);

    let completed = FilterCriteria::new().with_constraint(fields::STATUS, "completed");
    let goals = filter(&data.goals, &completed);
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].title, "New Laptop");

    let inactive = FilterCriteria::new().with_constraint(fields::STATUS, "inactive");
    let users = filter(&data.users, &inactive);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Mike Johnson");
}

#[test]
fn user_query_matches_name_or_email() {
    let data = Dataset::demo(&CurrencyCode::default());
    let by_email = FilterCriteria::new().with_query("JANE@");
    let hits = filter(&data.users, &by_email);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Jane Smith");
}

#[test]
fn ingest_reports_bad_records_and_keeps_the_rest() {
    let raw = vec![
        RawTransaction {
            id: "1".into(),
            description: "Salary".into(),
            amount: 50000.0,
            category: "Income".into(),
            kind: "income".into(),
            date: "2024-01-15".into(),
        },
        RawTransaction {
            id: "2".into(),
            description: "Refund".into(),
            amount: f64::NAN,
            category: "Shopping".into(),
            kind: "income".into(),
            date: "2024-01-16".into(),
        },
        RawTransaction {
            id: "1".into(),
            description: "Salary again".into(),
            amount: 100.0,
            category: "Income".into(),
            kind: "income".into(),
            date: "2024-01-17".into(),
        },
    ];

    let result = ingest(raw, &CurrencyCode::default());
    assert_eq!(result.accepted.len(), 1);
    assert_eq!(result.rejected.len(), 2);
    assert_eq!(result.rejected[0].index, 1);
    assert_eq!(
        result.rejected[0].error,
        ValidationError::NonFiniteAmount { field: "amount" }
    );
    assert_eq!(
        result.rejected[1].error,
        ValidationError::DuplicateId("1".into())
    );
}

#[test]
fn negative_goal_target_is_rejected_at_ingest() {
    let raw = vec![RawGoal {
        id: "1".into(),
        title: "Broken".into(),
        target_amount: -10.0,
        current_amount: 0.0,
        target_date: "2024-06-30".into(),
        category: "Savings".into(),
        completed: false,
    }];
    let result = ingest(raw, &CurrencyCode::default());
    assert!(result.accepted.is_empty());
    assert!(matches!(
        result.rejected[0].error,
        ValidationError::NegativeAmount { field: "targetAmount", .. }
    ));
}

#[test]
fn demo_summaries() {
    let data = Dataset::demo(&CurrencyCode::default());

    let flow = cash_flow(&data.transactions);
    assert_eq!(flow.income, Money::from_minor(5_000_000));
    assert_eq!(flow.expenses, Money::from_minor(405_000));

    let spending = spending_by_category(&data.transactions);
    assert_eq!(spending[0].category, "Food");
    assert_eq!(spending.len(), 3);

    let goals = goals_overview(&data.goals);
    assert_eq!((goals.active, goals.completed), (2, 1));

    let stats = admin_stats(&data.users, &data.transactions);
    assert_eq!(stats.active_users, 2);
    assert_eq!(stats.total_volume, Money::from_minor(5_405_000));
}
