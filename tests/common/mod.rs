#![allow(dead_code)]

use std::{fs, path::Path};

use budge_core::domain::{Goal, Money, RecordId, Transaction, TransactionKind};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Reference instant used by every derive in the integration suite.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 20, 10, 0, 0).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn transaction(
    id: &str,
    description: &str,
    category: &str,
    kind: TransactionKind,
    amount_minor: i64,
) -> Transaction {
    Transaction::new(
        RecordId::from(id),
        description,
        Money::from_minor(amount_minor),
        category,
        kind,
        date(2024, 1, 15),
    )
}

pub fn goal(id: &str, current_minor: i64, target_minor: i64, completed: bool) -> Goal {
    Goal {
        id: RecordId::from(id),
        title: format!("Goal {id}"),
        target_amount: Money::from_minor(target_minor),
        current_amount: Money::from_minor(current_minor),
        target_date: date(2024, 6, 30),
        category: "Savings".into(),
        completed,
    }
}

/// Writes a config file that makes assistant replies immediate and deterministic.
pub fn write_fast_assistant_config(base: &Path) {
    fs::create_dir_all(base).expect("create config dir");
    fs::write(
        base.join("config.json"),
        r#"{ "assistant": { "replyDelayMs": 0, "policy": "roundRobin", "seed": 7 } }"#,
    )
    .expect("write config");
}
