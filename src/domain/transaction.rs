use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::{minor_units_for, CurrencyCode};
use crate::domain::common::{
    parse_date, require_id, require_text, Identifiable, NamedEntity, RecordId,
};
use crate::domain::money::Money;
use crate::errors::ValidationError;
use crate::view::filter::{fields, Filterable};
use crate::view::ingest::IntoRecord;

/// Direction of money flow for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    pub fn sign(self) -> char {
        match self {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(ValidationError::UnknownVariant {
                field: "type",
                value: value.to_string(),
            }),
        }
    }
}

/// A validated income or expense entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: RecordId,
    pub description: String,
    pub amount: Money,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        id: impl Into<RecordId>,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            amount,
            category: category.into(),
            kind,
            date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl NamedEntity for Transaction {
    fn name(&self) -> &str {
        &self.description
    }
}

impl Filterable for Transaction {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.description.as_str()]
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            fields::CATEGORY => Some(self.category.as_str()),
            fields::TYPE => Some(self.kind.as_str()),
            _ => None,
        }
    }
}

/// Transaction as supplied by an external data source, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
}

impl IntoRecord for RawTransaction {
    type Record = Transaction;

    fn raw_id(&self) -> &str {
        &self.id
    }

    fn into_record(self, currency: &CurrencyCode) -> Result<Transaction, ValidationError> {
        let precision = minor_units_for(currency.as_str());
        Ok(Transaction {
            id: require_id(self.id)?,
            description: require_text("description", self.description)?,
            amount: Money::non_negative("amount", self.amount, precision)?,
            category: require_text("category", self.category)?,
            kind: self.kind.parse()?,
            date: parse_date("date", &self.date)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawTransaction {
        RawTransaction {
            id: "2".into(),
            description: "Grocery Shopping".into(),
            amount: 2500.0,
            category: "Food".into(),
            kind: "expense".into(),
            date: "2024-01-14".into(),
        }
    }

    #[test]
    fn converts_valid_raw_transaction() {
        let txn = raw().into_record(&CurrencyCode::new("INR")).unwrap();
        assert_eq!(txn.amount.minor(), 250_000);
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 1, 14).unwrap());
    }

    #[test]
    fn rejects_bad_fields() {
        let currency = CurrencyCode::new("INR");

        let mut negative = raw();
        negative.amount = -5.0;
        assert!(matches!(
            negative.into_record(&currency),
            Err(ValidationError::NegativeAmount { field: "amount", .. })
        ));

        let mut bad_date = raw();
        bad_date.date = "14/01/2024".into();
        assert!(matches!(
            bad_date.into_record(&currency),
            Err(ValidationError::InvalidDate { field: "date", .. })
        ));

        let mut bad_kind = raw();
        bad_kind.kind = "transfer".into();
        assert!(matches!(
            bad_kind.into_record(&currency),
            Err(ValidationError::UnknownVariant { field: "type", .. })
        ));
    }

    #[test]
    fn exposes_filter_fields() {
        let txn = raw().into_record(&CurrencyCode::new("INR")).unwrap();
        assert_eq!(txn.field(fields::CATEGORY), Some("Food"));
        assert_eq!(txn.field(fields::TYPE), Some("expense"));
        assert_eq!(txn.field("merchant"), None);
    }

    #[test]
    fn deserializes_camel_case_json() {
        let json = r#"{
            "id": "3",
            "description": "Uber Ride",
            "amount": 350,
            "category": "Transport",
            "type": "expense",
            "date": "2024-01-13"
        }"#;
        let raw: RawTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(raw.kind, "expense");
        assert_eq!(raw.amount, 350.0);
    }
}
