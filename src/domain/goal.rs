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

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_COMPLETED: &str = "completed";

/// A savings goal with a target amount and date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: RecordId,
    pub title: String,
    pub target_amount: Money,
    pub current_amount: Money,
    pub target_date: NaiveDate,
    pub category: String,
    /// Explicit completion flag; a goal also counts as complete once funded.
    pub completed: bool,
}

impl Goal {
    /// `completed` override, or a positive target that has been reached.
    pub fn is_completed(&self) -> bool {
        self.completed
            || (self.target_amount.is_positive() && self.current_amount >= self.target_amount)
    }

    /// Amount still missing, never below zero.
    pub fn remaining(&self) -> Money {
        if self.current_amount >= self.target_amount {
            Money::ZERO
        } else {
            self.target_amount - self.current_amount
        }
    }

    fn status(&self) -> &'static str {
        if self.is_completed() {
            STATUS_COMPLETED
        } else {
            STATUS_ACTIVE
        }
    }
}

impl Identifiable for Goal {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl NamedEntity for Goal {
    fn name(&self) -> &str {
        &self.title
    }
}

impl Filterable for Goal {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            fields::CATEGORY => Some(self.category.as_str()),
            fields::STATUS => Some(self.status()),
            _ => None,
        }
    }
}

/// Goal as supplied by an external data source, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGoal {
    pub id: String,
    pub title: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: String,
    pub category: String,
    #[serde(default)]
    pub completed: bool,
}

impl IntoRecord for RawGoal {
    type Record = Goal;

    fn raw_id(&self) -> &str {
        &self.id
    }

    fn into_record(self, currency: &CurrencyCode) -> Result<Goal, ValidationError> {
        let precision = minor_units_for(currency.as_str());
        Ok(Goal {
            id: require_id(self.id)?,
            title: require_text("title", self.title)?,
            target_amount: Money::non_negative("targetAmount", self.target_amount, precision)?,
            current_amount: Money::non_negative("currentAmount", self.current_amount, precision)?,
            target_date: parse_date("targetDate", &self.target_date)?,
            category: require_text("category", self.category)?,
            completed: self.completed,
        })
    }
}
