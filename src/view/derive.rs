//! Display-ready views computed from validated records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::assistant::{Message, MessageId, Sender};
use crate::config::Config;
use crate::currency::{
    format_currency_value, format_date, format_time, CurrencyCode, FormatOptions, LocaleConfig,
};
use crate::domain::{AdminUser, Goal, Money, RecordId, Transaction, TransactionKind, UserStatus};

/// Records that can be turned into a display view.
///
/// Implementations are pure: the same record, presenter and `now` always give
/// the same view, and the record is never modified.
pub trait Derive {
    type View;

    fn derive(&self, presenter: &Presenter, now: DateTime<Utc>) -> Self::View;
}

/// Formatting settings shared by every derived view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Presenter {
    locale: LocaleConfig,
    currency: CurrencyCode,
    options: FormatOptions,
}

impl Presenter {
    pub fn new(locale: LocaleConfig, currency: CurrencyCode, options: FormatOptions) -> Self {
        Self {
            locale,
            currency,
            options,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.locale.clone(),
            config.currency.clone(),
            config.format.clone(),
        )
    }

    pub fn locale(&self) -> &LocaleConfig {
        &self.locale
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn money(&self, amount: Money) -> String {
        format_currency_value(amount, &self.currency, &self.locale, &self.options)
    }

    pub fn date(&self, date: NaiveDate) -> String {
        format_date(&self.locale, date)
    }

    pub fn time(&self, timestamp: DateTime<Utc>) -> String {
        format_time(&self.locale, timestamp)
    }

    pub fn derive<R: Derive + ?Sized>(&self, record: &R, now: DateTime<Utc>) -> R::View {
        record.derive(self, now)
    }

    pub fn derive_all<'a, R, I>(&self, records: I, now: DateTime<Utc>) -> Vec<R::View>
    where
        R: Derive + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        records
            .into_iter()
            .map(|record| record.derive(self, now))
            .collect()
    }
}

/// `current / target` clamped to `[0, 1]`; zero when the target is not positive.
pub fn progress_ratio(current: Money, target: Money) -> f64 {
    if !target.is_positive() {
        return 0.0;
    }
    (current.minor() as f64 / target.minor() as f64).clamp(0.0, 1.0)
}

/// Icon name shown next to a transaction category.
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Income" => "cash",
        "Food" => "food",
        "Transport" => "car",
        "Shopping" => "shopping",
        "Bills" => "receipt",
        _ => "cash",
    }
}

fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    pub id: RecordId,
    pub description: String,
    pub category: String,
    pub kind: TransactionKind,
    pub amount_label: String,
    pub date_label: String,
    pub subtitle: String,
    pub icon: &'static str,
    /// Days between the transaction date and `now`; negative for future dates.
    pub age_days: i64,
}

impl Derive for Transaction {
    type View = TransactionView;

    fn derive(&self, presenter: &Presenter, now: DateTime<Utc>) -> TransactionView {
        let date_label = presenter.date(self.date);
        TransactionView {
            id: self.id.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            kind: self.kind,
            amount_label: format!("{}{}", self.kind.sign(), presenter.money(self.amount.abs())),
            subtitle: format!("{} • {}", self.category, date_label),
            date_label,
            icon: category_icon(&self.category),
            age_days: days_between(self.date, now.date_naive()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalView {
    pub id: RecordId,
    pub title: String,
    pub category: String,
    pub current_label: String,
    pub target_label: String,
    pub remaining_label: String,
    pub progress_ratio: f64,
    pub progress_label: String,
    pub completed: bool,
    pub target_date_label: String,
    /// Days from `now` until the target date; negative once overdue.
    pub days_remaining: i64,
}

impl Derive for Goal {
    type View = GoalView;

    fn derive(&self, presenter: &Presenter, now: DateTime<Utc>) -> GoalView {
        let ratio = progress_ratio(self.current_amount, self.target_amount);
        GoalView {
            id: self.id.clone(),
            title: self.title.clone(),
            category: self.category.clone(),
            current_label: presenter.money(self.current_amount),
            target_label: presenter.money(self.target_amount),
            remaining_label: presenter.money(self.remaining()),
            progress_ratio: ratio,
            progress_label: format!("{:.1}%", ratio * 100.0),
            completed: self.is_completed(),
            target_date_label: presenter.date(self.target_date),
            days_remaining: days_between(now.date_naive(), self.target_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserView {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub status_label: String,
    pub join_date_label: String,
    pub member_for_days: i64,
}

impl Derive for AdminUser {
    type View = AdminUserView;

    fn derive(&self, presenter: &Presenter, now: DateTime<Utc>) -> AdminUserView {
        AdminUserView {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            status: self.status,
            status_label: self.status.to_string(),
            join_date_label: presenter.date(self.join_date),
            member_for_days: days_between(self.join_date, now.date_naive()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: MessageId,
    pub sender: Sender,
    pub author: &'static str,
    pub text: String,
    pub time_label: String,
}

impl Derive for Message {
    type View = MessageView;

    fn derive(&self, presenter: &Presenter, _now: DateTime<Utc>) -> MessageView {
        MessageView {
            id: self.id,
            sender: self.sender,
            author: self.sender.label(),
            text: self.text.clone(),
            time_label: presenter.time(self.created_at),
        }
    }
}
