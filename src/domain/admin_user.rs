use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;
use crate::domain::common::{
    parse_date, require_id, require_text, Identifiable, NamedEntity, RecordId,
};
use crate::errors::ValidationError;
use crate::view::filter::{fields, Filterable};
use crate::view::ingest::IntoRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            _ => Err(ValidationError::UnknownVariant {
                field: "status",
                value: value.to_string(),
            }),
        }
    }
}

/// A platform account shown on the admin overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub join_date: NaiveDate,
}

impl AdminUser {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

impl Identifiable for AdminUser {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl NamedEntity for AdminUser {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Filterable for AdminUser {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            fields::STATUS => Some(self.status.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: String,
    pub join_date: String,
}

impl IntoRecord for RawAdminUser {
    type Record = AdminUser;

    fn raw_id(&self) -> &str {
        &self.id
    }

    fn into_record(self, _currency: &CurrencyCode) -> Result<AdminUser, ValidationError> {
        Ok(AdminUser {
            id: require_id(self.id)?,
            name: require_text("name", self.name)?,
            email: validate_email(self.email)?,
            status: self.status.parse()?,
            join_date: parse_date("joinDate", &self.join_date)?,
        })
    }
}

/// Shallow shape check: one `@` with text on both sides and a dotted domain.
fn validate_email(email: String) -> Result<String, ValidationError> {
    let trimmed = email.trim();
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if valid {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::InvalidEmail(email))
    }
}
