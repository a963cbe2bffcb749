//! Boundary validation of raw records supplied by a data source.

use std::collections::HashSet;

use crate::currency::CurrencyCode;
use crate::domain::Identifiable;
use crate::errors::ValidationError;

/// Raw input that can be validated into a record.
pub trait IntoRecord {
    type Record: Identifiable;

    /// Identifier as supplied, used to label rejections.
    fn raw_id(&self) -> &str;

    fn into_record(self, currency: &CurrencyCode) -> Result<Self::Record, ValidationError>;
}

/// A raw record that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejected {
    /// Position of the record in the submitted batch.
    pub index: usize,
    pub id: String,
    pub error: ValidationError,
}

/// Outcome of validating a batch: one bad record never invalidates the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingested<T> {
    pub accepted: Vec<T>,
    pub rejected: Vec<Rejected>,
}

impl<T> Ingested<T> {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Validates every record of `raw`, keeping input order for the accepted ones.
///
/// Amounts are interpreted in `currency`'s major units. A record whose id was
/// already accepted earlier in the batch is rejected with
/// [`ValidationError::DuplicateId`].
pub fn ingest<R: IntoRecord>(raw: Vec<R>, currency: &CurrencyCode) -> Ingested<R::Record> {
    let mut accepted = Vec::with_capacity(raw.len());
    let mut rejected = Vec::new();
    let mut seen = HashSet::new();

    for (index, item) in raw.into_iter().enumerate() {
        let id = item.raw_id().to_string();
        let result = item.into_record(currency).and_then(|record| {
            if seen.insert(record.id().as_str().to_string()) {
                Ok(record)
            } else {
                Err(ValidationError::DuplicateId(record.id().to_string()))
            }
        });
        match result {
            Ok(record) => accepted.push(record),
            Err(error) => {
                tracing::warn!(index, id = %id, %error, "rejected record");
                rejected.push(Rejected { index, id, error });
            }
        }
    }

    tracing::debug!(
        accepted = accepted.len(),
        rejected = rejected.len(),
        "ingested batch"
    );
    Ingested { accepted, rejected }
}
