//! Free-text and categorical filtering over record collections.

use serde::{Deserialize, Serialize};

/// Sentinel selection meaning "no constraint".
pub const ALL: &str = "All";

/// Names of the categorical fields records expose to [`Filterable::field`].
pub mod fields {
    pub const CATEGORY: &str = "category";
    pub const TYPE: &str = "type";
    pub const STATUS: &str = "status";
}

/// Records that can be matched by a [`FilterCriteria`].
pub trait Filterable {
    /// Text fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of a categorical field, or `None` when the record has no such field.
    fn field(&self, name: &str) -> Option<&str>;
}

/// Value chosen for one categorical field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Parses a selector value. The `"All"` sentinel and the empty string are
    /// unconstrained; anything else is kept exactly as given.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == ALL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => value == Some(expected.as_str()),
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::parse(value)
    }
}

impl From<Option<&str>> for Selection {
    fn from(value: Option<&str>) -> Self {
        value.map(Selection::parse).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalConstraint {
    pub field: String,
    pub selection: Selection,
}

/// Combined free-text and categorical constraints for a list screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    query: Option<String>,
    constraints: Vec<CategoricalConstraint>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_constraint(
        mut self,
        field: impl Into<String>,
        selection: impl Into<Selection>,
    ) -> Self {
        self.constraints.push(CategoricalConstraint {
            field: field.into(),
            selection: selection.into(),
        });
        self
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn constraints(&self) -> &[CategoricalConstraint] {
        &self.constraints
    }

    /// True when neither the query nor any constraint restricts the result.
    pub fn is_unconstrained(&self) -> bool {
        self.needle().is_none() && self.constraints.iter().all(|c| c.selection.is_all())
    }

    pub fn matches<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        self.matches_with(record, self.needle().as_deref())
    }

    fn needle(&self) -> Option<String> {
        self.query
            .as_deref()
            .filter(|query| !query.is_empty())
            .map(str::to_lowercase)
    }

    fn matches_with<R: Filterable + ?Sized>(&self, record: &R, needle: Option<&str>) -> bool {
        let text_ok = match needle {
            None => true,
            Some(needle) => record
                .search_fields()
                .iter()
                .any(|text| text.to_lowercase().contains(needle)),
        };
        text_ok
            && self
                .constraints
                .iter()
                .all(|constraint| constraint.selection.matches(record.field(&constraint.field)))
    }
}

/// Returns the records matching `criteria`, preserving their input order.
pub fn filter<'a, R: Filterable>(records: &'a [R], criteria: &FilterCriteria) -> Vec<&'a R> {
    let needle = criteria.needle();
    let matched: Vec<&R> = records
        .iter()
        .filter(|record| criteria.matches_with(*record, needle.as_deref()))
        .collect();
    tracing::debug!(
        total = records.len(),
        matched = matched.len(),
        query = criteria.query().unwrap_or_default(),
        "filtered records"
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        category: &'static str,
    }

    impl Filterable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }

        fn field(&self, name: &str) -> Option<&str> {
            (name == fields::CATEGORY).then_some(self.category)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Grocery Shopping",
                category: "Food",
            },
            Row {
                name: "Uber Ride",
                category: "Transport",
            },
            Row {
                name: "Online Shopping",
                category: "Shopping",
            },
        ]
    }

    fn names(matched: &[&Row]) -> Vec<&'static str> {
        matched.iter().map(|row| row.name).collect()
    }

    #[test]
    fn sentinel_and_unset_selections_are_unconstrained() {
        assert_eq!(Selection::parse("All"), Selection::All);
        assert_eq!(Selection::parse(""), Selection::All);
        assert_eq!(Selection::parse("Food"), Selection::Only("Food".into()));
        assert_eq!(Selection::from(None), Selection::All);
        assert!(FilterCriteria::new()
            .with_query("")
            .with_constraint(fields::CATEGORY, ALL)
            .is_unconstrained());
    }

    #[test]
    fn selections_keep_surrounding_whitespace() {
        assert_eq!(Selection::parse(" All"), Selection::Only(" All".into()));
        assert_eq!(Selection::parse("Food "), Selection::Only("Food ".into()));
        let criteria = FilterCriteria::new().with_constraint(fields::CATEGORY, " Food");
        assert!(names(&filter(&rows(), &criteria)).is_empty());
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let rows = rows();
        let criteria = FilterCriteria::new().with_query("SHOP");
        assert_eq!(
            names(&filter(&rows, &criteria)),
            vec!["Grocery Shopping", "Online Shopping"]
        );
    }

    #[test]
    fn constraints_combine_with_and() {
        let rows = rows();
        let criteria = FilterCriteria::new()
            .with_query("shopping")
            .with_constraint(fields::CATEGORY, "Food");
        assert_eq!(names(&filter(&rows, &criteria)), vec!["Grocery Shopping"]);

        let contradictory = FilterCriteria::new()
            .with_constraint(fields::CATEGORY, "Food")
            .with_constraint(fields::CATEGORY, "Transport");
        assert!(filter(&rows, &contradictory).is_empty());
    }

    #[test]
    fn category_match_is_exact() {
        let rows = rows();
        let criteria = FilterCriteria::new().with_constraint(fields::CATEGORY, "food");
        assert!(filter(&rows, &criteria).is_empty());
    }

    #[test]
    fn unknown_field_never_matches_a_concrete_selection() {
        let rows = rows();
        let criteria = FilterCriteria::new().with_constraint("merchant", "Uber");
        assert!(filter(&rows, &criteria).is_empty());

        let open = FilterCriteria::new().with_constraint("merchant", ALL);
        assert_eq!(filter(&rows, &open).len(), 3);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let rows: Vec<Row> = Vec::new();
        assert!(filter(&rows, &FilterCriteria::new().with_query("x")).is_empty());
    }
}
