//! The list view-model engine: validate raw records, filter them, and derive
//! display views.

pub mod derive;
pub mod filter;
pub mod ingest;

pub use derive::{
    category_icon, progress_ratio, AdminUserView, Derive, GoalView, MessageView, Presenter,
    TransactionView,
};
pub use filter::{fields, filter, CategoricalConstraint, FilterCriteria, Filterable, Selection, ALL};
pub use ingest::{ingest, Ingested, IntoRecord, Rejected};
