/// Domain models for the dashboard
pub mod query;
pub mod record;

pub use query::{
    FilterField, FilterSelection, QueryEvent, QueryState, SortDirection, SortKey,
};
pub use record::{PackageRecord, RecordId};
