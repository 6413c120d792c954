use crate::dashboard::domain::QueryState;
use crate::dashboard::services::segmentation::StatusSummary;
use crate::dashboard::services::view_pipeline::DerivedView;

/// DashboardView - Response DTO from the render use case
///
/// One consistent snapshot of everything the presentation layer needs:
/// the status summary over the full dataset, the filter options, and the
/// derived (filtered/searched/sorted/paged) view. The embedded query state
/// carries the effective page number after clamping.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Size of the full raw dataset, independent of filters
    pub total: usize,
    /// Status breakdown of the full dataset
    pub summary: StatusSummary,
    /// Selectable options per filterable column, "All" first
    pub category_options: Vec<String>,
    pub type_options: Vec<String>,
    pub status_options: Vec<String>,
    /// The derived table view
    pub view: DerivedView,
    /// Query state with the effective page number
    pub query: QueryState,
}
