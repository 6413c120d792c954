/// Application use cases
pub mod export_csv;
pub mod render_dashboard;
pub mod validate_dataset;
pub mod watch_dashboard;

pub use export_csv::ExportCsvUseCase;
pub use render_dashboard::RenderDashboardUseCase;
pub use validate_dataset::{
    load_schema, ValidateDatasetUseCase, ValidationIssue, ValidationReport,
};
pub use watch_dashboard::WatchDashboardUseCase;
