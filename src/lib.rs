//! pkgdash - Terminal dashboard for RISC-V package enablement tracking
//!
//! This library loads the package enablement dataset (a YAML sequence of
//! records served as a static file), derives searchable, filterable,
//! sortable, paginated views over it, summarizes status coverage with a
//! minimum-visible-width strip, and exports the current view as CSV. A
//! standalone validation use case gates the dataset against a JSON Schema
//! before deployment.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture:
//!
//! - **Domain Layer** (`dashboard`): record model, query state, and the
//!   pure derivation services (view pipeline, status segmentation)
//! - **Application Layer** (`application`): use cases and DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP/file dataset sources, console
//!   progress reporting, and text/CSV formatters
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pkgdash::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let source = FileDatasetSource::new("public/data.yaml");
//! let reporter = StderrProgressReporter::new();
//!
//! let use_case = RenderDashboardUseCase::new(source, reporter);
//! let dashboard = use_case.execute(ViewRequest::default()).await?;
//!
//! println!("{}", SummaryFormatter::format(&dashboard.summary));
//! println!("{}", TableFormatter::format(&dashboard));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dashboard;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileDatasetSource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CsvExport, CsvExporter, SummaryFormatter, TableFormatter,
    };
    pub use crate::adapters::outbound::http::HttpDatasetSource;
    pub use crate::application::dto::{DashboardView, ViewRequest};
    pub use crate::application::use_cases::{
        load_schema, ExportCsvUseCase, RenderDashboardUseCase, ValidateDatasetUseCase,
        ValidationReport, WatchDashboardUseCase,
    };
    pub use crate::dashboard::domain::{
        FilterField, FilterSelection, PackageRecord, QueryEvent, QueryState, RecordId,
        SortDirection, SortKey,
    };
    pub use crate::dashboard::services::segmentation::{StatusSegment, StatusSummary};
    pub use crate::dashboard::services::view_pipeline::DerivedView;
    pub use crate::ports::outbound::{DatasetSource, OutputPresenter, ProgressReporter};
    pub use crate::shared::Result;
}
