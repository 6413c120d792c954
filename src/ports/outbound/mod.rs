/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod dataset_source;
pub mod output_presenter;
pub mod progress_reporter;

pub use dataset_source::{parse_dataset, DatasetSource};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
