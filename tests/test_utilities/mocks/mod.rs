/// Mock implementations for testing
mod mock_dataset_source;
mod mock_progress_reporter;

pub use mock_dataset_source::MockDatasetSource;
pub use mock_progress_reporter::MockProgressReporter;
