use crate::adapters::outbound::formatters::{CsvExport, CsvExporter};
use crate::application::dto::ViewRequest;
use crate::dashboard::services::view_pipeline::derive_view;
use crate::ports::outbound::{DatasetSource, ProgressReporter};
use crate::shared::Result;
use chrono::Utc;

/// ExportCsvUseCase - serializes the current view as a CSV export
///
/// The export covers the entire filtered-and-sorted result set, never just
/// the visible page. An empty result set produces no export (`Ok(None)`),
/// matching the dashboard's no-op export button on an empty table.
///
/// # Type Parameters
/// * `DS` - DatasetSource implementation
/// * `PR` - ProgressReporter implementation
pub struct ExportCsvUseCase<DS, PR> {
    dataset_source: DS,
    progress_reporter: PR,
}

impl<DS, PR> ExportCsvUseCase<DS, PR>
where
    DS: DatasetSource,
    PR: ProgressReporter,
{
    /// Creates a new ExportCsvUseCase with injected dependencies
    pub fn new(dataset_source: DS, progress_reporter: PR) -> Self {
        Self {
            dataset_source,
            progress_reporter,
        }
    }

    /// Executes the export use case
    ///
    /// # Returns
    /// `Some(CsvExport)` with a timestamped filename, or `None` when the
    /// filtered view holds no records.
    pub async fn execute(&self, request: ViewRequest) -> Result<Option<CsvExport>> {
        self.progress_reporter.report(&format!(
            "📥 Loading dataset from: {}",
            self.dataset_source.describe()
        ));

        let records = self.dataset_source.load().await?;
        let view = derive_view(&records, &request.query, request.page_size);

        let export = CsvExporter::export(view.sorted(), Utc::now());
        match &export {
            Some(export) => self.progress_reporter.report(&format!(
                "📝 Prepared {} record(s) for {}",
                view.len(),
                export.filename
            )),
            None => self
                .progress_reporter
                .report_error("⚠️  Nothing to export: no records match the current view."),
        }

        Ok(export)
    }
}
