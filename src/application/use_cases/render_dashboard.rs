use crate::application::dto::{DashboardView, ViewRequest};
use crate::dashboard::domain::FilterField;
use crate::dashboard::services::segmentation::summarize;
use crate::dashboard::services::view_pipeline::{derive_view, filter_options};
use crate::ports::outbound::{DatasetSource, ProgressReporter};
use crate::shared::Result;

/// RenderDashboardUseCase - derives one consistent dashboard snapshot
///
/// Loads the dataset through the injected source, then runs every
/// derivation over that single snapshot: the status summary (always over
/// the full dataset), the filter options, and the
/// filtered/searched/sorted/paged table view. A load failure leaves no
/// partial view behind; the caller either gets a complete snapshot or an
/// error.
///
/// # Type Parameters
/// * `DS` - DatasetSource implementation
/// * `PR` - ProgressReporter implementation
pub struct RenderDashboardUseCase<DS, PR> {
    dataset_source: DS,
    progress_reporter: PR,
}

impl<DS, PR> RenderDashboardUseCase<DS, PR>
where
    DS: DatasetSource,
    PR: ProgressReporter,
{
    /// Creates a new RenderDashboardUseCase with injected dependencies
    pub fn new(dataset_source: DS, progress_reporter: PR) -> Self {
        Self {
            dataset_source,
            progress_reporter,
        }
    }

    /// Executes the render use case
    ///
    /// # Returns
    /// A complete [`DashboardView`] snapshot; its query state carries the
    /// effective page number after clamping.
    pub async fn execute(&self, request: ViewRequest) -> Result<DashboardView> {
        self.progress_reporter.report(&format!(
            "📥 Loading dataset from: {}",
            self.dataset_source.describe()
        ));

        let records = self.dataset_source.load().await?;

        self.progress_reporter
            .report(&format!("✅ Loaded {} record(s)", records.len()));

        let summary = summarize(&records);
        let category_options = filter_options(&records, FilterField::Category);
        let type_options = filter_options(&records, FilterField::Type);
        let status_options = filter_options(&records, FilterField::Status);

        let view = derive_view(&records, &request.query, request.page_size);

        let mut query = request.query;
        query.page = view.page();

        Ok(DashboardView {
            total: records.len(),
            summary,
            category_options,
            type_options,
            status_options,
            view,
            query,
        })
    }
}
