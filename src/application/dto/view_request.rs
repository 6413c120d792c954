use crate::dashboard::domain::QueryState;
use crate::dashboard::services::view_pipeline::DEFAULT_PAGE_SIZE;

/// ViewRequest - Internal request DTO for the dashboard use cases
///
/// Carries the user's query state plus the page size resolved from
/// configuration and flags.
#[derive(Debug, Clone)]
pub struct ViewRequest {
    pub query: QueryState,
    pub page_size: usize,
}

impl ViewRequest {
    pub fn new(query: QueryState, page_size: usize) -> Self {
        Self { query, page_size }
    }
}

impl Default for ViewRequest {
    fn default() -> Self {
        Self {
            query: QueryState::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
