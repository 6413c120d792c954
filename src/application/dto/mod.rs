/// Data transfer objects between the CLI surface and the use cases
mod dashboard_view;
mod view_request;

pub use dashboard_view::DashboardView;
pub use view_request::ViewRequest;
