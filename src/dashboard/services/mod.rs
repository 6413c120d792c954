/// Domain services - the derivation pipeline and the status summary
pub mod segmentation;
pub mod view_pipeline;

pub use segmentation::{StatusSegment, StatusSummary};
pub use view_pipeline::DerivedView;
