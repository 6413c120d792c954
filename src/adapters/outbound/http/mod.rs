/// HTTP adapter for fetching the dataset
mod dataset_client;

pub use dataset_client::HttpDatasetSource;
