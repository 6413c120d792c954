/// Filesystem adapters for dataset input and rendered output
mod dataset_file;
mod file_writer;

pub use dataset_file::FileDatasetSource;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
