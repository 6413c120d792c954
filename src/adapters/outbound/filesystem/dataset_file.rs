use crate::dashboard::domain::PackageRecord;
use crate::ports::outbound::{parse_dataset, DatasetSource};
use crate::shared::error::DashboardError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// FileDatasetSource adapter for loading the dataset from a local file
///
/// This is the source used in development and by the deploy-time
/// validator, which reads the same file the site serves.
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the raw dataset text with security checks
    ///
    /// Used directly by the validator, which needs the unparsed document.
    pub fn read_raw(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(DashboardError::DatasetNotFound {
                path: self.path.clone(),
                suggestion: format!(
                    "No dataset file at \"{}\".\n   \
                     Pass the dataset location with --data or set `data:` in pkgdash.config.yml.",
                    self.path.display()
                ),
            }
            .into());
        }

        safe_read_file(&self.path, "dataset")
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Vec<PackageRecord>> {
        let raw = self.read_raw()?;
        parse_dataset(&raw).map_err(|e| {
            DashboardError::DatasetParse {
                source_name: self.path.display().to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

/// Safely read a file with security checks:
/// - Reject symbolic links
/// - Check file size limits
/// - Validate file is a regular file
pub(crate) fn safe_read_file(path: &Path, file_type: &str) -> Result<String> {
    validate_regular_file(path, file_type)?;

    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_type, e))?;
    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

    fs::read_to_string(path).map_err(|e| {
        DashboardError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
