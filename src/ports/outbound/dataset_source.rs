use crate::dashboard::domain::PackageRecord;
use crate::shared::Result;
use async_trait::async_trait;

/// DatasetSource port for loading the package enablement dataset
///
/// This port abstracts where the dataset comes from (an HTTP endpoint, a
/// local file, a test double). A source produces the complete record
/// sequence for one load cycle; the dashboard never patches a loaded
/// dataset in place, it replaces it wholesale on the next load.
#[async_trait]
pub trait DatasetSource {
    /// Human-readable description of the source, used in progress and
    /// error messages (a URL or a file path).
    fn describe(&self) -> String;

    /// Loads and parses the dataset into records
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source cannot be reached or read
    /// - The payload is not valid YAML
    async fn load(&self) -> Result<Vec<PackageRecord>>;
}

#[async_trait]
impl DatasetSource for Box<dyn DatasetSource + Send + Sync> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    async fn load(&self) -> Result<Vec<PackageRecord>> {
        (**self).load().await
    }
}

/// Parses raw dataset text into records.
///
/// A parseable document whose top level is not a sequence degrades to an
/// empty dataset rather than an error; every downstream derivation is
/// well-defined on zero records. Malformed YAML is still an error.
pub fn parse_dataset(raw: &str) -> Result<Vec<PackageRecord>> {
    let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(raw)
        .map_err(|e| anyhow::anyhow!("Invalid YAML: {}", e))?;

    match value {
        serde_yaml_ng::Value::Sequence(_) => serde_yaml_ng::from_value(value)
            .map_err(|e| anyhow::anyhow!("Record does not match the expected shape: {}", e)),
        _ => Ok(Vec::new()),
    }
}
