use async_trait::async_trait;
use pkgdash::prelude::*;

/// Mock DatasetSource serving a fixed record sequence or a fixed failure
pub struct MockDatasetSource {
    records: Vec<PackageRecord>,
    failure: Option<String>,
}

impl MockDatasetSource {
    pub fn new(records: Vec<PackageRecord>) -> Self {
        Self {
            records,
            failure: None,
        }
    }

    /// A source whose every load fails with the given message
    pub fn failing(message: &str) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(message.to_string()),
        }
    }

    /// Builds a source from inline YAML, going through the real parser
    pub fn from_yaml(yaml: &str) -> Self {
        let records = pkgdash::ports::outbound::parse_dataset(yaml).expect("fixture YAML parses");
        Self::new(records)
    }
}

#[async_trait]
impl DatasetSource for MockDatasetSource {
    fn describe(&self) -> String {
        "mock://dataset".to_string()
    }

    async fn load(&self) -> Result<Vec<PackageRecord>> {
        match &self.failure {
            Some(message) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(self.records.clone()),
        }
    }
}
