use crate::ports::outbound::ProgressReporter;
use crate::shared::error::DashboardError;
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;

/// One record that failed schema validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Zero-based index of the record in the dataset sequence
    pub index: usize,
    /// Every schema violation found on that record
    pub errors: Vec<String>,
}

/// Outcome of validating a dataset against its schema.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Number of records checked
    pub checked: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Loads and parses a JSON Schema document from disk
pub fn load_schema(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path).map_err(|e| DashboardError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    serde_json::from_str(&content).with_context(|| {
        format!(
            "Failed to parse schema file: {}\n\n💡 Hint: Ensure the file contains valid JSON.",
            path.display()
        )
    })
}

/// ValidateDatasetUseCase - the deploy-time gate for the dataset
///
/// Validates every record of the dataset against a JSON Schema before the
/// site ships. This runs standalone; the live dashboard trusts the dataset
/// shape and never validates at load time. Unlike the viewer's defensive
/// guard, a non-sequence top level here is a hard failure: a deploy gate
/// must reject a malformed file, not degrade it to zero records.
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct ValidateDatasetUseCase<PR> {
    progress_reporter: PR,
}

impl<PR> ValidateDatasetUseCase<PR>
where
    PR: ProgressReporter,
{
    pub fn new(progress_reporter: PR) -> Self {
        Self { progress_reporter }
    }

    /// Executes the validation use case
    ///
    /// # Arguments
    /// * `dataset_raw` - The unparsed dataset YAML text
    /// * `schema` - The compiled-from JSON Schema document
    ///
    /// # Returns
    /// A [`ValidationReport`] listing every failing record with its index.
    /// Schema-compile failures and a non-sequence dataset are errors, not
    /// report entries.
    pub fn execute(
        &self,
        dataset_raw: &str,
        schema: &serde_json::Value,
    ) -> Result<ValidationReport> {
        self.progress_reporter
            .report("✅ Starting dataset schema validation…");

        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(dataset_raw)
            .map_err(|e| anyhow::anyhow!("Invalid YAML in dataset: {}", e))?;

        let serde_yaml_ng::Value::Sequence(items) = value else {
            anyhow::bail!(
                "The dataset must be a top-level array of objects.\n\n\
                 💡 Hint: Each package record belongs at the top level, starting with '- id: …'"
            );
        };

        let validator = jsonschema::validator_for(schema).map_err(|e| {
            DashboardError::SchemaCompile {
                details: e.to_string(),
            }
        })?;

        let mut report = ValidationReport {
            checked: items.len(),
            issues: Vec::new(),
        };

        for (index, item) in items.iter().enumerate() {
            let json = serde_json::to_value(item)
                .with_context(|| format!("Record at index {} cannot be represented as JSON", index))?;

            let errors: Vec<String> = validator.iter_errors(&json).map(|e| e.to_string()).collect();
            if !errors.is_empty() {
                self.progress_reporter
                    .report_error(&format!("❌ Validation failed for item at index {}:", index));
                for error in &errors {
                    self.progress_reporter.report_error(&format!("  - {}", error));
                }
                report.issues.push(ValidationIssue { index, errors });
            }
        }

        if report.is_valid() {
            self.progress_reporter
                .report_completion("✅ Dataset schema validation passed.");
        } else {
            self.progress_reporter.report_error(&format!(
                "❌ Dataset schema validation failed: {} of {} record(s) invalid.",
                report.issues.len(),
                report.checked
            ));
        }

        Ok(report)
    }
}
