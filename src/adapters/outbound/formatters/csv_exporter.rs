use crate::dashboard::domain::PackageRecord;
use chrono::{DateTime, Utc};

/// Fixed CSV header, matching the published export format.
const CSV_HEADER: &str = "ID,Category,Software,Status,RISC-V Enablement";

/// A completed CSV export: a timestamped filename plus the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

/// CsvExporter adapter serializing the full sorted result set
///
/// The export always covers the entire filtered-and-sorted set, not the
/// current page. An empty result set produces no export at all.
pub struct CsvExporter;

impl CsvExporter {
    /// Serializes records to CSV, or `None` when there is nothing to export
    ///
    /// The filename embeds the export timestamp as an ISO 8601 string with
    /// `:` and `.` replaced by `-` so it is safe on every filesystem.
    pub fn export(records: &[PackageRecord], exported_at: DateTime<Utc>) -> Option<CsvExport> {
        if records.is_empty() {
            return None;
        }

        let mut content = String::new();
        content.push_str(CSV_HEADER);
        content.push('\n');

        for record in records {
            let row = [
                record.id.to_string(),
                record.category.clone(),
                record.software.clone(),
                record.status.clone().unwrap_or_default(),
                record.riscv_enablement.clone().unwrap_or_default(),
            ];
            let line = row
                .iter()
                .map(|field| escape_csv(field))
                .collect::<Vec<_>>()
                .join(",");
            content.push_str(&line);
            content.push('\n');
        }

        let stamp = exported_at
            .format("%Y-%m-%dT%H:%M:%S%.3fZ")
            .to_string()
            .replace([':', '.'], "-");

        Some(CsvExport {
            filename: format!("packages-{}.csv", stamp),
            content,
        })
    }
}

/// Standard CSV quoting: fields containing separators, quotes, or newlines
/// are wrapped in double quotes with embedded quotes doubled.
fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        value.to_string()
    }
}
