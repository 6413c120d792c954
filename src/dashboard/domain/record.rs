use crate::dashboard::domain::query::SortKey;
use serde::Deserialize;
use std::fmt;

/// Record identifier as it appears in the dataset.
///
/// The dataset allows both numeric and string ids. Uniqueness is the
/// dataset's responsibility (enforced by the deploy-time validator, not
/// here); duplicate ids are tolerated by every derivation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Text(String::new())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One tracked software package from the enablement dataset.
///
/// All fields except `id` are optional in the wire format; missing values
/// deserialize to empty strings or `None` so a partially filled record
/// still flows through every derivation without error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PackageRecord {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub software: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub package_type: String,
    #[serde(default, rename = "riscvEnablement")]
    pub riscv_enablement: Option<String>,
}

impl PackageRecord {
    /// Lowercased, space-joined concatenation of every present field value.
    ///
    /// This is the haystack for whole-row search: a match anywhere in the
    /// record (including the enablement link) admits it.
    pub fn search_haystack(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(6);
        let id = self.id.to_string();
        parts.push(&id);
        parts.push(&self.category);
        parts.push(&self.software);
        if let Some(status) = self.status.as_deref() {
            parts.push(status);
        }
        parts.push(&self.package_type);
        if let Some(link) = self.riscv_enablement.as_deref() {
            parts.push(link);
        }
        parts.join(" ").to_lowercase()
    }

    /// The value this record sorts by for the given key.
    ///
    /// A missing status sorts as the empty string.
    pub fn sort_value(&self, key: SortKey) -> &str {
        match key {
            SortKey::Software => &self.software,
            SortKey::Category => &self.category,
            SortKey::Status => self.status.as_deref().unwrap_or(""),
            SortKey::Type => &self.package_type,
        }
    }
}
