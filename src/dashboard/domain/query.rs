use std::fmt;
use std::str::FromStr;

/// Columns the table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Software,
    Category,
    Status,
    Type,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Software => "software",
            SortKey::Category => "category",
            SortKey::Status => "status",
            SortKey::Type => "type",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "software" => Ok(SortKey::Software),
            "category" => Ok(SortKey::Category),
            "status" => Ok(SortKey::Status),
            "type" => Ok(SortKey::Type),
            _ => Err(format!(
                "Invalid sort column: {}. Please specify 'software', 'category', 'status' or 'type'",
                s
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort direction for the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction, used when the active column is selected again.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(format!(
                "Invalid sort direction: {}. Please specify 'asc' or 'desc'",
                s
            )),
        }
    }
}

/// Columns that carry a single-select filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Category,
    Type,
    Status,
}

/// A single-select column filter. `All` is the sentinel meaning no
/// restriction; `Value` matches records whose column equals it exactly
/// (case-sensitive, no partial matching).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSelection {
    #[default]
    All,
    Value(String),
}

impl FilterSelection {
    /// Builds a selection from user input, treating the literal sentinel
    /// "All" (or nothing) as unrestricted.
    pub fn from_option(value: Option<String>) -> Self {
        match value {
            None => FilterSelection::All,
            Some(v) if v == "All" => FilterSelection::All,
            Some(v) => FilterSelection::Value(v),
        }
    }

    pub fn accepts(&self, value: &str) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Value(selected) => selected == value,
        }
    }
}

/// User-controlled view parameters.
///
/// Mutated only through [`QueryEvent`]s so the page-reset invariant holds:
/// any change to search, filters, or sort returns the view to page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub search: String,
    pub category: FilterSelection,
    pub package_type: FilterSelection,
    pub status: FilterSelection,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub show_all: bool,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: FilterSelection::All,
            package_type: FilterSelection::All,
            status: FilterSelection::All,
            sort_key: SortKey::Software,
            sort_direction: SortDirection::Ascending,
            page: 1,
            show_all: false,
        }
    }
}

/// A user intent emitted by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryEvent {
    SearchChanged(String),
    FilterChanged(FilterField, FilterSelection),
    SortSelected(SortKey),
    PageRequested(usize),
    NextPage,
    PrevPage,
    ShowAllToggled,
}

impl QueryState {
    /// Applies a user intent to the query state.
    ///
    /// Page numbers are clamped at the lower bound here; the upper bound
    /// depends on the derived view's page count and is applied during
    /// derivation.
    pub fn apply(&mut self, event: QueryEvent) {
        match event {
            QueryEvent::SearchChanged(text) => {
                self.search = text;
                self.page = 1;
            }
            QueryEvent::FilterChanged(field, selection) => {
                match field {
                    FilterField::Category => self.category = selection,
                    FilterField::Type => self.package_type = selection,
                    FilterField::Status => self.status = selection,
                }
                self.page = 1;
            }
            QueryEvent::SortSelected(key) => {
                if key == self.sort_key {
                    self.sort_direction = self.sort_direction.toggled();
                } else {
                    self.sort_key = key;
                    self.sort_direction = SortDirection::Ascending;
                }
                self.page = 1;
            }
            QueryEvent::PageRequested(page) => {
                self.page = page.max(1);
            }
            QueryEvent::NextPage => {
                self.page += 1;
            }
            QueryEvent::PrevPage => {
                self.page = self.page.saturating_sub(1).max(1);
            }
            QueryEvent::ShowAllToggled => {
                self.show_all = !self.show_all;
            }
        }
    }

    pub fn filter_for(&self, field: FilterField) -> &FilterSelection {
        match field {
            FilterField::Category => &self.category,
            FilterField::Type => &self.package_type,
            FilterField::Status => &self.status,
        }
    }
}
