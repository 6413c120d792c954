use crate::dashboard::domain::{FilterField, PackageRecord, QueryState, SortDirection, SortKey};
use std::collections::BTreeSet;
use std::ops::Range;

/// Default number of records shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Sentinel filter option meaning "no restriction".
pub const ALL_OPTION: &str = "All";

/// Collects the selectable options for one filterable column: the distinct
/// non-empty values across all raw records, sorted, with the "All" sentinel
/// prepended. Independent of the current filter/search/sort state.
pub fn filter_options(records: &[PackageRecord], field: FilterField) -> Vec<String> {
    let mut distinct = BTreeSet::new();
    for record in records {
        let value = match field {
            FilterField::Category => record.category.as_str(),
            FilterField::Type => record.package_type.as_str(),
            FilterField::Status => record.status.as_deref().unwrap_or(""),
        };
        if !value.is_empty() {
            distinct.insert(value.to_string());
        }
    }

    let mut options = Vec::with_capacity(distinct.len() + 1);
    options.push(ALL_OPTION.to_string());
    options.extend(distinct);
    options
}

fn passes_filters(record: &PackageRecord, query: &QueryState) -> bool {
    query.category.accepts(&record.category)
        && query.package_type.accepts(&record.package_type)
        && query.status.accepts(record.status.as_deref().unwrap_or(""))
}

/// Stage 1: column filters, composed with logical AND.
pub fn apply_filters<'a>(
    records: &'a [PackageRecord],
    query: &QueryState,
) -> Vec<&'a PackageRecord> {
    records
        .iter()
        .filter(|record| passes_filters(record, query))
        .collect()
}

/// Stage 2: whole-row substring search, applied strictly after filtering.
///
/// An empty or whitespace-only search leaves the filtered set unchanged.
pub fn apply_search<'a>(
    filtered: Vec<&'a PackageRecord>,
    search: &str,
) -> Vec<&'a PackageRecord> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return filtered;
    }

    filtered
        .into_iter()
        .filter(|record| record.search_haystack().contains(&needle))
        .collect()
}

/// Stage 3: stable sort by the lowercased sort-key value.
///
/// Descending reverses the comparison, not the result, so records with
/// equal keys keep their input order in both directions.
pub fn sort_records<'a>(
    mut records: Vec<&'a PackageRecord>,
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a PackageRecord> {
    records.sort_by(|a, b| {
        let ordering = a
            .sort_value(key)
            .to_lowercase()
            .cmp(&b.sort_value(key).to_lowercase());
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    records
}

/// The fully derived view: filtered, searched, sorted, and paged.
///
/// Every field is a pure function of the raw records plus the query state;
/// nothing here survives a dataset reload.
#[derive(Debug, Clone)]
pub struct DerivedView {
    sorted: Vec<PackageRecord>,
    page: usize,
    total_pages: usize,
    page_range: Range<usize>,
    show_all: bool,
}

impl DerivedView {
    /// The entire sorted result set (what a CSV export serializes).
    pub fn sorted(&self) -> &[PackageRecord] {
        &self.sorted
    }

    /// The slice of the sorted set for the current page.
    pub fn page_slice(&self) -> &[PackageRecord] {
        &self.sorted[self.page_range.clone()]
    }

    /// The effective (clamped) page number.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    /// Number of records in the sorted result set.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// 1-based index of the first record on the current page, 0 when empty.
    pub fn page_start(&self) -> usize {
        if self.sorted.is_empty() {
            0
        } else {
            self.page_range.start + 1
        }
    }

    /// 1-based index of the last record on the current page.
    pub fn page_end(&self) -> usize {
        self.page_range.end
    }
}

/// Runs the whole pipeline in its fixed order: filter, search, sort, page.
///
/// The requested page number is clamped to `[1, total_pages]`; an
/// out-of-range request is never an error.
pub fn derive_view(
    records: &[PackageRecord],
    query: &QueryState,
    page_size: usize,
) -> DerivedView {
    let page_size = page_size.max(1);

    let filtered = apply_filters(records, query);
    let searched = apply_search(filtered, &query.search);
    let sorted_refs = sort_records(searched, query.sort_key, query.sort_direction);
    let sorted: Vec<PackageRecord> = sorted_refs.into_iter().cloned().collect();

    let total_pages = if query.show_all {
        1
    } else {
        sorted.len().div_ceil(page_size).max(1)
    };
    let page = query.page.clamp(1, total_pages);

    let page_range = if query.show_all {
        0..sorted.len()
    } else {
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(sorted.len());
        // An empty result set leaves page 1 pointing at an empty slice
        start.min(sorted.len())..end
    };

    DerivedView {
        sorted,
        page,
        total_pages,
        page_range,
        show_all: query.show_all,
    }
}
