use crate::application::dto::DashboardView;
use crate::dashboard::domain::{PackageRecord, SortDirection, SortKey};
use crate::dashboard::services::segmentation::status_color;
use owo_colors::{DynColors, OwoColorize};

/// Dark text color used for status badges.
const BADGE_TEXT_COLOR: DynColors = DynColors::Rgb(0x00, 0x32, 0x62);

/// Spacing between table columns.
const COLUMN_GAP: &str = "   ";

/// Table columns in display order, each with its sort key.
const COLUMNS: [(&str, SortKey); 4] = [
    ("Category", SortKey::Category),
    ("Software", SortKey::Software),
    ("Type", SortKey::Type),
    ("Status", SortKey::Status),
];

/// TableFormatter adapter rendering the paged record table
///
/// Renders the current page slice with a header row (the active sort
/// column carries a direction indicator), a record range line, and a
/// pagination footer.
pub struct TableFormatter;

impl TableFormatter {
    pub fn format(dashboard: &DashboardView) -> String {
        let view = &dashboard.view;
        let mut output = String::new();

        output.push_str("All Packages\n");
        output.push_str(&Self::range_line(dashboard));
        output.push('\n');

        if view.is_empty() {
            output.push_str("No records match the current filters or search query.\n");
            return output;
        }

        let rows: Vec<[String; 4]> = view.page_slice().iter().map(Self::row_cells).collect();
        let headers = Self::header_cells(dashboard);
        let widths = Self::column_widths(&headers, &rows);

        output.push_str(&Self::render_row(&headers, &widths, None));
        output.push_str(&Self::render_separator(&widths));
        for (row, record) in rows.iter().zip(view.page_slice()) {
            output.push_str(&Self::render_row(row, &widths, record.status.as_deref()));
        }

        if !view.show_all() {
            output.push_str(&format!(
                "\nPage {} of {}\n",
                view.page(),
                view.total_pages()
            ));
        }

        output
    }

    fn range_line(dashboard: &DashboardView) -> String {
        let view = &dashboard.view;
        if view.show_all() {
            format!("Showing all {} records", view.len())
        } else {
            format!(
                "Showing {}\u{2013}{} of {}",
                view.page_start(),
                view.page_end(),
                view.len()
            )
        }
    }

    fn header_cells(dashboard: &DashboardView) -> [String; 4] {
        COLUMNS.map(|(label, key)| {
            if dashboard.query.sort_key == key {
                let arrow = match dashboard.query.sort_direction {
                    SortDirection::Ascending => "▲",
                    SortDirection::Descending => "▼",
                };
                format!("{} {}", label, arrow)
            } else {
                label.to_string()
            }
        })
    }

    fn row_cells(record: &PackageRecord) -> [String; 4] {
        [
            record.category.clone(),
            record.software.clone(),
            record.package_type.clone(),
            record.status.clone().unwrap_or_default(),
        ]
    }

    fn column_widths(headers: &[String; 4], rows: &[[String; 4]]) -> [usize; 4] {
        let mut widths = headers
            .clone()
            .map(|header| header.chars().count());
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Renders one table row; when `status` is given, the last cell is
    /// colorized with its status color after padding.
    fn render_row(cells: &[String; 4], widths: &[usize; 4], status: Option<&str>) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(4);
        for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
            let padded = Self::pad(cell, *width);
            if i == 3 {
                if let Some(status) = status {
                    let color = hex_color(status_color(status));
                    parts.push(format!(
                        "{}",
                        padded.on_color(color).color(BADGE_TEXT_COLOR)
                    ));
                    continue;
                }
            }
            parts.push(padded);
        }
        format!("{}\n", parts.join(COLUMN_GAP).trim_end())
    }

    fn render_separator(widths: &[usize; 4]) -> String {
        let parts: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        format!("{}\n", parts.join(COLUMN_GAP))
    }

    fn pad(text: &str, width: usize) -> String {
        let len = text.chars().count();
        format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
    }
}

/// Parses a `#RRGGBB` hex color into a terminal color.
fn hex_color(hex: &str) -> DynColors {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return DynColors::Rgb(0xCB, 0xD5, 0xE1);
    }
    let channel =
        |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).unwrap_or(0xCB);
    DynColors::Rgb(channel(0..2), channel(2..4), channel(4..6))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::DashboardView;
    use crate::dashboard::domain::{QueryEvent, QueryState, RecordId};
    use crate::dashboard::services::segmentation::summarize;
    use crate::dashboard::services::view_pipeline::{derive_view, filter_options};
    use crate::dashboard::domain::FilterField;

    fn record(id: i64, category: &str, software: &str, status: &str) -> PackageRecord {
        PackageRecord {
            id: RecordId::Number(id),
            category: category.to_string(),
            software: software.to_string(),
            status: Some(status.to_string()),
            package_type: "Library".to_string(),
            riscv_enablement: None,
        }
    }

    fn dashboard(records: &[PackageRecord], query: QueryState) -> DashboardView {
        let view = derive_view(records, &query, 2);
        DashboardView {
            total: records.len(),
            summary: summarize(records),
            category_options: filter_options(records, FilterField::Category),
            type_options: filter_options(records, FilterField::Type),
            status_options: filter_options(records, FilterField::Status),
            view,
            query,
        }
    }

    #[test]
    fn test_format_renders_rows_and_footer() {
        let records = vec![
            record(1, "Toolchain", "gcc", "Enabled"),
            record(2, "Emulation", "qemu", "TBD"),
            record(3, "Libraries", "zlib", "Enabled"),
        ];
        let output = TableFormatter::format(&dashboard(&records, QueryState::default()));

        assert!(output.contains("All Packages"));
        assert!(output.contains("Showing 1\u{2013}2 of 3"));
        assert!(output.contains("gcc"));
        assert!(output.contains("qemu"));
        // zlib sorts last and falls on page 2
        assert!(!output.contains("zlib"));
        assert!(output.contains("Page 1 of 2"));
    }

    #[test]
    fn test_format_sort_indicator_on_active_column() {
        let records = vec![record(1, "Toolchain", "gcc", "Enabled")];
        let mut query = QueryState::default();
        query.apply(QueryEvent::SortSelected(SortKey::Status));
        let output = TableFormatter::format(&dashboard(&records, query));

        assert!(output.contains("Status ▲"));
        assert!(!output.contains("Software ▲"));
    }

    #[test]
    fn test_format_descending_indicator() {
        let records = vec![record(1, "Toolchain", "gcc", "Enabled")];
        let mut query = QueryState::default();
        query.apply(QueryEvent::SortSelected(SortKey::Software));
        let output = TableFormatter::format(&dashboard(&records, query));

        assert!(output.contains("Software ▼"));
    }

    #[test]
    fn test_format_empty_view_shows_empty_state() {
        let records = vec![record(1, "Toolchain", "gcc", "Enabled")];
        let query = QueryState {
            search: "no-such-package".to_string(),
            ..QueryState::default()
        };
        let output = TableFormatter::format(&dashboard(&records, query));

        assert!(output.contains("No records match the current filters or search query."));
        assert!(!output.contains("gcc"));
    }

    #[test]
    fn test_format_show_all_has_no_page_footer() {
        let records = vec![
            record(1, "Toolchain", "gcc", "Enabled"),
            record(2, "Emulation", "qemu", "TBD"),
            record(3, "Libraries", "zlib", "Enabled"),
        ];
        let query = QueryState {
            show_all: true,
            ..QueryState::default()
        };
        let output = TableFormatter::format(&dashboard(&records, query));

        assert!(output.contains("Showing all 3 records"));
        assert!(output.contains("zlib"));
        assert!(!output.contains("Page 1 of"));
    }
}
