/// Integration tests for the application layer
mod test_utilities;

use test_utilities::mocks::*;

use pkgdash::prelude::*;

const DATASET_YAML: &str = r#"
- id: 1
  category: Toolchain
  software: gcc
  status: Enabled
  type: Compiler
  riscvEnablement: https://gcc.gnu.org/wiki/RISC-V
- id: 2
  category: Toolchain
  software: LLVM
  status: Optimized
  type: Compiler
- id: 3
  category: Emulation
  software: QEMU
  status: Enabled
  type: Emulator
- id: 4
  category: Libraries
  software: OpenSSL
  status: In Progress
  type: Library
- id: 5
  category: Libraries
  software: zlib-ng
  type: Library
"#;

fn view_request(query: QueryState, page_size: usize) -> ViewRequest {
    ViewRequest::new(query, page_size)
}

#[tokio::test]
async fn test_render_dashboard_happy_path() {
    let source = MockDatasetSource::from_yaml(DATASET_YAML);
    let reporter = MockProgressReporter::new();
    let use_case = RenderDashboardUseCase::new(source, reporter.clone());

    let dashboard = use_case
        .execute(view_request(QueryState::default(), 100))
        .await
        .unwrap();

    assert_eq!(dashboard.total, 5);
    assert_eq!(dashboard.view.len(), 5);
    assert_eq!(dashboard.view.total_pages(), 1);

    // Options are distinct, sorted, with the sentinel first
    assert_eq!(
        dashboard.category_options,
        vec!["All", "Emulation", "Libraries", "Toolchain"]
    );
    assert_eq!(
        dashboard.type_options,
        vec!["All", "Compiler", "Emulator", "Library"]
    );
    assert_eq!(
        dashboard.status_options,
        vec!["All", "Enabled", "In Progress", "Optimized"]
    );

    // Default sort: software ascending, case-insensitive
    let names: Vec<&str> = dashboard
        .view
        .sorted()
        .iter()
        .map(|r| r.software.as_str())
        .collect();
    assert_eq!(names, vec!["gcc", "LLVM", "OpenSSL", "QEMU", "zlib-ng"]);

    // Progress was reported around the load
    assert!(reporter.message_count() >= 2);
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m.contains("5 record(s)")));
}

#[tokio::test]
async fn test_render_dashboard_filters_and_search_compose() {
    let source = MockDatasetSource::from_yaml(DATASET_YAML);
    let use_case = RenderDashboardUseCase::new(source, MockProgressReporter::new());

    let mut query = QueryState::default();
    query.apply(QueryEvent::FilterChanged(
        FilterField::Category,
        FilterSelection::Value("Toolchain".to_string()),
    ));
    query.apply(QueryEvent::SearchChanged("llvm".to_string()));

    let dashboard = use_case.execute(view_request(query, 100)).await.unwrap();

    assert_eq!(dashboard.view.len(), 1);
    assert_eq!(dashboard.view.sorted()[0].software, "LLVM");
    // The summary still covers the full dataset, not the filtered view
    assert_eq!(dashboard.summary.total, 5);
    assert_eq!(dashboard.total, 5);
}

#[tokio::test]
async fn test_render_dashboard_clamps_out_of_range_page() {
    let source = MockDatasetSource::from_yaml(DATASET_YAML);
    let use_case = RenderDashboardUseCase::new(source, MockProgressReporter::new());

    let query = QueryState {
        page: 42,
        ..QueryState::default()
    };
    let dashboard = use_case.execute(view_request(query, 2)).await.unwrap();

    assert_eq!(dashboard.view.total_pages(), 3);
    assert_eq!(dashboard.view.page(), 3);
    // The effective page number is reflected back into the query state
    assert_eq!(dashboard.query.page, 3);
}

#[tokio::test]
async fn test_render_dashboard_summary_applies_minimum_width_floor() {
    let mut yaml = String::new();
    for i in 0..90 {
        yaml.push_str(&format!("- id: {}\n  software: pkg{}\n  status: Enabled\n", i, i));
    }
    for i in 90..100 {
        yaml.push_str(&format!("- id: {}\n  software: pkg{}\n  status: TBD\n", i, i));
    }

    let source = MockDatasetSource::from_yaml(&yaml);
    let use_case = RenderDashboardUseCase::new(source, MockProgressReporter::new());
    let dashboard = use_case
        .execute(view_request(QueryState::default(), 100))
        .await
        .unwrap();

    let segments = &dashboard.summary.segments;
    assert_eq!(segments.len(), 2);
    let enabled = segments.iter().find(|s| s.status == "Enabled").unwrap();
    let tbd = segments.iter().find(|s| s.status == "TBD").unwrap();
    assert_eq!(enabled.count, 90);
    assert_eq!(tbd.count, 10);
    assert!((enabled.percentage() - 88.0).abs() < 1e-6);
    assert!((tbd.percentage() - 12.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_render_dashboard_empty_dataset() {
    let source = MockDatasetSource::new(Vec::new());
    let use_case = RenderDashboardUseCase::new(source, MockProgressReporter::new());
    let dashboard = use_case
        .execute(view_request(QueryState::default(), 100))
        .await
        .unwrap();

    assert_eq!(dashboard.total, 0);
    assert!(dashboard.summary.segments.is_empty());
    assert_eq!(dashboard.category_options, vec!["All"]);
    assert_eq!(dashboard.view.total_pages(), 1);
    assert!(dashboard.view.is_empty());
}

#[tokio::test]
async fn test_render_dashboard_load_failure_propagates() {
    let source = MockDatasetSource::failing("connection reset by peer");
    let use_case = RenderDashboardUseCase::new(source, MockProgressReporter::new());

    let result = use_case
        .execute(view_request(QueryState::default(), 100))
        .await;

    assert!(result.is_err());
    let err = format!("{}", result.unwrap_err());
    assert!(err.contains("connection reset by peer"));
}

#[tokio::test]
async fn test_export_csv_covers_all_pages() {
    let source = MockDatasetSource::from_yaml(DATASET_YAML);
    let use_case = ExportCsvUseCase::new(source, MockProgressReporter::new());

    // Page size 2 would show only two records, but the export covers all 5
    let export = use_case
        .execute(view_request(QueryState::default(), 2))
        .await
        .unwrap()
        .unwrap();

    assert!(export.filename.starts_with("packages-"));
    assert!(export.filename.ends_with(".csv"));

    let lines: Vec<&str> = export.content.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "ID,Category,Software,Status,RISC-V Enablement");
    assert_eq!(
        lines[1],
        "1,Toolchain,gcc,Enabled,https://gcc.gnu.org/wiki/RISC-V"
    );
    // zlib-ng has no status and no link
    assert_eq!(lines[5], "5,Libraries,zlib-ng,,");
}

#[tokio::test]
async fn test_export_csv_respects_filters_and_sort() {
    let source = MockDatasetSource::from_yaml(DATASET_YAML);
    let use_case = ExportCsvUseCase::new(source, MockProgressReporter::new());

    let mut query = QueryState::default();
    query.apply(QueryEvent::FilterChanged(
        FilterField::Type,
        FilterSelection::Value("Compiler".to_string()),
    ));
    query.apply(QueryEvent::SortSelected(SortKey::Software));
    query.apply(QueryEvent::SortSelected(SortKey::Software));
    // Two selections of the same column leave it ascending again

    let export = use_case
        .execute(view_request(query, 100))
        .await
        .unwrap()
        .unwrap();

    let lines: Vec<&str> = export.content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("gcc"));
    assert!(lines[2].contains("LLVM"));
}

#[tokio::test]
async fn test_export_csv_empty_view_is_a_noop() {
    let source = MockDatasetSource::from_yaml(DATASET_YAML);
    let reporter = MockProgressReporter::new();
    let use_case = ExportCsvUseCase::new(source, reporter.clone());

    let query = QueryState {
        search: "no-such-package-anywhere".to_string(),
        ..QueryState::default()
    };
    let export = use_case.execute(view_request(query, 100)).await.unwrap();

    assert!(export.is_none());
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m.contains("Nothing to export")));
}

#[test]
fn test_validate_dataset_passes_and_fails_by_record() {
    let schema = serde_json::json!({
        "type": "object",
        "required": ["id", "software"],
        "properties": {
            "id": { "type": ["integer", "string"] },
            "software": { "type": "string", "minLength": 1 }
        }
    });

    let reporter = MockProgressReporter::new();
    let use_case = ValidateDatasetUseCase::new(reporter.clone());

    let report = use_case.execute(DATASET_YAML, &schema).unwrap();
    assert!(report.is_valid());
    assert_eq!(report.checked, 5);
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m.contains("validation passed")));

    let invalid = "- id: 1\n  software: gcc\n- id: 2\n";
    let report = use_case.execute(invalid, &schema).unwrap();
    assert!(!report.is_valid());
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].index, 1);
}
