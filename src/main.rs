mod adapters;
mod application;
mod cli;
mod config;
mod dashboard;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileDatasetSource, FileSystemWriter, StdoutPresenter};
use adapters::outbound::formatters::{SummaryFormatter, TableFormatter};
use adapters::outbound::http::HttpDatasetSource;
use application::dto::{DashboardView, ViewRequest};
use application::use_cases::watch_dashboard::DEFAULT_REFRESH_SECONDS;
use application::use_cases::{
    load_schema, ExportCsvUseCase, RenderDashboardUseCase, ValidateDatasetUseCase,
    WatchDashboardUseCase,
};
use cli::{Cli, Command, ExportArgs, ValidateArgs, ViewArgs, WatchArgs};
use config::ConfigFile;
use dashboard::services::view_pipeline::DEFAULT_PAGE_SIZE;
use ports::outbound::{DatasetSource, OutputPresenter};
use shared::error::ExitCode;
use shared::Result;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = resolve_config(&cli)?;

    match cli.command {
        Command::View(args) => run_view(args, &config).await,
        Command::Export(args) => run_export(args, &config).await,
        Command::Validate(args) => run_validate(args, &config),
        Command::Watch(args) => run_watch(args, &config).await,
    }
}

/// Loads the explicit --config file, or quietly auto-discovers
/// pkgdash.config.yml in the working directory.
fn resolve_config(cli: &Cli) -> Result<ConfigFile> {
    if let Some(path) = &cli.config {
        config::load_config_from_path(path)
    } else {
        let cwd = std::env::current_dir()?;
        Ok(config::discover_config(&cwd)?.unwrap_or_default())
    }
}

/// Picks the dataset source from the flag or the config: http(s) specs get
/// the fetching client, everything else is treated as a file path.
fn resolve_data_source(
    flag: Option<String>,
    config: &ConfigFile,
) -> Result<Box<dyn DatasetSource + Send + Sync>> {
    let Some(spec) = flag.or_else(|| config.data.clone()) else {
        anyhow::bail!(
            "No dataset location given.\n\n\
             💡 Hint: Pass --data <path-or-url> or set `data:` in pkgdash.config.yml."
        );
    };

    if spec.starts_with("http://") || spec.starts_with("https://") {
        Ok(Box::new(HttpDatasetSource::new(spec)?))
    } else {
        Ok(Box::new(FileDatasetSource::new(PathBuf::from(spec))))
    }
}

fn resolve_page_size(flag: Option<usize>, config: &ConfigFile) -> usize {
    flag.or(config.page_size).unwrap_or(DEFAULT_PAGE_SIZE).max(1)
}

/// Composes the full dashboard screen: header, status strip, table.
fn render_dashboard_text(dashboard: &DashboardView) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "📦 RISC-V Package Enablement: {} package(s)\n\n",
        dashboard.total
    ));
    output.push_str(&SummaryFormatter::format(&dashboard.summary));
    output.push('\n');
    output.push_str(&TableFormatter::format(dashboard));
    output
}

async fn run_view(args: ViewArgs, config: &ConfigFile) -> Result<()> {
    let source = resolve_data_source(args.data, config)?;
    let page_size = resolve_page_size(args.page_size, config);

    let use_case = RenderDashboardUseCase::new(source, StderrProgressReporter::new());
    let request = ViewRequest::new(args.query.to_query_state(), page_size);
    let dashboard = use_case.execute(request).await?;

    StdoutPresenter::new().present(&render_dashboard_text(&dashboard))
}

async fn run_export(args: ExportArgs, config: &ConfigFile) -> Result<()> {
    let source = resolve_data_source(args.data, config)?;
    let page_size = resolve_page_size(None, config);

    let use_case = ExportCsvUseCase::new(source, StderrProgressReporter::new());
    let request = ViewRequest::new(args.query.to_query_state(), page_size);

    // An empty view produces no file and is not an error
    let Some(export) = use_case.execute(request).await? else {
        return Ok(());
    };

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&export.filename));
    FileSystemWriter::new(output_path).present(&export.content)
}

fn run_validate(args: ValidateArgs, config: &ConfigFile) -> Result<()> {
    let Some(data_path) = args
        .data
        .or_else(|| config.data.clone().map(PathBuf::from))
    else {
        anyhow::bail!(
            "No dataset file given.\n\n\
             💡 Hint: Pass --data <path> or set `data:` in pkgdash.config.yml."
        );
    };

    let data_spec = data_path.to_string_lossy();
    if data_spec.starts_with("http://") || data_spec.starts_with("https://") {
        anyhow::bail!(
            "Validation reads the local dataset file, not a URL.\n\n\
             💡 Hint: Run `pkgdash validate --data public/data.yaml` against the file you deploy."
        );
    }

    let Some(schema_path) = args
        .schema
        .or_else(|| config.schema.clone().map(PathBuf::from))
    else {
        anyhow::bail!(
            "No schema file given.\n\n\
             💡 Hint: Pass --schema <path> or set `schema:` in pkgdash.config.yml."
        );
    };

    let raw = FileDatasetSource::new(data_path).read_raw()?;
    let schema = load_schema(&schema_path)?;

    let use_case = ValidateDatasetUseCase::new(StderrProgressReporter::new());
    let report = use_case.execute(&raw, &schema)?;

    if !report.is_valid() {
        // The deploy gate: a failing dataset must abort the build
        process::exit(ExitCode::ValidationFailed.as_i32());
    }

    Ok(())
}

async fn run_watch(args: WatchArgs, config: &ConfigFile) -> Result<()> {
    let source = resolve_data_source(args.data, config)?;
    let page_size = resolve_page_size(args.page_size, config);
    let interval_seconds = args
        .interval
        .or(config.refresh_seconds)
        .unwrap_or(DEFAULT_REFRESH_SECONDS)
        .max(1);

    let render = RenderDashboardUseCase::new(source, StderrProgressReporter::new());
    let watch = WatchDashboardUseCase::new(render, Duration::from_secs(interval_seconds));
    let request = ViewRequest::new(args.query.to_query_state(), page_size);
    let presenter = StdoutPresenter::new();

    eprintln!(
        "👀 Watching dataset; refreshing every {} second(s). Press Ctrl-C to stop.",
        interval_seconds
    );

    watch
        .run_until(
            request,
            |outcome| match outcome {
                Ok(dashboard) => {
                    let mut text = render_dashboard_text(&dashboard);
                    text.push_str(&format!(
                        "\nNext refresh in {} second(s)\n",
                        interval_seconds
                    ));
                    presenter.present(&text)
                }
                Err(e) => {
                    // A failed reload shows the error state and waits for
                    // the next cycle; no in-cycle retry
                    eprintln!("❌ Reload failed: {}", e);
                    Ok(())
                }
            },
            async {
                let _ = tokio::signal::ctrl_c().await;
            },
        )
        .await
}
