use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::dashboard::domain::{FilterSelection, QueryState, SortDirection, SortKey};

/// Terminal dashboard for RISC-V software package enablement tracking
#[derive(Parser, Debug)]
#[command(name = "pkgdash")]
#[command(version)]
#[command(about = "Terminal dashboard for RISC-V package enablement tracking", long_about = None)]
pub struct Cli {
    /// Path to a pkgdash.config.yml (auto-discovered in the working
    /// directory when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the dashboard once: status summary plus the current table page
    View(ViewArgs),
    /// Export the filtered and sorted view as a CSV file
    Export(ExportArgs),
    /// Validate the dataset against a JSON Schema before deployment
    Validate(ValidateArgs),
    /// Re-render the dashboard on a fixed interval until interrupted
    Watch(WatchArgs),
}

/// Query flags shared by every view-shaped subcommand
#[derive(ClapArgs, Debug, Clone)]
pub struct QueryArgs {
    /// Free-text search across every record field
    #[arg(short, long)]
    pub search: Option<String>,

    /// Show only records in this category (exact match)
    #[arg(long)]
    pub category: Option<String>,

    /// Show only records of this type (exact match)
    #[arg(long = "type")]
    pub package_type: Option<String>,

    /// Show only records with this status (exact match)
    #[arg(long)]
    pub status: Option<String>,

    /// Column to sort by: software, category, status or type
    #[arg(long, default_value = "software")]
    pub sort: SortKey,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "asc")]
    pub direction: SortDirection,

    /// Page number (clamped to the available range)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Show every record on a single page
    #[arg(long)]
    pub show_all: bool,
}

impl QueryArgs {
    /// Resolves the flags into a query state. A literal "All" filter value
    /// means the same as omitting the flag.
    pub fn to_query_state(&self) -> QueryState {
        QueryState {
            search: self.search.clone().unwrap_or_default(),
            category: FilterSelection::from_option(self.category.clone()),
            package_type: FilterSelection::from_option(self.package_type.clone()),
            status: FilterSelection::from_option(self.status.clone()),
            sort_key: self.sort,
            sort_direction: self.direction,
            page: self.page.max(1),
            show_all: self.show_all,
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct ViewArgs {
    /// Dataset location: a file path or an http(s) URL
    #[arg(short, long)]
    pub data: Option<String>,

    /// Records per page
    #[arg(long)]
    pub page_size: Option<usize>,

    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(ClapArgs, Debug)]
pub struct ExportArgs {
    /// Dataset location: a file path or an http(s) URL
    #[arg(short, long)]
    pub data: Option<String>,

    /// Output file path (defaults to a timestamped packages-<ts>.csv in
    /// the working directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(ClapArgs, Debug)]
pub struct ValidateArgs {
    /// Dataset file to validate
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// JSON Schema file describing one package record
    #[arg(long)]
    pub schema: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct WatchArgs {
    /// Dataset location: a file path or an http(s) URL
    #[arg(short, long)]
    pub data: Option<String>,

    /// Records per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Refresh interval in seconds
    #[arg(long)]
    pub interval: Option<u64>,

    #[command(flatten)]
    pub query: QueryArgs,
}
