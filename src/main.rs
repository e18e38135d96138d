//! xmldatadiff - Relational diff for table-shaped XML documents

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use xmldatadiff::config::{Config, OutputFormat, LEFT_ROWS_FILE, RIGHT_ROWS_FILE};
use xmldatadiff::diff::compute_diff;
use xmldatadiff::output::{render_to_stdout, stdout_stream, write_row_files, write_stats};
use xmldatadiff::parser::{load_dataset, DEFAULT_NAMESPACE, DEFAULT_ROOT};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Compare two table-shaped XML documents: tables, columns and rows only one side has
#[derive(Parser, Debug)]
#[command(name = "xmldatadiff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Left file to compare
    file1: PathBuf,

    /// Right file to compare
    file2: PathBuf,

    /// Columns to leave out, as comma-separated table.column names
    excluded_columns: Option<String>,

    /// Name of the document element
    #[arg(default_value = DEFAULT_ROOT)]
    root_node_name: String,

    /// Namespace URI of root, table and column elements
    #[arg(default_value = DEFAULT_NAMESPACE)]
    default_namespace: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Directory the row files are written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// File name for rows only in the left file
    #[arg(long, default_value = LEFT_ROWS_FILE)]
    left_rows_file: String,

    /// File name for rows only in the right file
    #[arg(long, default_value = RIGHT_ROWS_FILE)]
    right_rows_file: String,

    /// Ignore case when comparing values
    #[arg(long)]
    ignore_case: bool,

    /// Ignore leading/trailing whitespace in values
    #[arg(long)]
    ignore_whitespace: bool,

    /// Only show statistics, not detailed changes
    #[arg(long)]
    stats_only: bool,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let excluded_columns: Vec<String> = cli
        .excluded_columns
        .as_deref()
        .map(|list| list.split(',').map(str::to_string).collect())
        .unwrap_or_default();

    let config = Config {
        left_file: cli.file1,
        right_file: cli.file2,
        excluded_columns,
        root_node: cli.root_node_name,
        namespace: cli.default_namespace,
        output_format: cli.format.into(),
        output_dir: cli.output_dir,
        left_rows_file: cli.left_rows_file,
        right_rows_file: cli.right_rows_file,
        ignore_case: cli.ignore_case,
        ignore_whitespace: cli.ignore_whitespace,
        stats_only: cli.stats_only,
    };

    let options = config.load_options();

    // Parse files
    let left = load_dataset(&config.left_file, &options).context("Failed to load left file")?;
    let right = load_dataset(&config.right_file, &options).context("Failed to load right file")?;

    // Compute diff
    let diff = compute_diff(&left, &right, &config);

    // Handle stats-only mode
    if config.stats_only {
        let mut stdout = stdout_stream(OutputFormat::Terminal);
        return write_stats(&mut stdout, &diff.stats, &config.left_file, &config.right_file);
    }

    let row_files = write_row_files(&diff, &config).context("Failed to save row differences")?;

    render_to_stdout(
        &diff,
        &config.left_file,
        &config.right_file,
        &row_files,
        config.output_format,
    )
}
