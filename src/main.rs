// Entry point: aggregate an issue-tracker CSV export into dashboard data.
//
// The run is a single pass: load and aggregate the export, write the JSON
// summary, then echo the KPIs and a short preview of each grouping.
mod duration;
mod error;
mod loader;
mod output;
mod reports;
mod tokenizer;
mod types;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "jira_report",
    version,
    about = "Aggregate hours and task counts from an issue-tracker CSV export"
)]
struct Cli {
    /// CSV export to read; the first line is treated as the header.
    #[arg(short, long, default_value = "Jira-2.csv")]
    input: PathBuf,

    /// Where to write the JSON summary.
    #[arg(short, long, default_value = "dashboard_data.json")]
    output: PathBuf,

    /// Also write the summary as an embeddable script (`window.DASHBOARD_DATA = ...;`).
    #[arg(long)]
    js_output: Option<PathBuf>,

    /// Also export each grouping as a CSV table into this directory.
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Rows of each grouping to print; 0 disables the previews.
    #[arg(long, default_value_t = 5)]
    preview: usize,

    /// Log filter directive, e.g. `debug` or `jira_report=trace`.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    println!("Processing {}...", cli.input.display());
    let (summary, _report) = loader::aggregate_file(&cli.input)
        .with_context(|| format!("could not aggregate {}", cli.input.display()))?;

    output::write_json(&cli.output, &summary)
        .with_context(|| format!("could not write {}", cli.output.display()))?;
    tracing::info!("summary written to {}", cli.output.display());

    if let Some(js) = &cli.js_output {
        output::write_js(js, &summary)
            .with_context(|| format!("could not write {}", js.display()))?;
        tracing::info!("script embed written to {}", js.display());
    }

    let tables = reports::group_tables(&summary);
    if let Some(dir) = &cli.export_dir {
        let written = output::export_tables(dir, &tables)
            .with_context(|| format!("could not export tables to {}", dir.display()))?;
        tracing::info!(files = written.len(), "tables exported to {}", dir.display());
    }

    println!("Data processed successfully!");
    println!(
        "Total hours: {}",
        util::format_number(summary.kpis.total_hours, 2)
    );
    println!("Total tasks: {}", util::format_int(summary.kpis.total_tasks));
    println!(
        "Total projects: {}",
        util::format_int(summary.kpis.total_projects)
    );
    println!("Total people: {}", util::format_int(summary.kpis.total_people));

    if cli.preview > 0 {
        println!();
        for t in &tables {
            println!("{} (top {})\n", t.title, cli.preview);
            output::preview_table_rows(&t.rows, cli.preview);
        }
    }
    Ok(())
}
