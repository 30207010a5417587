use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use powerlift_analyzer::app::report_use_case::ReportUseCase;
use powerlift_analyzer::config::Config;
use powerlift_analyzer::infra::object_store::ObjectStore;
use powerlift_analyzer::infra::report_sink::FsReportSink;
use powerlift_analyzer::observability::logging;

#[derive(Parser)]
#[command(name = "powerlift-analyzer")]
#[command(about = "Aggregates powerlifting meet and lift datasets into a text report")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all three analyses and write the combined report
    Report {
        /// Locator for the meets dataset (path or http(s) URL)
        #[arg(long)]
        meets: Option<String>,
        /// Locator for the openpowerlifting lifts dataset
        #[arg(long)]
        lifts: Option<String>,
        /// Destination path for the rendered report
        #[arg(long)]
        output: Option<String>,
        /// Config file supplying locators not given on the command line
        #[arg(long, default_value = "config.toml")]
        config: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    logging::init_logging();

    match cli.command {
        Commands::Report {
            meets,
            lifts,
            output,
            config,
        } => {
            // CLI flags win; the config file fills whatever is missing.
            let (meets, lifts, output) = match (meets, lifts, output) {
                (Some(m), Some(l), Some(o)) => (m, l, o),
                (m, l, o) => {
                    let config = Config::load(&config)?;
                    (
                        m.unwrap_or(config.datasets.meets),
                        l.unwrap_or(config.datasets.lifts),
                        o.unwrap_or(config.report.output),
                    )
                }
            };

            println!("🏋️  Running powerlift analyses");
            let store = Arc::new(ObjectStore::new());
            let sink = Arc::new(FsReportSink);
            let use_case = ReportUseCase::new(store, sink);

            let report = use_case.run(&meets, &lifts, &output).await?;
            info!("report written to {}", output);
            println!("✅ Report written to {} ({} bytes)", output, report.len());
        }
    }

    Ok(())
}
