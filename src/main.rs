//! asnlist — scrape ASN registries into proxy ruleset artifacts.

use anyhow::Result;
use asn_list::cli::{convert_cmd, output, sync_cmd};
use asn_list::config::DEFAULT_CONFIG_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "asnlist", version, about = "ASN/CIDR ruleset aggregation pipeline")]
struct Cli {
    /// Suppress non-log terminal output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch ASN tables and write ruleset artifacts plus summaries.
    Sync {
        /// Path to the YAML run configuration.
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
    /// Convert emitted YAML rulesets to the compact .mrs format.
    Convert {
        /// Output tree to walk; falls back to the `base_dir` env var.
        #[arg(long)]
        base_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    output::set_quiet(cli.quiet);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("asn_list=info".parse().expect("static directive")),
        )
        .init();

    info!("starting asnlist v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Sync { config } => sync_cmd::run(&config).await,
        Command::Convert { base_dir } => convert_cmd::run(base_dir).await,
    }
}
