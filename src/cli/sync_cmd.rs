//! `asnlist sync` — run the aggregation pipeline.

use crate::cli::output::{self, Styled};
use crate::config::Config;
use crate::pipeline;
use anyhow::Result;
use std::path::Path;
use std::time::Instant;

/// Load the config and run the full pipeline.
pub async fn run(config_path: &Path) -> Result<()> {
    let s = Styled::new();
    let start = Instant::now();

    let config = Config::load(config_path)?;
    if !output::is_quiet() {
        eprintln!(
            "  Syncing {} data group(s) and {} country group(s) into {}",
            config.namelist.len(),
            config.country.len(),
            config.output_dir.display()
        );
    }

    pipeline::run(&config).await?;

    if !output::is_quiet() {
        eprintln!(
            "  {} Sync complete in {:.1}s",
            s.ok_sym(),
            start.elapsed().as_secs_f64()
        );
    }
    Ok(())
}
