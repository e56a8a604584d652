//! `asnlist convert` — convert emitted YAML rulesets to `.mrs`.

use crate::cli::output::{self, Styled};
use crate::convert;
use anyhow::Result;
use std::path::PathBuf;
use std::time::Instant;

/// Run the converter batch over the base directory.
pub async fn run(base_dir: Option<PathBuf>) -> Result<()> {
    let s = Styled::new();
    let start = Instant::now();

    convert::run(base_dir).await?;

    if !output::is_quiet() {
        eprintln!(
            "  {} Conversion batch finished in {:.1}s",
            s.ok_sym(),
            start.elapsed().as_secs_f64()
        );
    }
    Ok(())
}
