//! Sequential aggregation driver.
//!
//! Consumes the two static target lists in full: data-mode (free-text
//! search) groups first, then country groups, rendering a summary document
//! after each phase. One bad group is logged and skipped; it contributes
//! nothing to its phase's summary and never halts the run.

use crate::config::Config;
use crate::countries;
use crate::extract;
use crate::fetch::{FetchMode, Fetcher};
use crate::index::CidrIndex;
use crate::summary::{self, GroupSummary};
use crate::writer::{self, ArtifactSet};
use anyhow::{Context, Result};
use tracing::{error, info};

/// Run the full pipeline: load the index, process every target group, write
/// both summary documents.
pub async fn run(config: &Config) -> Result<()> {
    info!("loading ASN database from {} CSV file(s)", config.csv.len());
    let index = CidrIndex::from_files(&config.csv).context("building CIDR index")?;
    info!("ASN database loaded: {} ASNs", index.len());

    let fetcher = Fetcher::new().context("building HTTP client")?;
    run_with(config, &index, &fetcher).await
}

/// Driver body with injectable index and fetcher (tests point the fetcher at
/// a mock server).
pub async fn run_with(config: &Config, index: &CidrIndex, fetcher: &Fetcher) -> Result<()> {
    let mut data_groups: Vec<GroupSummary> = Vec::new();
    for name in &config.namelist {
        match process_group(config, index, fetcher, name, "data").await {
            Ok(group) => data_groups.push(group),
            Err(e) => error!("processing failed ({name} in data): {e:#}"),
        }
    }
    write_summary(config, "README.md", "data", &data_groups)?;

    let mut country_groups: Vec<GroupSummary> = Vec::new();
    for code in &config.country {
        match process_group(config, index, fetcher, code, "country").await {
            Ok(group) => country_groups.push(group),
            Err(e) => error!("processing failed ({code} in country): {e:#}"),
        }
    }
    write_summary(config, "README-ry.md", "country", &country_groups)?;

    Ok(())
}

/// Process one target group: Init -> Fetch -> Extract -> Write.
async fn process_group(
    config: &Config,
    index: &CidrIndex,
    fetcher: &Fetcher,
    name: &str,
    directory: &str,
) -> Result<GroupSummary> {
    let mode = if directory == "data" {
        FetchMode::Search
    } else {
        FetchMode::Country
    };

    let set = ArtifactSet::new(&config.output_dir, directory, name);
    set.init(&config.cdn, &config.repo, &writer::cst_timestamp())
        .context("initializing artifact set")?;

    info!("fetching ASN data ({name} in {directory})");
    let body = fetcher.fetch(name, mode).await.context("fetching ASN table")?;
    let table = extract::extract(&body, mode);

    set.write_group_header(table.total)
        .context("writing group header")?;
    for record in &table.records {
        set.append_asn(record.number).context("appending ASN")?;
        let cidrs = index.lookup(record.number).unwrap_or(&[]);
        set.append_cidrs(record.number, cidrs)
            .context("appending CIDR blocks")?;
    }
    info!(
        "wrote {} ASN entries for {name} ({} recognized)",
        table.records.len(),
        table.total
    );

    let display_name = if mode == FetchMode::Country {
        countries::display_label(name)
    } else {
        name.to_string()
    };
    Ok(GroupSummary::new(
        name,
        &display_name,
        directory,
        &config.cdn,
        &config.repo,
    ))
}

fn write_summary(
    config: &Config,
    file_name: &str,
    directory: &str,
    groups: &[GroupSummary],
) -> Result<()> {
    let path = config.output_dir.join(file_name);
    let doc = summary::render_summary(directory, groups);
    std::fs::write(&path, doc).with_context(|| format!("writing {}", path.display()))?;
    info!("summary written to {}", path.display());
    Ok(())
}
