//! Build the ASN-to-CIDR index from GeoLite2 CSV sources.
//!
//! Each CSV row is `network,asn,...`; the index maps an ASN number to the
//! ordered list of CIDR blocks announced by it, in row order. Rows whose ASN
//! field does not parse are skipped silently — GeoLite2 exports carry the odd
//! placeholder row and a best-effort index is the intended behavior. An
//! unreadable file, by contrast, aborts the run: lookups against a partial
//! index would be silently incomplete.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("failed to open CSV file {path}: {source}")]
    Open {
        path: PathBuf,
        source: csv::Error,
    },
}

/// Read-only mapping from ASN number to its CIDR blocks.
#[derive(Debug, Default)]
pub struct CidrIndex {
    map: HashMap<u32, Vec<String>>,
}

impl CidrIndex {
    /// Build the index from one or more CSV files.
    pub fn from_files(paths: &[PathBuf]) -> Result<Self, IndexError> {
        let mut index = CidrIndex::default();
        for path in paths {
            index.load_file(path)?;
        }
        Ok(index)
    }

    fn load_file(&mut self, path: &Path) -> Result<(), IndexError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|source| IndexError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        for record in reader.records() {
            // Record-level anomalies (bad encoding, field count) are skipped
            // like any other malformed row; only an unreadable file is fatal.
            let record = match record {
                Ok(record) => record,
                Err(source) => {
                    warn!("skipping malformed CSV record in {}: {source}", path.display());
                    continue;
                }
            };
            let (Some(network), Some(asn_raw)) = (record.get(0), record.get(1)) else {
                continue;
            };
            // Placeholder and annotation rows have a non-numeric ASN field.
            let Ok(asn) = asn_raw.trim().parse::<u32>() else {
                continue;
            };
            let cidr = network.trim().trim_matches('"').to_string();
            self.map.entry(asn).or_default().push(cidr);
        }
        Ok(())
    }

    /// CIDR blocks for an ASN, in CSV row order. `None` when unmapped.
    pub fn lookup(&self, asn: u32) -> Option<&[String]> {
        self.map.get(&asn).map(|v| v.as_slice())
    }

    /// Number of distinct ASNs in the index.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
