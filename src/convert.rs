//! Convert emitted YAML rulesets to the compact `.mrs` binary format.
//!
//! Walks an output tree, collects convertible artifacts by filename suffix,
//! and shells out to `mihomo convert-ruleset <kind> yaml <src> <dst>` per
//! file. Failed conversions are retried a fixed number of times with a fixed
//! delay; after exhaustion the file is logged and skipped — one bad file
//! never aborts the batch.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info, warn};

/// Retries per file after the initial attempt.
const MAX_RETRIES: u32 = 3;

/// Fixed delay between attempts.
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Filename suffixes that denote convertible artifacts, with the ruleset
/// kind each converts as.
const CONVERTIBLE_SUFFIXES: &[(&str, &str)] = &[
    ("_IP.yaml", "ipcidr"),
    ("_ASN_No_Resolve.yaml", "ipasn"),
    ("_ASN.yaml", "ipasn"),
];

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("no base directory: pass --base-dir or set the `base_dir` environment variable")]
    MissingBaseDir,
}

/// Ruleset kind for a filename, if it is convertible.
pub fn classify(file_name: &str) -> Option<&'static str> {
    CONVERTIBLE_SUFFIXES
        .iter()
        .find(|(suffix, _)| file_name.ends_with(suffix))
        .map(|(_, kind)| *kind)
}

/// Recursively collect convertible files under `dir`, sorted by path.
pub fn find_convertible(dir: &Path) -> Result<Vec<(PathBuf, &'static str)>> {
    let mut found = Vec::new();
    collect(dir, &mut found)
        .with_context(|| format!("walking {}", dir.display()))?;
    found.sort();
    Ok(found)
}

fn collect(dir: &Path, found: &mut Vec<(PathBuf, &'static str)>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            collect(&path, found)?;
        } else {
            let name = entry.file_name();
            if let Some(kind) = name.to_str().and_then(classify) {
                found.push((path, kind));
            }
        }
    }
    Ok(())
}

/// Seam over the external conversion command, swappable in tests.
#[async_trait]
pub trait RulesetConverter {
    async fn convert(&self, kind: &str, src: &Path, dst: &Path) -> Result<()>;
}

/// Real converter: shells out to the `mihomo` binary.
pub struct MihomoConverter {
    binary: PathBuf,
}

impl MihomoConverter {
    /// Locate `mihomo` on PATH. Fails up front so a missing binary is one
    /// clear error instead of one per file.
    pub fn locate() -> Result<Self> {
        let binary = which::which("mihomo").context("mihomo binary not found on PATH")?;
        Ok(Self { binary })
    }
}

#[async_trait]
impl RulesetConverter for MihomoConverter {
    async fn convert(&self, kind: &str, src: &Path, dst: &Path) -> Result<()> {
        let output = tokio::process::Command::new(&self.binary)
            .arg("convert-ruleset")
            .arg(kind)
            .arg("yaml")
            .arg(src)
            .arg(dst)
            .output()
            .await
            .with_context(|| format!("spawning mihomo for {}", src.display()))?;
        if !output.status.success() {
            bail!(
                "mihomo convert-ruleset exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}

/// Convert one file, retrying with a fixed delay between attempts.
pub async fn convert_with_retry(
    converter: &dyn RulesetConverter,
    kind: &str,
    src: &Path,
    dst: &Path,
    delay: Duration,
) -> Result<()> {
    let attempts = 1 + MAX_RETRIES;
    for attempt in 1..=attempts {
        match converter.convert(kind, src, dst).await {
            Ok(()) => return Ok(()),
            Err(e) if attempt < attempts => {
                warn!(
                    "conversion of {} failed, retry {attempt}/{MAX_RETRIES}: {e:#}",
                    src.display()
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
    unreachable!("loop returns on final attempt")
}

/// Run the converter batch over `base_dir` (flag, else `base_dir` env var).
pub async fn run(base_dir: Option<PathBuf>) -> Result<()> {
    let base_dir = base_dir
        .or_else(|| std::env::var_os("base_dir").map(PathBuf::from))
        .ok_or(ConvertError::MissingBaseDir)?;

    let converter = MihomoConverter::locate()?;
    run_batch(&base_dir, &converter, RETRY_DELAY).await
}

/// Batch body with injectable converter and delay.
pub async fn run_batch(
    base_dir: &Path,
    converter: &dyn RulesetConverter,
    delay: Duration,
) -> Result<()> {
    let files = find_convertible(base_dir)?;
    info!("found {} convertible ruleset file(s)", files.len());

    for (src, kind) in &files {
        let dst = src.with_extension("mrs");
        match convert_with_retry(converter, kind, src, &dst, delay).await {
            Ok(()) => info!("converted {} -> {}", src.display(), dst.display()),
            Err(e) => error!(
                "conversion of {} failed after {MAX_RETRIES} retries: {e:#}",
                src.display()
            ),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    /// Stub converter that fails a configured number of times, then succeeds.
    struct FlakyConverter {
        failures: u32,
        calls: AtomicU32,
        seen: Mutex<Vec<(String, PathBuf, PathBuf)>>,
    }

    impl FlakyConverter {
        fn new(failures: u32) -> Self {
            Self {
                failures,
                calls: AtomicU32::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RulesetConverter for FlakyConverter {
        async fn convert(&self, kind: &str, src: &Path, dst: &Path) -> Result<()> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen
                .lock()
                .unwrap()
                .push((kind.to_string(), src.to_path_buf(), dst.to_path_buf()));
            if call < self.failures {
                bail!("simulated failure {call}");
            }
            Ok(())
        }
    }

    #[test]
    fn test_classify_suffixes() {
        assert_eq!(classify("Google_IP.yaml"), Some("ipcidr"));
        assert_eq!(classify("Google_ASN.yaml"), Some("ipasn"));
        assert_eq!(classify("Google_ASN_No_Resolve.yaml"), Some("ipasn"));
        assert_eq!(classify("Google_IP.json"), None);
        assert_eq!(classify("Google_IP.list"), None);
        assert_eq!(classify("README.md"), None);
    }

    #[test]
    fn test_find_convertible_recurses() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("country/US");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("US_IP.yaml"), "payload:\n").unwrap();
        std::fs::write(nested.join("US_ASN.yaml"), "payload:\n").unwrap();
        std::fs::write(nested.join("US_IP.json"), "{}").unwrap();
        std::fs::write(tmp.path().join("README.md"), "#").unwrap();

        let found = find_convertible(tmp.path()).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found
            .iter()
            .any(|(p, k)| p.ends_with("US_IP.yaml") && *k == "ipcidr"));
        assert!(found
            .iter()
            .any(|(p, k)| p.ends_with("US_ASN.yaml") && *k == "ipasn"));
    }

    #[tokio::test]
    async fn test_retry_succeeds_on_third_attempt() {
        let converter = FlakyConverter::new(2);
        let result = convert_with_retry(
            &converter,
            "ipcidr",
            Path::new("a_IP.yaml"),
            Path::new("a_IP.mrs"),
            Duration::ZERO,
        )
        .await;
        assert!(result.is_ok());
        // Succeeded on the third attempt, no fourth call.
        assert_eq!(converter.calls(), 3);
    }

    #[tokio::test]
    async fn test_retry_exhaustion() {
        let converter = FlakyConverter::new(u32::MAX);
        let result = convert_with_retry(
            &converter,
            "ipcidr",
            Path::new("a_IP.yaml"),
            Path::new("a_IP.mrs"),
            Duration::ZERO,
        )
        .await;
        assert!(result.is_err());
        assert_eq!(converter.calls(), 1 + MAX_RETRIES);
    }

    #[tokio::test]
    async fn test_batch_continues_past_bad_file() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("a_IP.yaml"), "payload:\n").unwrap();
        std::fs::write(tmp.path().join("b_IP.yaml"), "payload:\n").unwrap();

        // First file exhausts its retries; second file still gets converted.
        let converter = FlakyConverter::new(1 + MAX_RETRIES);
        run_batch(tmp.path(), &converter, Duration::ZERO).await.unwrap();

        let seen = converter.seen.lock().unwrap();
        let dsts: Vec<_> = seen.iter().map(|(_, _, d)| d.clone()).collect();
        assert!(dsts.iter().any(|d| d.ends_with("a_IP.mrs")));
        assert!(dsts.iter().any(|d| d.ends_with("b_IP.mrs")));
        // a: 4 attempts, b: 1 attempt
        assert_eq!(converter.calls(), (1 + MAX_RETRIES) + 1);
    }

    #[test]
    fn test_missing_base_dir_is_typed_error() {
        let err = ConvertError::MissingBaseDir;
        assert!(err.to_string().contains("--base-dir"));
    }
}
