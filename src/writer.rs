//! Write the per-group ruleset artifacts.
//!
//! Each target group owns a directory `<output>/<directory>/<name>/` holding
//! six text/YAML artifacts, a JSON ruleset, and a README. `init` (re)creates
//! the set with headers; the append operations add one line per artifact per
//! call. Appends open and close the file each time — the pipeline is
//! sequential and never holds handles across groups.

use crate::summary;
use chrono::{FixedOffset, Utc};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse JSON ruleset {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("JSON ruleset {path} is malformed: rules[0].ip_cidr is not an array")]
    JsonShape { path: PathBuf },
}

/// Current timestamp in China Standard Time (UTC+8), the fixed timezone all
/// generated headers are stamped in.
pub fn cst_timestamp() -> String {
    let cst = FixedOffset::east_opt(8 * 3600).expect("fixed offset in range");
    Utc::now()
        .with_timezone(&cst)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Paths of one target group's output artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    name: String,
    directory: String,
    dir: PathBuf,
    asn_list: PathBuf,
    asn_no_resolve_list: PathBuf,
    asn_yaml: PathBuf,
    asn_no_resolve_yaml: PathBuf,
    cidr_list: PathBuf,
    cidr_yaml: PathBuf,
    cidr_json: PathBuf,
    readme: PathBuf,
}

impl ArtifactSet {
    /// Derive the artifact paths for `(name, directory)` under `output_dir`.
    pub fn new(output_dir: &Path, directory: &str, name: &str) -> Self {
        let dir = output_dir.join(directory).join(name);
        Self {
            name: name.to_string(),
            directory: directory.to_string(),
            asn_list: dir.join(format!("{name}_ASN.list")),
            asn_no_resolve_list: dir.join(format!("{name}_ASN_No_Resolve.list")),
            asn_yaml: dir.join(format!("{name}_ASN.yaml")),
            asn_no_resolve_yaml: dir.join(format!("{name}_ASN_No_Resolve.yaml")),
            cidr_list: dir.join(format!("{name}_IP.list")),
            cidr_yaml: dir.join(format!("{name}_IP.yaml")),
            cidr_json: dir.join(format!("{name}_IP.json")),
            readme: dir.join("README.md"),
            dir,
        }
    }

    /// The group's JSON ruleset path.
    pub fn cidr_json_path(&self) -> &Path {
        &self.cidr_json
    }

    /// The six text/YAML artifacts, in fixed order.
    fn text_artifacts(&self) -> [&Path; 6] {
        [
            &self.asn_list,
            &self.asn_no_resolve_list,
            &self.asn_yaml,
            &self.asn_no_resolve_yaml,
            &self.cidr_list,
            &self.cidr_yaml,
        ]
    }

    /// The three YAML artifacts that need a `payload:` mapping root.
    fn yaml_artifacts(&self) -> [&Path; 3] {
        [&self.asn_yaml, &self.asn_no_resolve_yaml, &self.cidr_yaml]
    }

    /// Initialize the artifact set: create the directory, write headers into
    /// the text/YAML artifacts, the empty JSON ruleset skeleton, and the
    /// per-group README.
    pub fn init(&self, cdn: &str, repo: &str, timestamp: &str) -> Result<(), WriterError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| WriterError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let name = &self.name;
        let header = format!("# ASN information for {name}\n# Last updated: CST {timestamp}\n");
        for path in self.text_artifacts() {
            write_file(path, &header)?;
        }

        let skeleton = serde_json::json!({ "version": 2, "rules": [{ "ip_cidr": [] }] });
        write_file(
            &self.cidr_json,
            &serde_json::to_string_pretty(&skeleton).expect("static skeleton"),
        )?;

        write_file(&self.readme, &self.readme_contents(cdn, repo))?;
        Ok(())
    }

    /// Write the per-group comment header into the six text/YAML artifacts
    /// and the `payload:` mapping root into the three YAML artifacts.
    ///
    /// Called exactly once per group, after extraction and before the first
    /// append. `total` is the count of recognized ASN rows.
    pub fn write_group_header(&self, total: usize) -> Result<(), WriterError> {
        let block = format!("# ASN: {total}\n# Generated by ASN-List.\n\n");
        for path in self.text_artifacts() {
            append_file(path, &block)?;
        }
        for path in self.yaml_artifacts() {
            append_file(path, "payload:\n")?;
        }
        Ok(())
    }

    /// Append one ASN to the four ASN artifacts.
    ///
    /// The base artifacts carry the `no-resolve` flag and the `_No_Resolve`
    /// variants the plain form — inherited naming, consumers depend on it.
    pub fn append_asn(&self, number: u32) -> Result<(), WriterError> {
        append_file(&self.asn_list, &format!("IP-ASN,{number},no-resolve\n"))?;
        append_file(&self.asn_no_resolve_list, &format!("IP-ASN,{number}\n"))?;
        append_file(&self.asn_yaml, &format!("  - IP-ASN,{number},no-resolve\n"))?;
        append_file(&self.asn_no_resolve_yaml, &format!("  - IP-ASN,{number}\n"))?;
        Ok(())
    }

    /// Append resolved CIDR blocks to the CIDR list/YAML artifacts and merge
    /// them into the JSON ruleset's `rules[0].ip_cidr` array.
    ///
    /// An empty slice is logged and skipped — an ASN with no blocks in the
    /// index is expected, not an error.
    pub fn append_cidrs(&self, asn: u32, cidrs: &[String]) -> Result<(), WriterError> {
        if cidrs.is_empty() {
            info!("no CIDR blocks to write for AS{asn}");
            return Ok(());
        }
        for cidr in cidrs {
            append_file(&self.cidr_list, &format!("{cidr}\n"))?;
            append_file(&self.cidr_yaml, &format!("  - {cidr}\n"))?;
        }
        self.merge_json_cidrs(cidrs)
    }

    /// Read-modify-write the JSON ruleset. The file must keep the exact
    /// shape `{version, rules: [{ip_cidr: [...]}]}`; anything else aborts
    /// the group rather than guessing at a repair.
    fn merge_json_cidrs(&self, cidrs: &[String]) -> Result<(), WriterError> {
        let path = &self.cidr_json;
        let raw = std::fs::read_to_string(path).map_err(|source| WriterError::Io {
            path: path.clone(),
            source,
        })?;
        let mut ruleset: serde_json::Value =
            serde_json::from_str(&raw).map_err(|source| WriterError::JsonParse {
                path: path.clone(),
                source,
            })?;

        let ip_cidr = ruleset
            .get_mut("rules")
            .and_then(|rules| rules.get_mut(0))
            .and_then(|rule| rule.get_mut("ip_cidr"))
            .and_then(|value| value.as_array_mut())
            .ok_or_else(|| WriterError::JsonShape { path: path.clone() })?;
        ip_cidr.extend(cidrs.iter().map(|c| serde_json::Value::String(c.clone())));

        write_file(
            path,
            &serde_json::to_string_pretty(&ruleset).expect("value is valid JSON"),
        )
    }

    fn readme_contents(&self, cdn: &str, repo: &str) -> String {
        let name = &self.name;
        let directory = &self.directory;
        let basic = summary::provider_basic(name, directory, repo);
        let classical = summary::provider_classical(name, directory, cdn, repo);
        let cidr = summary::provider_cidr(name, directory, cdn, repo);
        format!(
            "\n# ASN-List\n\nLive-updated ASN and IP database for {name}.\n\n\
             <pre><code class=\"language-javascript\">\nrule-providers:{basic}</code></pre>\n\n\
             <pre><code class=\"language-javascript\">\nrule-providers:{classical}</code></pre>\n\n\
             <pre><code class=\"language-javascript\">\nrule-providers:{cidr}</code></pre>"
        )
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), WriterError> {
    std::fs::write(path, contents).map_err(|source| WriterError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn append_file(path: &Path, contents: &str) -> Result<(), WriterError> {
    let io_err = |source| WriterError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new().append(true).open(path).map_err(io_err)?;
    file.write_all(contents.as_bytes()).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_set(dir: &Path) -> ArtifactSet {
        let set = ArtifactSet::new(dir, "data", "Google");
        set.init("cdn.example.com", "Kwisma/ASN-List", "2026-01-01 00:00:00")
            .unwrap();
        set
    }

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_init_writes_headers_and_skeleton() {
        let tmp = tempfile::tempdir().unwrap();
        let set = init_set(tmp.path());

        let list = read(&set.asn_list);
        assert!(list.starts_with("# ASN information for Google\n"));
        assert!(list.contains("CST 2026-01-01 00:00:00"));

        let json: serde_json::Value = serde_json::from_str(&read(&set.cidr_json)).unwrap();
        assert_eq!(json["version"], 2);
        assert_eq!(json["rules"][0]["ip_cidr"], serde_json::json!([]));

        let readme = read(&set.readme);
        assert!(readme.contains("rule-providers:"));
        assert!(readme.contains(
            "https://raw.githubusercontent.com/Kwisma/ASN-List/refs/heads/main/data/Google/Google_ASN.yaml"
        ));
        assert!(readme.contains("https://cdn.example.com/gh/Kwisma/ASN-List@main/data/Google/Google_IP.yaml"));
    }

    #[test]
    fn test_group_header_and_payload_roots() {
        let tmp = tempfile::tempdir().unwrap();
        let set = init_set(tmp.path());
        set.write_group_header(17).unwrap();

        assert!(read(&set.asn_list).contains("# ASN: 17\n"));
        // payload root only in the three YAML artifacts
        assert!(read(&set.asn_yaml).contains("payload:\n"));
        assert!(read(&set.asn_no_resolve_yaml).contains("payload:\n"));
        assert!(read(&set.cidr_yaml).contains("payload:\n"));
        assert!(!read(&set.asn_list).contains("payload:"));
        assert!(!read(&set.cidr_list).contains("payload:"));
    }

    #[test]
    fn test_append_asn_line_formats() {
        let tmp = tempfile::tempdir().unwrap();
        let set = init_set(tmp.path());
        set.write_group_header(1).unwrap();
        set.append_asn(13335).unwrap();

        assert!(read(&set.asn_list).ends_with("IP-ASN,13335,no-resolve\n"));
        assert!(read(&set.asn_no_resolve_list).ends_with("IP-ASN,13335\n"));
        assert!(read(&set.asn_yaml).ends_with("  - IP-ASN,13335,no-resolve\n"));
        assert!(read(&set.asn_no_resolve_yaml).ends_with("  - IP-ASN,13335\n"));
    }

    #[test]
    fn test_append_batches_accumulate_in_call_order() {
        let tmp = tempfile::tempdir().unwrap();
        let set = init_set(tmp.path());
        set.write_group_header(2).unwrap();
        set.append_asn(100).unwrap();
        set.append_asn(200).unwrap();

        let content = read(&set.asn_no_resolve_list);
        let lines: Vec<&str> = content
            .lines()
            .filter(|l| l.starts_with("IP-ASN"))
            .collect();
        assert_eq!(lines, vec!["IP-ASN,100", "IP-ASN,200"]);
    }

    #[test]
    fn test_append_cidrs_order_and_json_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let set = init_set(tmp.path());
        set.write_group_header(1).unwrap();

        let cidrs = vec!["10.0.0.0/8".to_string(), "172.16.0.0/12".to_string()];
        set.append_cidrs(64512, &cidrs).unwrap();

        let yaml = read(&set.cidr_yaml);
        let idx_a = yaml.find("  - 10.0.0.0/8\n").unwrap();
        let idx_b = yaml.find("  - 172.16.0.0/12\n").unwrap();
        assert!(idx_a < idx_b);
        assert!(read(&set.cidr_list).contains("10.0.0.0/8\n172.16.0.0/12\n"));

        let json: serde_json::Value = serde_json::from_str(&read(&set.cidr_json)).unwrap();
        assert_eq!(json["version"], 2);
        assert_eq!(
            json["rules"][0]["ip_cidr"],
            serde_json::json!(["10.0.0.0/8", "172.16.0.0/12"])
        );
    }

    #[test]
    fn test_append_cidrs_empty_is_not_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let set = init_set(tmp.path());
        set.write_group_header(1).unwrap();
        set.append_cidrs(64512, &[]).unwrap();

        let json: serde_json::Value = serde_json::from_str(&read(&set.cidr_json)).unwrap();
        assert_eq!(json["rules"][0]["ip_cidr"], serde_json::json!([]));
    }

    #[test]
    fn test_malformed_json_shape_aborts() {
        let tmp = tempfile::tempdir().unwrap();
        let set = init_set(tmp.path());
        std::fs::write(&set.cidr_json, r#"{"version":2,"rules":[{"ip_cidr":"oops"}]}"#).unwrap();

        let result = set.append_cidrs(64512, &["10.0.0.0/8".to_string()]);
        assert!(matches!(result, Err(WriterError::JsonShape { .. })));
        // Never repaired in place.
        assert!(read(&set.cidr_json).contains("\"oops\""));
    }

    #[test]
    fn test_reinit_resets_artifacts() {
        let tmp = tempfile::tempdir().unwrap();
        let set = init_set(tmp.path());
        set.write_group_header(1).unwrap();
        set.append_asn(100).unwrap();

        set.init("cdn.example.com", "Kwisma/ASN-List", "2026-01-02 00:00:00")
            .unwrap();
        let list = read(&set.asn_list);
        assert!(!list.contains("IP-ASN,100"));
        assert!(list.contains("2026-01-02"));
    }
}
