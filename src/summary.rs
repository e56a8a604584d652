//! Per-group configuration snippets and the run summary documents.
//!
//! Each successfully processed group yields a [`GroupSummary`] holding its
//! ready-to-paste snippets; the driver folds them into one markdown document
//! per phase (`README.md` for data-mode groups, `README-ry.md` for country
//! groups). Snippets are plain string templates — the output format is
//! dictated by the downstream proxy software and is not negotiable.

/// Basic `rule-providers` block pointing at the raw GitHub URL.
pub fn provider_basic(name: &str, directory: &str, repo: &str) -> String {
    format!(
        "\n  {name}asn:\n    type: http\n    behavior: classical\n    \
         url: \"https://raw.githubusercontent.com/{repo}/refs/heads/main/{directory}/{name}/{name}_ASN.yaml\"\n    \
         path: ./ruleset/{name}_ASN.yaml\n    interval: 86400\n    format: yaml\n"
    )
}

/// Advanced block using a `*classical` anchor and the CDN mirror.
pub fn provider_classical(name: &str, directory: &str, cdn: &str, repo: &str) -> String {
    format!(
        "\n  {name}asn:\n    <<: *classical\n    \
         url: \"https://{cdn}/gh/{repo}@main/{directory}/{name}/{name}_ASN.yaml\"\n    \
         path: ./ruleset/{name}_ASN.yaml\n"
    )
}

/// Advanced block using an `*ipcidr` anchor and the CDN mirror.
pub fn provider_cidr(name: &str, directory: &str, cdn: &str, repo: &str) -> String {
    format!(
        "\n  {name}cidr:\n    <<: *ipcidr\n    \
         url: \"https://{cdn}/gh/{repo}@main/{directory}/{name}/{name}_IP.yaml\"\n    \
         path: ./ruleset/{name}_IP.yaml\n"
    )
}

/// Snippets contributed by one successfully processed group.
#[derive(Debug, Clone)]
pub struct GroupSummary {
    /// Bullet-list label (bare name, or `"<code> <country>"` in country mode).
    pub display_name: String,
    pub rule_line: String,
    pub provider_basic: String,
    pub provider_classical: String,
    pub provider_cidr: String,
}

impl GroupSummary {
    pub fn new(name: &str, display_name: &str, directory: &str, cdn: &str, repo: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            rule_line: format!("  - RULE-SET,ASN{name},Proxy\n"),
            provider_basic: provider_basic(name, directory, repo),
            provider_classical: provider_classical(name, directory, cdn, repo),
            provider_cidr: provider_cidr(name, directory, cdn, repo),
        }
    }
}

/// Render the summary markdown for one phase.
///
/// `directory` labels which tree the groups live under (`data` or `country`).
pub fn render_summary(directory: &str, groups: &[GroupSummary]) -> String {
    let bullets = groups
        .iter()
        .map(|g| format!("- ASN-{}", g.display_name))
        .collect::<Vec<_>>()
        .join("\n");
    let rules: String = groups.iter().map(|g| g.rule_line.as_str()).collect();
    let basic: String = groups.iter().map(|g| g.provider_basic.as_str()).collect();
    let classical: String = groups
        .iter()
        .map(|g| g.provider_classical.as_str())
        .collect();
    let cidr: String = groups.iter().map(|g| g.provider_cidr.as_str()).collect();

    format!(
        "# ASN-List\n\n\
         Live-updated ASN and IP database.\n\
         Groups under the {directory} directory:\n\n\
         {bullets}\n\n\
         ## Features\n\n\
         - Updated automatically every day\n\
         - Reliable and accurate sources\n\n\
         ## Using with proxy software\n\n\
         ## mihomo rules\n\n\
         <pre><code class=\"language-javascript\">\nrules:\n{rules}\n</code></pre>\n\n\
         ## Basic configuration\n\n\
         <pre><code class=\"language-javascript\">\nrule-providers:\n{basic}\n</code></pre>\n\n\
         ## Advanced configuration (ASN)\n\n\
         <pre><code class=\"language-javascript\">\nrule-providers:\n{classical}\n</code></pre>\n\n\
         ## Advanced configuration (CIDR)\n\n\
         <pre><code class=\"language-javascript\">\nrule-providers:\n{cidr}\n</code></pre>"
    )
}
