//! End-to-end pipeline test: mock HTTP source, temp output tree.

use asn_list::config::Config;
use asn_list::fetch::Fetcher;
use asn_list::index::CidrIndex;
use asn_list::pipeline;
use std::path::PathBuf;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_csv(dir: &std::path::Path) -> PathBuf {
    let csv = dir.join("GeoLite2-ASN-Blocks-IPv4.csv");
    std::fs::write(
        &csv,
        "network,autonomous_system_number,autonomous_system_organization\n\
         \"10.0.0.0/8\",64512,Example Search Net\n\
         172.16.0.0/12,64512,Example Search Net\n\
         192.0.2.0/24,64514,Second Net\n\
         198.51.100.0/24,junk,Broken Row\n",
    )
    .unwrap();
    csv
}

// Search results interleave ASN rows with prefix rows that also carry
// AS-prefixed anchors; only the `ASN` marker rows may be written.
const SEARCH_HTML: &str = r#"<html><body>
<table class="w100p"><tbody>
  <tr><td><a>AS64512</a></td><td>ASN</td></tr>
  <tr><td><a>AS64513</a></td><td>Route</td></tr>
  <tr><td><a>AS64514</a></td><td>ASN</td></tr>
</tbody></table>
</body></html>"#;

#[tokio::test]
async fn full_data_mode_group() {
    let tmp = tempfile::tempdir().unwrap();
    let csv = write_csv(tmp.path());

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("search[search]", "Example"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_HTML))
        .mount(&server)
        .await;

    let config = Config {
        namelist: vec!["Example".to_string()],
        country: vec![],
        cdn: "cdn.example.com".to_string(),
        repo: "Kwisma/ASN-List".to_string(),
        csv: vec![csv],
        output_dir: tmp.path().to_path_buf(),
    };
    let index = CidrIndex::from_files(&config.csv).unwrap();
    assert_eq!(index.len(), 2); // malformed row excluded

    let fetcher = Fetcher::with_base_url(server.uri()).unwrap();
    pipeline::run_with(&config, &index, &fetcher).await.unwrap();

    let group_dir = tmp.path().join("data/Example");

    // Header carries the recognized count (3), not the accepted count (2).
    let asn_list = std::fs::read_to_string(group_dir.join("Example_ASN.list")).unwrap();
    assert!(asn_list.contains("# ASN: 3\n"));
    assert!(asn_list.contains("IP-ASN,64512,no-resolve\n"));
    assert!(asn_list.contains("IP-ASN,64514,no-resolve\n"));
    assert!(!asn_list.contains("IP-ASN,64513"));

    let asn_yaml = std::fs::read_to_string(group_dir.join("Example_ASN.yaml")).unwrap();
    assert!(asn_yaml.contains("payload:\n  - IP-ASN,64512,no-resolve\n"));

    let no_resolve = std::fs::read_to_string(group_dir.join("Example_ASN_No_Resolve.list")).unwrap();
    assert!(no_resolve.contains("IP-ASN,64512\n"));

    // CIDR artifacts: AS64512's two blocks in CSV order, then AS64514's one.
    let ip_yaml = std::fs::read_to_string(group_dir.join("Example_IP.yaml")).unwrap();
    let order = [
        ip_yaml.find("  - 10.0.0.0/8\n").unwrap(),
        ip_yaml.find("  - 172.16.0.0/12\n").unwrap(),
        ip_yaml.find("  - 192.0.2.0/24\n").unwrap(),
    ];
    assert!(order[0] < order[1] && order[1] < order[2]);

    let json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(group_dir.join("Example_IP.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(json["version"], 2);
    assert_eq!(
        json["rules"][0]["ip_cidr"],
        serde_json::json!(["10.0.0.0/8", "172.16.0.0/12", "192.0.2.0/24"])
    );

    // Per-group README and both summaries exist; country summary is empty.
    assert!(group_dir.join("README.md").exists());
    let data_summary = std::fs::read_to_string(tmp.path().join("README.md")).unwrap();
    assert!(data_summary.contains("- ASN-Example"));
    assert!(data_summary.contains("  - RULE-SET,ASNExample,Proxy"));
    assert!(data_summary.contains(
        "https://cdn.example.com/gh/Kwisma/ASN-List@main/data/Example/Example_IP.yaml"
    ));
    let country_summary = std::fs::read_to_string(tmp.path().join("README-ry.md")).unwrap();
    assert!(!country_summary.contains("- ASN-"));
}
