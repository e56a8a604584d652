//! ASN-List: scrape ASN registries and CIDR blocks from bgp.he.net and emit
//! rule-list artifacts (plain lists, YAML, JSON) for proxy/routing tools.
//!
//! The pipeline is strictly sequential: load the GeoLite2 CIDR index, then
//! for each configured target group fetch → extract → write artifacts, then
//! render summary documents. A second subcommand converts emitted YAML
//! rulesets to the compact `.mrs` format via the external `mihomo` binary.

pub mod cli;
pub mod config;
pub mod convert;
pub mod countries;
pub mod extract;
pub mod fetch;
pub mod index;
pub mod pipeline;
pub mod summary;
pub mod writer;
