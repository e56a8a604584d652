//! Extract (ASN number, display name) records from bgp.he.net HTML.
//!
//! Country pages list ASNs in the `#asns` table; search result pages use a
//! generic `table.w100p`. A row is *recognized* when its first cell's anchor
//! text looks like `AS12345`. Search mode additionally requires the second
//! cell to be the literal marker `ASN` before the row is accepted into
//! written output — the search table mixes ASN rows with prefix and DNS rows
//! that still carry AS-prefixed anchors. The recognized count is reported
//! separately because the per-group header is stamped with it.

use crate::fetch::FetchMode;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

/// One parsed ASN table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsnRecord {
    pub number: u32,
    pub name: String,
}

/// Result of extracting one HTML snapshot.
#[derive(Debug, Clone, Default)]
pub struct AsnTable {
    /// Rows accepted for written output, in document order.
    pub records: Vec<AsnRecord>,
    /// Count of all recognized (`^AS\d+`) rows, accepted or not.
    pub total: usize,
}

fn asn_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^AS(\d+)").expect("static pattern"))
}

fn row_selector(mode: FetchMode) -> &'static Selector {
    static COUNTRY: OnceLock<Selector> = OnceLock::new();
    static SEARCH: OnceLock<Selector> = OnceLock::new();
    match mode {
        FetchMode::Country => {
            COUNTRY.get_or_init(|| Selector::parse("#asns tbody tr").expect("static selector"))
        }
        FetchMode::Search => {
            SEARCH.get_or_init(|| Selector::parse("table.w100p tbody tr").expect("static selector"))
        }
    }
}

fn cell_selector(nth: usize) -> Selector {
    Selector::parse(&format!("td:nth-child({nth})")).expect("static selector")
}

/// Parse an HTML snapshot into accepted records and the recognized total.
///
/// Synchronous on purpose: `scraper` types are not `Send`, so nothing from
/// the parsed document escapes this function.
pub fn extract(html: &str, mode: FetchMode) -> AsnTable {
    let document = Html::parse_document(html);
    let first_cell_anchor =
        Selector::parse("td:nth-child(1) a").expect("static selector");
    let second_cell = cell_selector(2);

    let mut table = AsnTable::default();
    for row in document.select(row_selector(mode)) {
        let Some(number) = row_asn_number(&row, &first_cell_anchor) else {
            continue;
        };
        table.total += 1;

        let name = row
            .select(&second_cell)
            .next()
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        // Search results interleave non-ASN rows; only the literal marker
        // qualifies a row for output. Country tables are ASN-only.
        let accepted = match mode {
            FetchMode::Search => name == "ASN",
            FetchMode::Country => true,
        };
        if accepted {
            table.records.push(AsnRecord { number, name });
        }
    }
    table
}

fn row_asn_number(row: &ElementRef, anchor: &Selector) -> Option<u32> {
    let cell = row.select(anchor).next()?;
    let text = cell.text().collect::<String>();
    let captures = asn_pattern().captures(text.trim())?;
    captures[1].parse().ok()
}
