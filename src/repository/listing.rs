//! HTML directory index parsing

use std::sync::LazyLock;

use scraper::{Html, Selector};

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

/// Entry names linked from an index page.
///
/// Each href is reduced to its last path segment, so absolute links
/// (`https://host/repo/lib/1.0/`) and relative ones (`1.0/`) name the same
/// entry. Sort links (`?C=N;O=D`), root-relative links and the parent link
/// are dropped.
pub fn parse_directory_listing(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(entry_name)
        .map(str::to_string)
        .collect()
}

fn entry_name(href: &str) -> Option<&str> {
    if href.starts_with(['?', '#', '/']) {
        return None;
    }

    let path = href.split(['?', '#']).next()?.trim_end_matches('/');
    let name = path.rsplit('/').next()?;

    match name {
        "" | "." | ".." => None,
        _ => Some(name),
    }
}

/// Whether a version directory listing links `{artifactId}-{version}.pom`
pub fn contains_pom(listing: &[String], pom_file_name: &str) -> bool {
    listing.iter().any(|target| target == pom_file_name)
}
