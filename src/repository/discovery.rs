//! Version discovery against one repository
//!
//! `maven-metadata.xml` is authoritative when it is served. Repositories that
//! omit it but expose a browsable tree are scanned instead: every
//! sub-directory of the artifact directory is a candidate, and a candidate is
//! accepted only when its own listing links `{artifactId}-{version}.pom`.

use reqwest::StatusCode;
use tracing::debug;

use crate::repository::error::RepositoryError;
use crate::repository::listing::{contains_pom, parse_directory_listing};
use crate::repository::metadata::parse_versions;
use crate::repository::transport::HttpTransport;
use crate::types::Coordinate;

fn is_failure(status: StatusCode) -> bool {
    status.as_u16() >= 400
}

/// Known versions of `coordinate` at `base_url`, in discovery order.
/// "Nothing found" is an empty list, never an error.
pub async fn discover_versions(
    transport: &HttpTransport,
    base_url: &str,
    coordinate: &Coordinate,
) -> Result<Vec<String>, RepositoryError> {
    let url = coordinate.metadata_url(base_url);
    let response = transport.get(&url).await?;
    let status = response.status();

    if is_failure(status) {
        debug!(
            "No metadata for {} at {} ({}), scanning directory listing",
            coordinate, url, status
        );
        return discover_from_listing(transport, base_url, coordinate).await;
    }

    let body = response.text().await?;
    let versions = parse_versions(&body)?;
    debug!("Found {} versions in {}", versions.len(), url);

    Ok(versions)
}

/// Directory-listing fallback. Candidates are validated one after another.
pub async fn discover_from_listing(
    transport: &HttpTransport,
    base_url: &str,
    coordinate: &Coordinate,
) -> Result<Vec<String>, RepositoryError> {
    let directory_url = coordinate.artifact_directory_url(base_url);
    let response = transport.get(&directory_url).await?;

    if is_failure(response.status()) {
        debug!(
            "Directory listing unavailable at {} ({})",
            directory_url,
            response.status()
        );
        return Ok(Vec::new());
    }

    let candidates = parse_directory_listing(&response.text().await?);
    let mut versions = Vec::new();

    for candidate in candidates {
        let candidate_url = coordinate.version_directory_url(base_url, &candidate);
        let response = transport.get(&candidate_url).await?;

        if is_failure(response.status()) {
            debug!("Skipping {}: {}", candidate_url, response.status());
            continue;
        }

        let listing = parse_directory_listing(&response.text().await?);
        if contains_pom(&listing, &coordinate.pom_file_name(&candidate)) {
            versions.push(candidate);
        } else {
            debug!("Skipping {}: no POM listed", candidate_url);
        }
    }

    debug!(
        "Found {} versions in directory listing {}",
        versions.len(),
        directory_url
    );

    Ok(versions)
}
