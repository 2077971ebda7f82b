//! Repository test utilities

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockito::{Mock, ServerGuard};

use maven_release_history::{
    Coordinate, HttpConfig, MAVEN_CENTRAL_URL, ReleaseTimestamp, RepositoryError,
    RepositorySource,
};

pub fn ts(value: &str) -> ReleaseTimestamp {
    DateTime::parse_from_rfc3339(value).unwrap().with_timezone(&Utc)
}

/// HTTP settings without retries so failing mocks answer immediately
pub fn test_http_config() -> HttpConfig {
    HttpConfig {
        max_retries: 0,
        ..HttpConfig::default()
    }
}

/// In-memory source with fixed versions and dates that counts every call
pub struct StaticSource {
    base_url: String,
    versions: Vec<String>,
    dates: HashMap<String, ReleaseTimestamp>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn central() -> Self {
        Self::at(MAVEN_CENTRAL_URL)
    }

    pub fn at(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            versions: Vec::new(),
            dates: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_version(mut self, version: &str, published: &str) -> Self {
        self.versions.push(version.to_string());
        self.dates.insert(version.to_string(), ts(published));
        self
    }

    /// Version that is listed but whose POM answers 404
    pub fn with_missing_pom(mut self, version: &str) -> Self {
        self.versions.push(version.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepositorySource for StaticSource {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn is_central(&self) -> bool {
        self.base_url == MAVEN_CENTRAL_URL
    }

    async fn discover_versions(
        &self,
        _coordinate: &Coordinate,
    ) -> Result<Vec<String>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.versions.clone())
    }

    async fn resolve_release_date(
        &self,
        coordinate: &Coordinate,
        version: &str,
    ) -> Result<ReleaseTimestamp, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.dates
            .get(version)
            .copied()
            .ok_or_else(|| RepositoryError::PomNotFound {
                url: coordinate.pom_url(&self.base_url, version),
            })
    }
}

pub fn metadata_xml(coordinate: &Coordinate, versions: &[&str]) -> String {
    let versions: String = versions
        .iter()
        .map(|v| format!("      <version>{v}</version>\n"))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata>
  <groupId>{}</groupId>
  <artifactId>{}</artifactId>
  <versioning>
    <versions>
{versions}    </versions>
    <lastUpdated>20220101000000</lastUpdated>
  </versioning>
</metadata>
"#,
        coordinate.group_id, coordinate.artifact_id
    )
}

pub fn index_page(links: &[&str]) -> String {
    let anchors: String = links
        .iter()
        .map(|link| format!("<a href=\"{link}\">{link}</a>\n"))
        .collect();
    format!("<html><body><pre>{anchors}</pre></body></html>")
}

/// Path of `url` relative to the mock server root
fn server_path(server: &ServerGuard, url: &str) -> String {
    url.trim_start_matches(&server.url()).to_string()
}

pub async fn mock_metadata(
    server: &mut ServerGuard,
    coordinate: &Coordinate,
    versions: &[&str],
) -> Mock {
    let path = server_path(server, &coordinate.metadata_url(&server.url()));
    server
        .mock("GET", path.as_str())
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(metadata_xml(coordinate, versions))
        .create_async()
        .await
}

pub async fn mock_pom(
    server: &mut ServerGuard,
    coordinate: &Coordinate,
    version: &str,
    last_modified: Option<&str>,
) -> Mock {
    let path = server_path(server, &coordinate.pom_url(&server.url(), version));
    let mock = server.mock("HEAD", path.as_str()).with_status(200);
    let mock = match last_modified {
        Some(value) => mock.with_header("last-modified", value),
        None => mock,
    };
    mock.create_async().await
}

pub async fn mock_missing(server: &mut ServerGuard, method: &str, url: &str) -> Mock {
    let path = server_path(server, url);
    server
        .mock(method, path.as_str())
        .with_status(404)
        .create_async()
        .await
}

pub async fn mock_listing(server: &mut ServerGuard, url: &str, links: &[&str]) -> Mock {
    let path = server_path(server, url);
    server
        .mock("GET", path.as_str())
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(index_page(links))
        .create_async()
        .await
}
