//! Repository capability consumed by the history resolver

#[cfg(test)]
use mockall::automock;

use tracing::debug;

use crate::config::{HttpConfig, MAVEN_CENTRAL_URL};
use crate::repository::discovery;
use crate::repository::error::{ConfigError, RepositoryError};
use crate::repository::release_date;
use crate::repository::transport::HttpTransport;
use crate::types::{Coordinate, ReleaseTimestamp};

/// A repository that follows the Maven layout, reachable at a base URL
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RepositorySource: Send + Sync {
    /// Base URL without trailing slash
    fn base_url(&self) -> &str;

    /// Whether this source is configured against Maven Central
    fn is_central(&self) -> bool;

    /// Known versions in discovery order; empty when none are found
    async fn discover_versions(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Vec<String>, RepositoryError>;

    /// Publish timestamp of one version
    ///
    /// # Returns
    /// * `Err(RepositoryError::PomNotFound)` - The version does not exist here
    /// * `Err(_)` - Any other failure, which callers must not ignore
    async fn resolve_release_date(
        &self,
        coordinate: &Coordinate,
        version: &str,
    ) -> Result<ReleaseTimestamp, RepositoryError>;
}

/// HTTP-backed [`RepositorySource`]
#[derive(Debug, Clone)]
pub struct MavenRepository {
    transport: HttpTransport,
    base_url: String,
}

impl MavenRepository {
    /// Creates a repository client for `base_url`; a trailing `/` is stripped
    pub fn new(base_url: &str, config: &HttpConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_transport(base_url, HttpTransport::new(config)?))
    }

    /// Creates a repository client that shares an existing transport
    pub fn with_transport(base_url: &str, transport: HttpTransport) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        debug!("Configured repository {}", base_url);
        Self {
            transport,
            base_url,
        }
    }

    /// Client for Maven Central
    pub fn central(config: &HttpConfig) -> Result<Self, ConfigError> {
        Self::new(MAVEN_CENTRAL_URL, config)
    }
}

#[async_trait::async_trait]
impl RepositorySource for MavenRepository {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn is_central(&self) -> bool {
        self.base_url == MAVEN_CENTRAL_URL
    }

    async fn discover_versions(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Vec<String>, RepositoryError> {
        discovery::discover_versions(&self.transport, &self.base_url, coordinate).await
    }

    async fn resolve_release_date(
        &self,
        coordinate: &Coordinate,
        version: &str,
    ) -> Result<ReleaseTimestamp, RepositoryError> {
        release_date::resolve_release_date(&self.transport, &self.base_url, coordinate, version)
            .await
    }
}
