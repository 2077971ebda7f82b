//! Release history resolution across the target repository and Maven Central

use std::sync::Arc;

use futures::future::{try_join, try_join_all};
use tracing::{debug, info};

use crate::config::{HistoryConfig, HttpConfig};
use crate::history::merge::merge_histories;
use crate::repository::error::{ConfigError, RepositoryError};
use crate::repository::source::{MavenRepository, RepositorySource};
use crate::types::{Coordinate, VersionHistory};

/// Resolves version histories from a target repository, merged with Maven Central.
///
/// Holds no mutable state; one instance serves any number of concurrent requests.
pub struct HistoryResolver {
    target: Arc<dyn RepositorySource>,
    central: Arc<dyn RepositorySource>,
}

impl HistoryResolver {
    /// Fails with [`ConfigError::NotCentral`] unless `central` points at Maven Central.
    pub fn new(
        target: Arc<dyn RepositorySource>,
        central: Arc<dyn RepositorySource>,
    ) -> Result<Self, ConfigError> {
        if !central.is_central() {
            return Err(ConfigError::NotCentral);
        }

        Ok(Self { target, central })
    }

    /// Resolver for `repository_url` backed by HTTP clients built from `config`
    pub fn for_repository(repository_url: &str, config: &HttpConfig) -> Result<Self, ConfigError> {
        let target = MavenRepository::new(repository_url, config)?;
        let central = MavenRepository::central(config)?;

        Self::new(Arc::new(target), Arc::new(central))
    }

    pub fn from_config(config: &HistoryConfig) -> Result<Self, ConfigError> {
        Self::for_repository(&config.repository_url, &config.http)
    }

    /// Version to publish timestamp for `coordinate`.
    ///
    /// When the target is Maven Central only it is consulted. Otherwise both
    /// sources are resolved concurrently and merged with [`merge_histories`].
    /// Versions whose POM is missing at a source are left out of that source's
    /// history; every other failure aborts the resolution.
    pub async fn resolve_history(
        &self,
        coordinate: &Coordinate,
    ) -> Result<VersionHistory, RepositoryError> {
        if self.target.is_central() {
            debug!("Target repository is Maven Central, resolving {} once", coordinate);
            let history = source_history(self.target.as_ref(), coordinate).await?;
            info!("Resolved {} versions for {}", history.len(), coordinate);
            return Ok(history);
        }

        let (target_history, central_history) = try_join(
            source_history(self.target.as_ref(), coordinate),
            source_history(self.central.as_ref(), coordinate),
        )
        .await?;

        debug!(
            "{}: {} versions from target, {} from central",
            coordinate,
            target_history.len(),
            central_history.len()
        );

        let history = merge_histories(target_history, central_history);
        info!("Resolved {} versions for {}", history.len(), coordinate);

        Ok(history)
    }
}

/// Discovers versions at one source and resolves their dates concurrently.
///
/// The result keeps discovery order regardless of which lookup finishes first.
pub async fn source_history(
    source: &dyn RepositorySource,
    coordinate: &Coordinate,
) -> Result<VersionHistory, RepositoryError> {
    let versions = source.discover_versions(coordinate).await?;

    let lookups = versions.iter().map(|version| async move {
        match source.resolve_release_date(coordinate, version).await {
            Ok(timestamp) => Ok(Some((version.clone(), timestamp))),
            Err(RepositoryError::PomNotFound { url }) => {
                debug!("Skipping {} {}: {} not found", coordinate, version, url);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    });

    let resolved = try_join_all(lookups).await?;

    Ok(resolved.into_iter().flatten().collect())
}
