//! Version history resolution and merging
//!
//! # Modules
//!
//! - [`resolver`]: `HistoryResolver`, concurrent per-source resolution
//! - [`merge`]: earliest-timestamp merge of two histories

pub mod merge;
pub mod resolver;

use std::sync::Arc;

use thiserror::Error;

use crate::repository::error::{ConfigError, RepositoryError};
use crate::repository::source::RepositorySource;
use crate::types::{Coordinate, VersionHistory};

pub use merge::merge_histories;
pub use resolver::{HistoryResolver, source_history};

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// One-shot resolution against `target` and `central`
pub async fn resolve_history(
    coordinate: &Coordinate,
    target: Arc<dyn RepositorySource>,
    central: Arc<dyn RepositorySource>,
) -> Result<VersionHistory, HistoryError> {
    let resolver = HistoryResolver::new(target, central)?;
    Ok(resolver.resolve_history(coordinate).await?)
}
