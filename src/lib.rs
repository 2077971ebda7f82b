//! Release history of Maven artifacts
//!
//! Resolves, for a `groupId:artifactId` coordinate, every published version
//! together with the moment it was published. Versions are discovered from
//! `maven-metadata.xml` (or a directory listing when the metadata is absent),
//! and each version's date is the `Last-Modified` header of its POM.
//! Histories from a configured target repository and Maven Central are merged,
//! keeping the earliest date for versions present in both.
//!
//! ```no_run
//! use maven_release_history::{Coordinate, HistoryResolver, HttpConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let resolver = HistoryResolver::for_repository(
//!     "https://repo.spring.io/artifactory/release",
//!     &HttpConfig::default(),
//! )?;
//! let history = resolver
//!     .resolve_history(&Coordinate::new("org.apache.maven", "apache-maven"))
//!     .await?;
//! for (version, published) in &history {
//!     println!("{version}\t{published}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod history;
pub mod repository;
pub mod types;

pub use config::{HistoryConfig, HttpConfig, MAVEN_CENTRAL_URL};
pub use history::{HistoryError, HistoryResolver, merge_histories, resolve_history};
pub use repository::{ConfigError, MavenRepository, RepositoryError, RepositorySource};
pub use types::{Coordinate, ReleaseTimestamp, VersionHistory};
