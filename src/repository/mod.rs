//! Access to a single Maven-layout repository
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ RepositorySource │────▶│  Discovery  │────▶│   Metadata   │
//! │ (MavenRepository)│     │             │────▶│   Listing    │
//! └──────────────────┘     └─────────────┘     └──────────────┘
//!          │                      │
//!          ▼                      ▼
//! ┌──────────────────┐     ┌─────────────┐
//! │   Release date   │────▶│  Transport  │
//! │   (HEAD .pom)    │     │ (retrying)  │
//! └──────────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`source`]: `RepositorySource` trait and its HTTP implementation
//! - [`discovery`]: metadata-first version discovery with directory-listing fallback
//! - [`release_date`]: `Last-Modified` probe of a version's POM
//! - [`metadata`]: `maven-metadata.xml` model
//! - [`listing`]: HTML directory index parsing
//! - [`transport`]: shared HTTP client with retry policy
//! - [`error`]: error types for repository access and configuration

pub mod discovery;
pub mod error;
pub mod listing;
pub mod metadata;
pub mod release_date;
pub mod source;
pub mod transport;

pub use error::{ConfigError, RepositoryError};
pub use source::{MavenRepository, RepositorySource};
