//! `maven-metadata.xml` model

use serde::Deserialize;

use crate::repository::error::RepositoryError;

/// Root `<metadata>` element. Only `versioning.versions` is consumed; the
/// other required elements enforce the minimum document shape.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDocument {
    #[serde(rename = "@modelVersion")]
    pub model_version: Option<String>,
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub versioning: Versioning,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Versioning {
    pub latest: Option<String>,
    pub release: Option<String>,
    pub versions: Versions,
    pub last_updated: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Versions {
    #[serde(rename = "version", default)]
    pub version: Vec<String>,
}

impl MetadataDocument {
    pub fn parse(body: &str) -> Result<Self, RepositoryError> {
        Ok(quick_xml::de::from_str(body)?)
    }
}

/// Version strings listed under `versioning/versions`, in document order
pub fn parse_versions(body: &str) -> Result<Vec<String>, RepositoryError> {
    Ok(MetadataDocument::parse(body)?.versioning.versions.version)
}
