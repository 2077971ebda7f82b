//! Core value types shared by discovery, date resolution and merging

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Instant at which a version was published
pub type ReleaseTimestamp = DateTime<Utc>;

/// Version identifier to publish timestamp, in the order versions were first merged
pub type VersionHistory = IndexMap<String, ReleaseTimestamp>;

/// A Maven `groupId` / `artifactId` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
}

impl Coordinate {
    /// Builds a coordinate without checking its parts; both must be non-empty.
    /// Use [`Coordinate::try_new`] for untrusted input.
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    /// Builds a coordinate, rejecting an empty `groupId` or `artifactId`
    pub fn try_new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
    ) -> Result<Self, ParseCoordinateError> {
        let coordinate = Self::new(group_id, artifact_id);
        if coordinate.group_id.is_empty() || coordinate.artifact_id.is_empty() {
            return Err(ParseCoordinateError(coordinate.to_string()));
        }

        Ok(coordinate)
    }

    /// Group id in repository layout, e.g. `org.apache.maven` -> `org/apache/maven`
    pub fn group_path(&self) -> String {
        self.group_id.replace('.', "/")
    }

    /// `{base}/{groupPath}/{artifactId}/maven-metadata.xml`
    pub fn metadata_url(&self, base_url: &str) -> String {
        format!("{}/maven-metadata.xml", self.artifact_directory_url(base_url))
    }

    /// `{base}/{groupPath}/{artifactId}`
    pub fn artifact_directory_url(&self, base_url: &str) -> String {
        format!("{}/{}/{}", base_url, self.group_path(), self.artifact_id)
    }

    /// `{base}/{groupPath}/{artifactId}/{target}`
    pub fn version_directory_url(&self, base_url: &str, target: &str) -> String {
        format!("{}/{}", self.artifact_directory_url(base_url), target)
    }

    /// `{base}/{groupPath}/{artifactId}/{version}/{artifactId}-{version}.pom`
    pub fn pom_url(&self, base_url: &str, version: &str) -> String {
        format!(
            "{}/{}",
            self.version_directory_url(base_url, version),
            self.pom_file_name(version)
        )
    }

    /// `{artifactId}-{version}.pom`
    pub fn pom_file_name(&self, version: &str) -> String {
        format!("{}-{}.pom", self.artifact_id, version)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid coordinate '{0}': expected <groupId>:<artifactId>")]
pub struct ParseCoordinateError(String);

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((group_id, artifact_id)) if !artifact_id.contains(':') => {
                Self::try_new(group_id, artifact_id)
            }
            _ => Err(ParseCoordinateError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const CENTRAL: &str = "https://repo.maven.apache.org/maven2";

    #[test]
    fn metadata_url_replaces_dots_in_group_id() {
        let coordinate = Coordinate::new("org.apache.maven", "apache-maven");

        assert_eq!(
            coordinate.metadata_url(CENTRAL),
            "https://repo.maven.apache.org/maven2/org/apache/maven/apache-maven/maven-metadata.xml"
        );
    }

    #[test]
    fn metadata_url_with_alternative_repository() {
        let coordinate = Coordinate::new("io.spring.platform", "platform");

        assert_eq!(
            coordinate.metadata_url("https://repo.spring.io/artifactory/release"),
            "https://repo.spring.io/artifactory/release/io/spring/platform/platform/maven-metadata.xml"
        );
    }

    #[test]
    fn pom_url_includes_version_directory_and_file_name() {
        let coordinate = Coordinate::new("org.apache.maven", "apache-maven");

        assert_eq!(
            coordinate.pom_url(CENTRAL, "2.0.10"),
            "https://repo.maven.apache.org/maven2/org/apache/maven/apache-maven/2.0.10/apache-maven-2.0.10.pom"
        );
    }

    #[test]
    fn directory_urls_have_no_trailing_separator() {
        let coordinate = Coordinate::new("net.jcip", "jcip-annotations");

        assert_eq!(
            coordinate.artifact_directory_url(CENTRAL),
            "https://repo.maven.apache.org/maven2/net/jcip/jcip-annotations"
        );
        assert_eq!(
            coordinate.version_directory_url(CENTRAL, "1.0"),
            "https://repo.maven.apache.org/maven2/net/jcip/jcip-annotations/1.0"
        );
    }

    #[rstest]
    #[case("org.apache.ant:ant", Some(("org.apache.ant", "ant")))]
    #[case("javax.inject:javax.inject", Some(("javax.inject", "javax.inject")))]
    #[case("org.apache.ant", None)]
    #[case(":ant", None)]
    #[case("org.apache.ant:", None)]
    #[case("a:b:c", None)]
    fn coordinate_from_str_returns_expected(
        #[case] input: &str,
        #[case] expected: Option<(&str, &str)>,
    ) {
        let parsed = input.parse::<Coordinate>().ok();
        assert_eq!(parsed, expected.map(|(g, a)| Coordinate::new(g, a)));
    }

    #[test]
    fn coordinate_display_round_trips_through_from_str() {
        let coordinate = Coordinate::new("org.apache.maven", "maven-core");
        assert_eq!(coordinate.to_string(), "org.apache.maven:maven-core");
    }

    #[rstest]
    #[case("", "apache-maven")]
    #[case("org.apache.maven", "")]
    #[case("", "")]
    fn try_new_rejects_empty_parts(#[case] group_id: &str, #[case] artifact_id: &str) {
        assert!(Coordinate::try_new(group_id, artifact_id).is_err());
    }

    #[test]
    fn try_new_accepts_non_empty_parts() {
        assert_eq!(
            Coordinate::try_new("org.apache.maven", "apache-maven").unwrap(),
            Coordinate::new("org.apache.maven", "apache-maven")
        );
    }
}
