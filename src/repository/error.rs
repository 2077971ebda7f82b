use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid maven-metadata.xml: {0}")]
    MetadataParse(#[from] quick_xml::DeError),

    #[error("POM not found: {url}")]
    PomNotFound { url: String },

    #[error("Last-Modified header is not present for {url}")]
    MissingTimestamp { url: String },

    #[error("Last-Modified value '{value}' for {url} is not an RFC 1123 date")]
    InvalidTimestamp { url: String, value: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Second repository must be configured to communicate with Maven Central")]
    NotCentral,

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
