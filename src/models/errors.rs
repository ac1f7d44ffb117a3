use thiserror::Error;

/// Errors when attempting to resolve the versions that
/// get written to gradle.properties
#[derive(Debug, Error)]
pub enum VersionsError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to parse maven metadata: {0}")]
    Xml(#[from] quick_xml::DeError),
    #[error("There was a problem with the version supplied (\"{0}\")")]
    UnknownVersion(String),
    #[error("Maven metadata is missing versioning.release")]
    MissingRelease,
}
