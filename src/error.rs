/// Error types for the survey
///
/// Startup errors (config, catalog) are fatal. Export and preview
/// errors are reported on screen and never touch the response log.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to build the image catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Image directory missing or unreadable
    #[error("Cannot read image directory {}: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scan task was cancelled or panicked
    #[error("Catalog scan failed: {0}")]
    Task(String),
}

/// A submission that does not fit the current survey stage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Demographics have already been collected")]
    DemographicsAlreadyCollected,

    #[error("Demographics must be submitted before rating images")]
    DemographicsRequired,

    #[error("The survey is already complete")]
    SurveyCompleted,
}

/// Failure to write exported responses
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to resolve the survey configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Failure to decode an image for display
#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Image file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Decode task failed: {0}")]
    Task(String),
}
