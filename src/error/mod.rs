//! Error handling module for the highlight pipeline

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Stage failure that aborts a pipeline run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Duration probe failed or returned an unusable value
    #[error("Failed to probe video duration: {source}")]
    Probe { source: DomainError },

    /// Transcode tool failed on one clip
    #[error("Failed to extract clip {index}: {source}")]
    Extract { index: usize, source: DomainError },

    /// Concat list could not be written
    #[error("Failed to write clip manifest: {source}")]
    Manifest { source: DomainError },

    /// Concatenation tool failed
    #[error("Failed to merge clips: {source}")]
    Merge { source: DomainError },
}

impl PipelineError {
    /// Process exit code for this failure kind
    pub fn exit_code(&self) -> u8 {
        match self {
            PipelineError::Probe { .. } => 3,
            PipelineError::Extract { .. } => 4,
            PipelineError::Manifest { .. } => 5,
            PipelineError::Merge { .. } => 6,
        }
    }

    /// Short stage name for messages
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Probe { .. } => "probe",
            PipelineError::Extract { .. } => "extract",
            PipelineError::Manifest { .. } => "manifest",
            PipelineError::Merge { .. } => "merge",
        }
    }
}

/// Configuration load or validation failure
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file named explicitly but missing
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    /// Config file unreadable
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected shape
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Environment override has the wrong shape
    #[error("Invalid value for {var}: {value}")]
    InvalidEnv { var: String, value: String },

    /// Values parsed but violate a constraint
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] DomainError),
}

impl ConfigError {
    pub const EXIT_CODE: u8 = 1;
}

/// Result type alias for configuration loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
