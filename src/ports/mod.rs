// Ports - Interface definitions (contracts)

use std::path::Path;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for media duration probing
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Container-level duration of the source, in seconds
    async fn probe_duration(&self, source: &VideoSource) -> Result<f64, DomainError>;
}

/// Port for per-clip transcoding
#[async_trait]
pub trait TranscodePort: Send + Sync {
    /// Cut, fade and re-encode one clip, overwriting `job.output`
    async fn extract_clip(&self, job: &ExtractJob) -> Result<(), DomainError>;
}

/// Port for stream-copy concatenation
#[async_trait]
pub trait ConcatPort: Send + Sync {
    /// Join the clips listed in `manifest` into `output` without re-encoding
    async fn concat(&self, manifest: &Path, output: &Path) -> Result<(), DomainError>;
}

/// Port for file system operations
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Write a text file, replacing any previous content
    async fn write_file(&self, file_path: &Path, contents: &str) -> Result<(), DomainError>;

    /// Delete file; a missing file is reported as `DomainError::NotFound`
    async fn delete_file(&self, file_path: &Path) -> Result<(), DomainError>;
}
