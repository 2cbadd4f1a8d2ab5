// Local filesystem adapter - File system operations over tokio::fs

use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::ports::*;

/// Local filesystem adapter
#[derive(Debug, Clone, Default)]
pub struct LocalFsAdapter;

impl LocalFsAdapter {
    /// Create new local filesystem adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FsPort for LocalFsAdapter {
    async fn write_file(&self, file_path: &Path, contents: &str) -> Result<(), DomainError> {
        tokio::fs::write(file_path, contents).await.map_err(|e| {
            DomainError::FsFail(format!("Failed to write {}: {}", file_path.display(), e))
        })
    }

    async fn delete_file(&self, file_path: &Path) -> Result<(), DomainError> {
        match tokio::fs::remove_file(file_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(DomainError::NotFound(file_path.display().to_string()))
            }
            Err(e) => Err(DomainError::FsFail(format!(
                "Failed to delete {}: {}",
                file_path.display(),
                e
            ))),
        }
    }
}
