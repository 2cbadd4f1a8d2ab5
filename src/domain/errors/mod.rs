// Domain errors - Failures reported by the capability ports

use std::fmt;

/// Capability-level error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid arguments provided
    BadArgs(String),
    /// External tool could not be started
    ToolUnavailable(String),
    /// External tool ran but exited unsuccessfully
    ToolFailed(String),
    /// External tool exceeded the configured wait
    Timeout(String),
    /// External tool output could not be interpreted
    InvalidOutput(String),
    /// File system operation failed
    FsFail(String),
    /// File system target does not exist
    NotFound(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
            DomainError::ToolUnavailable(msg) => write!(f, "Tool unavailable: {}", msg),
            DomainError::ToolFailed(msg) => write!(f, "Tool failed: {}", msg),
            DomainError::Timeout(msg) => write!(f, "Timed out: {}", msg),
            DomainError::InvalidOutput(msg) => write!(f, "Invalid tool output: {}", msg),
            DomainError::FsFail(msg) => write!(f, "File system error: {}", msg),
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
