//! FFprobe adapter for media duration probing

use std::ffi::OsString;

use async_trait::async_trait;
use tracing::debug;

use crate::adapters::process::ProcessRunner;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    program: String,
    runner: ProcessRunner,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter
    pub fn new(program: impl Into<String>, runner: ProcessRunner) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    /// Arguments requesting only the container duration as a bare number
    pub fn duration_args(source: &VideoSource) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        args.push(source.path().as_os_str().to_os_string());
        args
    }

    /// Parse the tool's plain-text duration output
    pub fn parse_duration(stdout: &str) -> Result<f64, DomainError> {
        let trimmed = stdout.trim();
        let seconds = trimmed.parse::<f64>().map_err(|_| {
            DomainError::InvalidOutput(format!("expected a duration in seconds, got '{}'", trimmed))
        })?;

        if !seconds.is_finite() || seconds < 0.0 {
            return Err(DomainError::InvalidOutput(format!(
                "duration out of range: {}",
                trimmed
            )));
        }

        Ok(seconds)
    }
}

#[async_trait]
impl ProbePort for FFprobeAdapter {
    async fn probe_duration(&self, source: &VideoSource) -> Result<f64, DomainError> {
        let output = self
            .runner
            .run(&self.program, &Self::duration_args(source))
            .await?;
        let duration = Self::parse_duration(&output.stdout)?;
        debug!("Probed {}: {:.3}s", source.path().display(), duration);
        Ok(duration)
    }
}
