// Process adapter - Runs external tools from argument vectors

use std::ffi::{OsStr, OsString};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::*;

/// Captured result of a successful tool run
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub stdout: String,
}

/// Spawns external tools and waits for them, optionally with a bound
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    timeout: Option<Duration>,
}

impl ProcessRunner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    /// Run `program` with `args` and return its output.
    ///
    /// Arguments go straight to the process; nothing is shell-split. A
    /// process still running when the timeout expires is killed.
    pub async fn run<S>(&self, program: &str, args: &[S]) -> Result<ProcessOutput, DomainError>
    where
        S: AsRef<OsStr>,
    {
        debug!("Running command: {}", describe(program, args));

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| DomainError::ToolUnavailable(format!("{}: {}", program, e)))?;

        let wait = child.wait_with_output();
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, wait).await.map_err(|_| {
                DomainError::Timeout(format!(
                    "{} did not finish within {}s",
                    program,
                    limit.as_secs_f64()
                ))
            })?,
            None => wait.await,
        }
        .map_err(|e| DomainError::ToolFailed(format!("{}: {}", program, e)))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let detail = stderr.trim();
            return Err(DomainError::ToolFailed(if detail.is_empty() {
                format!("{} exited with {}", program, output.status)
            } else {
                format!("{} exited with {}: {}", program, output.status, detail)
            }));
        }

        if !stderr.trim().is_empty() {
            debug!("{} stderr: {}", program, stderr.trim());
        }

        Ok(ProcessOutput { stdout })
    }
}

/// Render a command for log output
pub fn describe<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    let mut line = OsString::from(program);
    for arg in args {
        line.push(" ");
        line.push(arg.as_ref());
    }
    line.to_string_lossy().into_owned()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_captures_stdout() {
        let runner = ProcessRunner::default();
        let output = runner.run("sh", &["-c", "printf '42.5\\n'"]).await.unwrap();
        assert_eq!(output.stdout.trim(), "42.5");
    }

    #[tokio::test]
    async fn test_stderr_on_success_is_not_mixed_into_stdout() {
        let runner = ProcessRunner::default();
        let output = runner
            .run("sh", &["-c", "echo frame=42 >&2; printf 'done'"])
            .await
            .unwrap();
        assert_eq!(output.stdout, "done");
    }

    #[tokio::test]
    async fn test_nonzero_exit_carries_stderr() {
        let runner = ProcessRunner::default();
        let err = runner
            .run("sh", &["-c", "echo broken pipe >&2; exit 3"])
            .await
            .unwrap_err();
        match err {
            DomainError::ToolFailed(message) => assert!(message.contains("broken pipe")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_program() {
        let runner = ProcessRunner::default();
        let err = runner
            .run("highlight-no-such-tool", &["--version"])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ToolUnavailable(_)));
    }

    #[tokio::test]
    async fn test_timeout_kills_process() {
        let runner = ProcessRunner::new(Some(Duration::from_millis(100)));
        let err = runner.run("sleep", &["5"]).await.unwrap_err();
        assert!(matches!(err, DomainError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_arguments_are_not_shell_split() {
        let runner = ProcessRunner::default();
        let output = runner
            .run("sh", &["-c", "printf '%s' \"$1\"", "sh", "two words"])
            .await
            .unwrap();
        assert_eq!(output.stdout, "two words");
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe("ffmpeg", &["-i", "a b.mp4"]), "ffmpeg -i a b.mp4");
    }
}
