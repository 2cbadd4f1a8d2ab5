//! End-to-end tests for the `highlight` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the caller's config and environment
fn highlight(work_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("highlight").unwrap();
    cmd.current_dir(work_dir.path())
        .env_remove("HIGHLIGHT_CONFIG")
        .env_remove("HIGHLIGHT_FFMPEG")
        .env_remove("HIGHLIGHT_FFPROBE")
        .env_remove("HIGHLIGHT_TIMEOUT_SECS")
        .env_remove("RUST_LOG")
        .env("HIGHLIGHT_WORK_DIR", work_dir.path())
        .env("HIGHLIGHT_LOG_LEVEL", "warn");
    cmd
}

#[test]
fn test_help_lists_flags() {
    let dir = TempDir::new().unwrap();
    highlight(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--offsets"))
        .stdout(predicate::str::contains("--duration"));
}

#[test]
fn test_missing_input_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    highlight(&dir).assert().failure().code(2);
}

#[test]
fn test_out_of_range_offset_is_rejected() {
    let dir = TempDir::new().unwrap();
    highlight(&dir)
        .args(["movie.mp4", "--offsets", "10", "150"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_missing_config_file_exit_code() {
    let dir = TempDir::new().unwrap();
    highlight(&dir)
        .env("HIGHLIGHT_CONFIG", dir.path().join("absent.toml"))
        .arg("movie.mp4")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_probe_failure_exit_code() {
    let dir = TempDir::new().unwrap();
    highlight(&dir)
        .env("HIGHLIGHT_FFPROBE", "highlight-test-missing-ffprobe")
        .arg("movie.mp4")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("probe"));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[cfg(unix)]
mod fake_tools {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// ffprobe stand-in reporting a 100 second video
    fn fake_ffprobe(dir: &Path) -> PathBuf {
        write_script(dir, "ffprobe", "echo 100.000000\n")
    }

    /// ffmpeg stand-in writing its last argument; if asked, a concat
    /// truncates the output and then fails
    fn fake_ffmpeg(dir: &Path, fail_concat: bool) -> PathBuf {
        let guard = if fail_concat {
            "case \"$*\" in *concat*) : > \"$last\"; echo 'concat failed' >&2; exit 1;; esac\n"
        } else {
            ""
        };
        write_script(
            dir,
            "ffmpeg",
            &format!("for last; do :; done\n{}echo media > \"$last\"\n", guard),
        )
    }

    #[test]
    fn test_full_run_with_fake_tools() {
        let tools = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();

        highlight(&work)
            .env("HIGHLIGHT_FFPROBE", fake_ffprobe(tools.path()))
            .env("HIGHLIGHT_FFMPEG", fake_ffmpeg(tools.path(), false))
            .args(["my movie.mp4", "-p", "5", "50", "-d", "3"])
            .assert()
            .success()
            .stdout(predicate::str::contains("output.mp4"));

        let remaining: Vec<String> = std::fs::read_dir(work.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(remaining, vec!["output.mp4".to_string()]);
    }

    #[test]
    fn test_merge_failure_with_fake_tools() {
        let tools = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();

        highlight(&work)
            .env("HIGHLIGHT_FFPROBE", fake_ffprobe(tools.path()))
            .env("HIGHLIGHT_FFMPEG", fake_ffmpeg(tools.path(), true))
            .arg("movie.mp4")
            .assert()
            .failure()
            .code(6)
            .stderr(predicate::str::contains("concat failed"));

        assert_eq!(std::fs::read_dir(work.path()).unwrap().count(), 0);
    }
}
