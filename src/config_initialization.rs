//! Configuration initialization and hierarchy management

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::adapters::toml_config::TomlConfigAdapter;
use crate::domain::errors::DomainError;
use crate::domain::model::EncodeSettings;
use crate::error::{ConfigError, ConfigResult};

/// File looked up in the current directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "highlight.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "HIGHLIGHT_CONFIG";

/// Immutable application configuration, built once at start-up
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tools: ToolPaths,
    pub encode: EncodeSettings,
    pub paths: PathSettings,
    pub logging: LogSettings,
    /// Kill an external tool after this many seconds; unset waits forever
    pub process_timeout_secs: Option<u64>,
    /// File the values were loaded from; `None` when only defaults apply
    #[serde(skip)]
    pub source_file: Option<PathBuf>,
    /// Number of `HIGHLIGHT_*` variables that overrode a value
    #[serde(skip)]
    pub env_overrides: usize,
}

/// Executables for the external media tools
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToolPaths {
    pub ffmpeg: String,
    pub ffprobe: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
        }
    }
}

/// Fixed file locations, relative to `work_dir`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    pub work_dir: PathBuf,
    pub manifest: String,
    pub output: String,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            manifest: "file_list.txt".to_string(),
            output: "output.mp4".to_string(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-line format
    Pretty,
    /// Single-line text format
    #[default]
    Compact,
    /// JSON format for structured logging
    Json,
}

/// Logging options
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Bounded wait for external tools, if configured
    pub fn process_timeout(&self) -> Option<Duration> {
        self.process_timeout_secs.map(Duration::from_secs)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        self.encode.validate()?;

        for (name, value) in [
            ("tools.ffmpeg", &self.tools.ffmpeg),
            ("tools.ffprobe", &self.tools.ffprobe),
            ("paths.manifest", &self.paths.manifest),
            ("paths.output", &self.paths.output),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::BadArgs(format!("{} cannot be empty", name)));
            }
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(DomainError::BadArgs(format!(
                    "Invalid log level: {}. Valid levels: trace, debug, info, warn, error",
                    other
                )))
            }
        }

        if self.process_timeout_secs == Some(0) {
            return Err(DomainError::BadArgs(
                "process_timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Build the configuration following precedence: Env > File > Defaults.
///
/// CLI arguments only carry the run request, so they never override these
/// values. `env` is the variable lookup, `std::env::var` in production.
pub fn initialize_configuration<F>(env: F) -> ConfigResult<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match locate_config_file(&env)? {
        Some(path) => {
            let mut config = TomlConfigAdapter::load(&path)?;
            config.source_file = Some(path);
            config
        }
        None => AppConfig::default(),
    };

    apply_environment_overrides(&mut config, &env)?;
    config.validate()?;

    Ok(config)
}

/// Pick the config file: explicit env path must exist, the default is optional
fn locate_config_file<F>(env: &F) -> ConfigResult<Option<PathBuf>>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(explicit) = env(CONFIG_ENV_VAR) {
        let path = PathBuf::from(&explicit);
        if !path.is_file() {
            return Err(ConfigError::FileNotFound { path: explicit });
        }
        return Ok(Some(path));
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    Ok(default_path.is_file().then(|| default_path.to_path_buf()))
}

/// Load environment variables and apply to configuration
fn apply_environment_overrides<F>(config: &mut AppConfig, env: &F) -> ConfigResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    let mut env_overrides = 0;

    if let Some(value) = env("HIGHLIGHT_FFMPEG") {
        config.tools.ffmpeg = value;
        env_overrides += 1;
    }
    if let Some(value) = env("HIGHLIGHT_FFPROBE") {
        config.tools.ffprobe = value;
        env_overrides += 1;
    }
    if let Some(value) = env("HIGHLIGHT_WORK_DIR") {
        config.paths.work_dir = PathBuf::from(value);
        env_overrides += 1;
    }
    if let Some(value) = env("HIGHLIGHT_LOG_LEVEL") {
        config.logging.level = value;
        env_overrides += 1;
    }
    if let Some(value) = env("HIGHLIGHT_TIMEOUT_SECS") {
        let seconds = value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
            var: "HIGHLIGHT_TIMEOUT_SECS".to_string(),
            value: value.clone(),
        })?;
        config.process_timeout_secs = Some(seconds);
        env_overrides += 1;
    }

    config.env_overrides = env_overrides;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tools.ffmpeg, "ffmpeg");
        assert_eq!(config.paths.manifest, "file_list.txt");
        assert_eq!(config.paths.output, "output.mp4");
        assert_eq!(config.process_timeout(), None);
        assert_eq!(config.source_file, None);
    }

    #[test]
    fn test_environment_overrides() {
        let mut config = AppConfig::default();
        let env = env_from(&[
            ("HIGHLIGHT_FFPROBE", "/opt/ff/ffprobe"),
            ("HIGHLIGHT_WORK_DIR", "/tmp/reel"),
            ("HIGHLIGHT_TIMEOUT_SECS", "30"),
        ]);

        apply_environment_overrides(&mut config, &env).unwrap();

        assert_eq!(config.tools.ffprobe, "/opt/ff/ffprobe");
        assert_eq!(config.tools.ffmpeg, "ffmpeg");
        assert_eq!(config.paths.work_dir, PathBuf::from("/tmp/reel"));
        assert_eq!(config.process_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.env_overrides, 3);
    }

    #[test]
    fn test_invalid_timeout_env() {
        let mut config = AppConfig::default();
        let env = env_from(&[("HIGHLIGHT_TIMEOUT_SECS", "soon")]);
        let err = apply_environment_overrides(&mut config, &env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { .. }));
    }

    #[test]
    fn test_explicit_config_file_must_exist() {
        let env = env_from(&[(CONFIG_ENV_VAR, "/definitely/not/here.toml")]);
        let err = initialize_configuration(env).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_explicit_config_file_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[encode]\ncrf = 23\n\n[tools]\nffmpeg = \"/usr/bin/ffmpeg\"\n").unwrap();

        let path_str = path.to_string_lossy().to_string();
        let env = env_from(&[
            (CONFIG_ENV_VAR, path_str.as_str()),
            ("HIGHLIGHT_FFMPEG", "ffmpeg-git"),
        ]);
        let config = initialize_configuration(env).unwrap();

        assert_eq!(config.encode.crf, 23);
        assert_eq!(config.encode.preset, "slow");
        assert_eq!(config.tools.ffmpeg, "ffmpeg-git");
        assert_eq!(config.source_file, Some(path));
        assert_eq!(config.env_overrides, 1);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.process_timeout_secs = Some(0);
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.paths.output = String::new();
        assert!(config.validate().is_err());
    }
}
