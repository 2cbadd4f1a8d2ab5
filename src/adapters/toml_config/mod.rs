// TOML config adapter - Configuration files in TOML format

use std::path::Path;

use crate::config_initialization::AppConfig;
use crate::error::{ConfigError, ConfigResult};

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Read and parse a config file; missing keys keep their defaults
    pub fn load(path: &Path) -> ConfigResult<AppConfig> {
        let display = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;

        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    /// Deserialize config from TOML string
    pub fn parse(toml_content: &str) -> Result<AppConfig, toml::de::Error> {
        toml::from_str(toml_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_initialization::LogFormat;
    use std::path::PathBuf;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = TomlConfigAdapter::parse("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_full_file() {
        let config = TomlConfigAdapter::parse(
            r#"
process_timeout_secs = 120

[tools]
ffmpeg = "/usr/local/bin/ffmpeg"
ffprobe = "/usr/local/bin/ffprobe"

[encode]
video_codec = "libx265"
crf = 28
preset = "medium"
audio_codec = "libopus"
audio_bitrate = "128k"

[paths]
work_dir = "/srv/reels"
manifest = "list.txt"
output = "reel.mp4"

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.tools.ffprobe, "/usr/local/bin/ffprobe");
        assert_eq!(config.encode.video_codec, "libx265");
        assert_eq!(config.encode.crf, 28);
        assert_eq!(config.paths.work_dir, PathBuf::from("/srv/reels"));
        assert_eq!(config.paths.output, "reel.mp4");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.process_timeout_secs, Some(120));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(TomlConfigAdapter::parse("[encode]\ncrf = \"high\"\n").is_err());
        assert!(TomlConfigAdapter::parse("[logging]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = TomlConfigAdapter::load(Path::new("/no/such/highlight.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
