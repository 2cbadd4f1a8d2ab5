//! FFmpeg execution adapter
//!
//! Builds ffmpeg argument vectors for clip extraction and stream-copy
//! concatenation, then runs them through the shared process runner.

use std::ffi::OsString;
use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::adapters::process::ProcessRunner;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Flags shared by every ffmpeg invocation
const COMMON_ARGS: [&str; 5] = ["-hide_banner", "-nostdin", "-loglevel", "error", "-y"];

/// FFmpeg-based execution adapter
pub struct FFmpegAdapter {
    program: String,
    settings: EncodeSettings,
    runner: ProcessRunner,
}

impl FFmpegAdapter {
    /// Create new FFmpeg adapter
    pub fn new(program: impl Into<String>, settings: EncodeSettings, runner: ProcessRunner) -> Self {
        Self {
            program: program.into(),
            settings,
            runner,
        }
    }

    /// Arguments for one clip.
    ///
    /// `-ss` follows `-i` so the filters see source timestamps, which is the
    /// clock `FadeIn::start` is expressed in.
    pub fn extract_args(job: &ExtractJob, settings: &EncodeSettings) -> Vec<OsString> {
        let mut args: Vec<OsString> = COMMON_ARGS.into_iter().map(OsString::from).collect();

        args.push("-i".into());
        args.push(job.input.as_os_str().to_os_string());

        if let Some(video_fade) = &job.video_fade {
            args.push("-vf".into());
            args.push(video_fade.to_filter().into());
        }
        args.push("-af".into());
        args.push(job.audio_fade.to_filter().into());

        args.push("-ss".into());
        args.push(format!("{:.2}", job.start_time).into());
        args.push("-t".into());
        args.push(job.clip_length.to_string().into());

        for (flag, value) in [
            ("-c:v", settings.video_codec.clone()),
            ("-crf", settings.crf.to_string()),
            ("-preset", settings.preset.clone()),
            ("-c:a", settings.audio_codec.clone()),
            ("-b:a", settings.audio_bitrate.clone()),
        ] {
            args.push(flag.into());
            args.push(value.into());
        }

        args.push(job.output.as_os_str().to_os_string());
        args
    }

    /// Arguments joining the manifest's clips without re-encoding
    pub fn concat_args(manifest: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = COMMON_ARGS.into_iter().map(OsString::from).collect();
        for arg in ["-f", "concat", "-safe", "0", "-i"] {
            args.push(arg.into());
        }
        args.push(manifest.as_os_str().to_os_string());
        args.push("-c".into());
        args.push("copy".into());
        args.push(output.as_os_str().to_os_string());
        args
    }
}

#[async_trait]
impl TranscodePort for FFmpegAdapter {
    async fn extract_clip(&self, job: &ExtractJob) -> Result<(), DomainError> {
        let args = Self::extract_args(job, &self.settings);
        self.runner.run(&self.program, &args).await?;
        debug!("Clip {} written to {}", job.index, job.output.display());
        Ok(())
    }
}

#[async_trait]
impl ConcatPort for FFmpegAdapter {
    async fn concat(&self, manifest: &Path, output: &Path) -> Result<(), DomainError> {
        let args = Self::concat_args(manifest, output);
        self.runner.run(&self.program, &args).await?;
        Ok(())
    }
}
