// Domain models - Core types and data structures

use std::fmt;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::errors::DomainError;

/// Fixed length of every fade-in transition, in seconds
pub const FADE_IN_SECONDS: f64 = 0.5;

/// Source video a run reads from
#[derive(Debug, Clone, PartialEq)]
pub struct VideoSource {
    pub path: PathBuf,
}

impl VideoSource {
    /// Create a new source reference; existence is left to the probe tool
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(DomainError::BadArgs("Input file cannot be empty".to_string()));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One requested clip position, as a percentage of the source duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClipRequest {
    offset_percent: u8,
}

impl ClipRequest {
    /// Create a clip request; the offset must lie in 0..=100
    pub fn new(offset_percent: u8) -> Result<Self, DomainError> {
        if offset_percent > 100 {
            return Err(DomainError::BadArgs(format!(
                "Offset must be between 0 and 100 percent, got {}",
                offset_percent
            )));
        }
        Ok(Self { offset_percent })
    }

    /// Build requests from raw percentages, keeping their order
    pub fn from_percentages(offsets: &[u8]) -> Result<Vec<Self>, DomainError> {
        offsets.iter().copied().map(Self::new).collect()
    }

    pub fn offset_percent(&self) -> u8 {
        self.offset_percent
    }
}

/// Length of every extracted clip in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipDuration(NonZeroU32);

impl ClipDuration {
    pub fn from_secs(seconds: u32) -> Result<Self, DomainError> {
        NonZeroU32::new(seconds)
            .map(Self)
            .ok_or_else(|| DomainError::BadArgs("Clip duration must be greater than zero".to_string()))
    }

    pub fn as_secs(&self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ClipDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Track a fade applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStream {
    Video,
    Audio,
}

impl FadeStream {
    /// Filter name understood by the transcode tool
    pub fn filter_name(&self) -> &'static str {
        match self {
            FadeStream::Video => "fade",
            FadeStream::Audio => "afade",
        }
    }
}

/// Fade-in transition on one track
///
/// `start` is expressed on the source timeline; the transcode adapter seeks
/// on the output side so the filter clock matches it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeIn {
    pub stream: FadeStream,
    pub start: f64,
    pub duration: f64,
}

impl FadeIn {
    pub fn video(start: f64) -> Self {
        Self {
            stream: FadeStream::Video,
            start,
            duration: FADE_IN_SECONDS,
        }
    }

    pub fn audio(start: f64) -> Self {
        Self {
            stream: FadeStream::Audio,
            start,
            duration: FADE_IN_SECONDS,
        }
    }

    /// Render as a filter expression, e.g. `afade=t=in:st=10.00:d=0.5`
    pub fn to_filter(&self) -> String {
        format!(
            "{}=t=in:st={:.2}:d={}",
            self.stream.filter_name(),
            self.start,
            self.duration
        )
    }
}

impl fmt::Display for FadeIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_filter())
    }
}

/// One planned clip, derived from a request
#[derive(Debug, Clone, PartialEq)]
pub struct ClipPlanItem {
    /// 1-based position in the final reel
    pub index: usize,
    pub start_time: f64,
    pub length: ClipDuration,
    pub is_first: bool,
    /// File name relative to the working directory
    pub output_path: String,
    pub video_fade: Option<FadeIn>,
    pub audio_fade: FadeIn,
}

/// Everything the transcode capability needs to produce one clip
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractJob {
    pub index: usize,
    pub input: PathBuf,
    pub output: PathBuf,
    pub start_time: f64,
    pub clip_length: ClipDuration,
    pub video_fade: Option<FadeIn>,
    pub audio_fade: FadeIn,
}

impl ExtractJob {
    /// Resolve a plan item against the source and working directory
    pub fn from_plan_item(
        source: &VideoSource,
        item: &ClipPlanItem,
        work_dir: &Path,
    ) -> Self {
        Self {
            index: item.index,
            input: source.path.clone(),
            output: work_dir.join(&item.output_path),
            start_time: item.start_time,
            clip_length: item.length,
            video_fade: item.video_fade,
            audio_fade: item.audio_fade,
        }
    }
}

/// Concat list naming each clip in playback order
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    entries: Vec<String>,
}

impl Manifest {
    pub fn from_plan(plan: &[ClipPlanItem]) -> Self {
        Self {
            entries: plan.iter().map(|item| item.output_path.clone()).collect(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Render one `file '<path>'` line per entry
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("file {}\n", Self::quote(entry)))
            .collect()
    }

    /// Quote a path for the concat demuxer; `'` becomes `'\''`
    fn quote(path: &str) -> String {
        format!("'{}'", path.replace('\'', "'\\''"))
    }
}

/// Fixed encoder parameters applied to every clip
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EncodeSettings {
    pub video_codec: String,
    pub crf: u8,
    pub preset: String,
    pub audio_codec: String,
    pub audio_bitrate: String,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            video_codec: "libx264".to_string(),
            crf: 18,
            preset: "slow".to_string(),
            audio_codec: "aac".to_string(),
            audio_bitrate: "192k".to_string(),
        }
    }
}

impl EncodeSettings {
    /// Validate encoder parameters
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.crf > 51 {
            return Err(DomainError::BadArgs(format!(
                "CRF value cannot exceed 51, got {}",
                self.crf
            )));
        }
        for (name, value) in [
            ("video_codec", &self.video_codec),
            ("preset", &self.preset),
            ("audio_codec", &self.audio_codec),
            ("audio_bitrate", &self.audio_bitrate),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::BadArgs(format!("{} cannot be empty", name)));
            }
        }
        Ok(())
    }
}

/// Stages of one pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Init,
    Probing,
    Planning,
    Extracting(usize),
    Merging,
    Cleanup,
    Done,
    Failed,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::Init => write!(f, "init"),
            PipelineStage::Probing => write!(f, "probing"),
            PipelineStage::Planning => write!(f, "planning"),
            PipelineStage::Extracting(index) => write!(f, "extracting clip {}", index),
            PipelineStage::Merging => write!(f, "merging"),
            PipelineStage::Cleanup => write!(f, "cleanup"),
            PipelineStage::Done => write!(f, "done"),
            PipelineStage::Failed => write!(f, "failed"),
        }
    }
}

/// Non-fatal failure to delete a temporary artifact
#[derive(Debug, Clone, PartialEq)]
pub struct CleanupWarning {
    pub path: PathBuf,
    pub cause: DomainError,
}

impl CleanupWarning {
    pub fn is_not_found(&self) -> bool {
        matches!(self.cause, DomainError::NotFound(_))
    }
}

impl fmt::Display for CleanupWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not remove {}: {}", self.path.display(), self.cause)
    }
}

/// Outcome of the cleanup stage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanupReport {
    /// Every path cleanup tried to delete, in order
    pub attempted: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
    pub warnings: Vec<CleanupWarning>,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
