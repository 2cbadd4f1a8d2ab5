//! Highlight Reel Library
//!
//! Cuts short clips at percentage offsets of one video, fades each clip in and
//! joins them with a stream-copy concatenation. The media work is delegated to
//! ffprobe and ffmpeg; this crate plans the clips and drives the pipeline.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use app::{HighlightInteractor, PipelineResult, RunRequest};
pub use config_initialization::AppConfig;
pub use domain::errors::DomainError;
pub use domain::model::{ClipDuration, ClipPlanItem, ClipRequest, FadeIn, Manifest, VideoSource};
pub use domain::rules::ClipPlanner;
pub use error::{ConfigError, PipelineError};
