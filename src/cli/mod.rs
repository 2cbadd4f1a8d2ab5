//! CLI module for the highlight reel tool
//!
//! This module handles command-line argument parsing and turns the parsed
//! arguments into a run request.

use std::path::PathBuf;

use clap::Parser;

use crate::app::RunRequest;
use crate::domain::errors::DomainError;
use crate::domain::model::{ClipDuration, ClipRequest, VideoSource};

pub mod args;

/// Highlight reel builder
///
/// Cuts short clips at percentage positions of a video, fades each one in and
/// joins them into a single file.
#[derive(Parser, Debug)]
#[command(name = "highlight")]
#[command(about = "Highlight reel builder - cut, fade and join clips from one video")]
#[command(version)]
pub struct Cli {
    /// Input video file path
    pub input: PathBuf,

    /// Clip positions as percentages of the video duration, in playback order
    #[arg(
        short = 'p',
        long,
        num_args = 1..,
        value_delimiter = ',',
        default_values_t = [10u8, 50, 90],
        value_parser = args::parse_percent
    )]
    pub offsets: Vec<u8>,

    /// Length of each clip in seconds
    #[arg(short, long, default_value_t = 10, value_parser = args::parse_clip_seconds)]
    pub duration: u32,
}

impl Cli {
    /// Convert parsed arguments into a validated run request
    pub fn to_request(&self) -> Result<RunRequest, DomainError> {
        RunRequest::new(
            VideoSource::new(self.input.clone())?,
            ClipRequest::from_percentages(&self.offsets)?,
            ClipDuration::from_secs(self.duration)?,
        )
    }
}
