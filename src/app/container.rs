use std::sync::Arc;

use crate::adapters::{FFmpegAdapter, FFprobeAdapter, LocalFsAdapter, ProcessRunner};
use crate::app::highlight_interactor::HighlightInteractor;
use crate::config_initialization::AppConfig;
use crate::ports::{ConcatPort, FsPort, ProbePort, TranscodePort};

pub trait AppContainer: Send + Sync {
    fn highlight_interactor(&self) -> Arc<HighlightInteractor>;
}

pub struct DefaultAppContainer {
    highlight_interactor: Arc<HighlightInteractor>,
}

impl DefaultAppContainer {
    /// Wire the ffmpeg-backed adapters from configuration
    pub fn new(config: &AppConfig) -> Self {
        let runner = ProcessRunner::new(config.process_timeout());

        let probe_port = Arc::new(FFprobeAdapter::new(config.tools.ffprobe.clone(), runner.clone()));
        let ffmpeg = Arc::new(FFmpegAdapter::new(
            config.tools.ffmpeg.clone(),
            config.encode.clone(),
            runner,
        ));
        let fs_port = Arc::new(LocalFsAdapter::new());

        let highlight_interactor = Arc::new(HighlightInteractor::new(
            probe_port as Arc<dyn ProbePort>,
            Arc::clone(&ffmpeg) as Arc<dyn TranscodePort>,
            ffmpeg as Arc<dyn ConcatPort>,
            fs_port as Arc<dyn FsPort>,
            config.paths.clone(),
        ));

        Self {
            highlight_interactor,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn highlight_interactor(&self) -> Arc<HighlightInteractor> {
        Arc::clone(&self.highlight_interactor)
    }
}
