// Highlight interactor - Orchestrates the extract, merge and cleanup pipeline

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::config_initialization::PathSettings;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::error::PipelineError;
use crate::ports::*;

/// What one run should produce
#[derive(Debug, Clone, PartialEq)]
pub struct RunRequest {
    pub source: VideoSource,
    pub requests: Vec<ClipRequest>,
    pub clip_length: ClipDuration,
}

impl RunRequest {
    /// Create a run request; at least one clip is required
    pub fn new(
        source: VideoSource,
        requests: Vec<ClipRequest>,
        clip_length: ClipDuration,
    ) -> Result<Self, DomainError> {
        if requests.is_empty() {
            return Err(DomainError::BadArgs(
                "At least one clip offset is required".to_string(),
            ));
        }
        Ok(Self {
            source,
            requests,
            clip_length,
        })
    }
}

/// Result of one run; cleanup has always happened by the time it exists
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineResult {
    /// Path of the merged video, or the stage failure that stopped the run
    pub outcome: Result<PathBuf, PipelineError>,
    pub cleanup: CleanupReport,
    pub final_stage: PipelineStage,
}

impl PipelineResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<&PipelineError> {
        self.outcome.as_ref().err()
    }

    pub fn output(&self) -> Option<&PathBuf> {
        self.outcome.as_ref().ok()
    }
}

/// Interactor for the highlight reel use case
pub struct HighlightInteractor {
    probe_port: Arc<dyn ProbePort>,
    transcode_port: Arc<dyn TranscodePort>,
    concat_port: Arc<dyn ConcatPort>,
    fs_port: Arc<dyn FsPort>,
    paths: PathSettings,
}

impl HighlightInteractor {
    /// Create new highlight interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        transcode_port: Arc<dyn TranscodePort>,
        concat_port: Arc<dyn ConcatPort>,
        fs_port: Arc<dyn FsPort>,
        paths: PathSettings,
    ) -> Self {
        Self {
            probe_port,
            transcode_port,
            concat_port,
            fs_port,
            paths,
        }
    }

    /// Run the whole pipeline.
    ///
    /// Stages run strictly in order and the first failure stops the run.
    /// Cleanup runs exactly once afterwards, whatever the outcome, and its
    /// own failures only become warnings in the report.
    pub async fn run(&self, request: &RunRequest) -> PipelineResult {
        info!(
            "Building highlight reel from {} ({} clips of {}s)",
            request.source.path().display(),
            request.requests.len(),
            request.clip_length
        );
        self.enter(PipelineStage::Init);

        let mut artifacts = Vec::new();
        let outcome = self.execute(request, &mut artifacts).await;
        let cleanup = self.cleanup(&artifacts).await;

        let final_stage = match &outcome {
            Ok(output) => {
                info!("Output video saved as: {}", output.display());
                PipelineStage::Done
            }
            Err(e) => {
                error!("Pipeline failed during {} stage: {}", e.stage(), e);
                PipelineStage::Failed
            }
        };
        self.enter(final_stage);

        PipelineResult {
            outcome,
            cleanup,
            final_stage,
        }
    }

    /// Probe, plan, extract and merge; temporary paths are recorded in
    /// `artifacts` as soon as the plan names them
    async fn execute(
        &self,
        request: &RunRequest,
        artifacts: &mut Vec<PathBuf>,
    ) -> Result<PathBuf, PipelineError> {
        self.enter(PipelineStage::Probing);
        let total_duration = self
            .probe_port
            .probe_duration(&request.source)
            .await
            .map_err(|source| PipelineError::Probe { source })?;
        info!("Video duration: {:.2}s", total_duration);

        self.enter(PipelineStage::Planning);
        let plan = ClipPlanner::build_plan(total_duration, &request.requests, request.clip_length);
        artifacts.extend(self.artifacts_for(&plan));

        for item in &plan {
            self.enter(PipelineStage::Extracting(item.index));
            let job = ExtractJob::from_plan_item(&request.source, item, &self.paths.work_dir);
            debug!(
                "Clip {}: start {:.2}s, video fade {}, audio fade {}",
                item.index,
                item.start_time,
                item.video_fade
                    .map(|fade| fade.to_filter())
                    .unwrap_or_else(|| "none".to_string()),
                item.audio_fade
            );
            self.transcode_port
                .extract_clip(&job)
                .await
                .map_err(|source| PipelineError::Extract {
                    index: item.index,
                    source,
                })?;
        }

        self.enter(PipelineStage::Merging);
        let manifest_path = self.manifest_path();
        let manifest = Manifest::from_plan(&plan);
        self.fs_port
            .write_file(&manifest_path, &manifest.render())
            .await
            .map_err(|source| PipelineError::Manifest { source })?;

        let output_path = self.paths.work_dir.join(&self.paths.output);
        if let Err(source) = self.concat_port.concat(&manifest_path, &output_path).await {
            // The tool truncates the output before it can fail
            artifacts.push(output_path);
            return Err(PipelineError::Merge { source });
        }

        Ok(output_path)
    }

    /// Temporary files a plan may leave behind: the manifest, then every clip
    pub fn artifacts_for(&self, plan: &[ClipPlanItem]) -> Vec<PathBuf> {
        std::iter::once(self.manifest_path())
            .chain(plan.iter().map(|item| self.paths.work_dir.join(&item.output_path)))
            .collect()
    }

    /// Best-effort removal of temporary files; never fails
    pub async fn cleanup(&self, artifacts: &[PathBuf]) -> CleanupReport {
        self.enter(PipelineStage::Cleanup);
        let mut report = CleanupReport::default();

        for path in artifacts {
            report.attempted.push(path.clone());
            match self.fs_port.delete_file(path).await {
                Ok(()) => {
                    debug!("Removed {}", path.display());
                    report.removed.push(path.clone());
                }
                Err(cause) => {
                    let warning = CleanupWarning {
                        path: path.clone(),
                        cause,
                    };
                    warn!("Cleanup: {}", warning);
                    report.warnings.push(warning);
                }
            }
        }

        report
    }

    fn manifest_path(&self) -> PathBuf {
        self.paths.work_dir.join(&self.paths.manifest)
    }

    fn enter(&self, stage: PipelineStage) {
        info!("Stage: {}", stage);
    }
}
