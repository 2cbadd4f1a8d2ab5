// Domain rules - Clip planning policy

use crate::domain::model::*;

/// Turns percentage requests into an ordered clip plan
pub struct ClipPlanner;

impl ClipPlanner {
    /// Absolute start time for an offset percentage of the total duration
    pub fn start_time(total_duration: f64, request: ClipRequest) -> f64 {
        total_duration * (f64::from(request.offset_percent()) / 100.0)
    }

    /// Output file name for the clip at a 0-based position
    pub fn output_name(position: usize) -> String {
        format!("clip_{}.mp4", position + 1)
    }

    /// Build one plan item per request, in request order.
    ///
    /// The first clip only fades its audio; every later clip fades both
    /// tracks. Start times are not checked against the total duration or the
    /// clip length; the transcode tool decides what to do with overruns.
    pub fn build_plan(
        total_duration: f64,
        requests: &[ClipRequest],
        clip_length: ClipDuration,
    ) -> Vec<ClipPlanItem> {
        requests
            .iter()
            .enumerate()
            .map(|(position, request)| {
                let start_time = Self::start_time(total_duration, *request);
                let is_first = position == 0;

                ClipPlanItem {
                    index: position + 1,
                    start_time,
                    length: clip_length,
                    is_first,
                    output_path: Self::output_name(position),
                    video_fade: (!is_first).then(|| FadeIn::video(start_time)),
                    audio_fade: FadeIn::audio(start_time),
                }
            })
            .collect()
    }
}
