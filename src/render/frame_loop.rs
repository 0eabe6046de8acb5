//! Frame drivers: feed presentation ticks to a handle and collect what it shows.

use std::time::Duration;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::StrokesResult;
use crate::render::handle::AnimationHandle;

fn begin(handle: &AnimationHandle, fps: Fps, sink: &mut dyn FrameSink) -> StrokesResult<()> {
    let (width, height) = handle.frame_size();
    sink.begin(SinkConfig { width, height, fps })
}

/// Render `frames` frames with synthetic timestamps `1 / fps` apart.
///
/// Timestamps continue after the handle's last tick, so a handle that was already driven keeps
/// its position. Pausing the handle beforehand yields identical frames.
#[tracing::instrument(skip(handle, sink), fields(format = %handle.format(), code_point = handle.code_point()))]
pub fn render_frames(
    handle: &mut AnimationHandle,
    fps: Fps,
    frames: u64,
    sink: &mut dyn FrameSink,
) -> StrokesResult<()> {
    let base = handle
        .last_timestamp()
        .map_or(0.0, |t| t + fps.frame_duration_secs());
    begin(handle, fps, sink)?;
    for i in 0..frames {
        let idx = FrameIndex(i);
        handle.on_frame(base + fps.frame_to_secs(idx));
        if handle.is_disposed() {
            break;
        }
        sink.push_frame(idx, &handle.current_frame()?)?;
    }
    sink.end()
}

/// Real-time driver: one tick per `tokio` interval period, timestamps from the wall clock.
///
/// Stops after `frames` frames or as soon as the handle is disposed.
#[tracing::instrument(skip(handle, sink), fields(format = %handle.format(), code_point = handle.code_point()))]
pub async fn run_frame_loop(
    handle: &mut AnimationHandle,
    fps: Fps,
    frames: u64,
    sink: &mut dyn FrameSink,
) -> StrokesResult<()> {
    let base = handle.last_timestamp().unwrap_or(0.0);
    let start = tokio::time::Instant::now();
    let mut interval = tokio::time::interval(Duration::from_secs_f64(fps.frame_duration_secs()));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    begin(handle, fps, sink)?;
    for i in 0..frames {
        let tick = interval.tick().await;
        if handle.is_disposed() {
            break;
        }
        handle.on_frame(base + tick.duration_since(start).as_secs_f64());
        sink.push_frame(FrameIndex(i), &handle.current_frame()?)?;
    }
    sink.end()
}
