//! Time sources behind the animated surfaces.
//!
//! [`FrameClock`] is the raster back-end's elapsed-time accumulator. [`DocumentTimeline`] stands
//! in for a rendering engine's own timeline: it holds explicit keyframe effects and follows the
//! Web Animations start/hold-time rules for `play`, `pause` and `cancel`.

use crate::animation::keyframes::{DashArray, Keyframe, sample_keyframes};

/// Elapsed-time accumulator advanced by presentation timestamps (seconds).
///
/// While paused, every tick re-anchors the previous timestamp so no time is consumed. Elapsed
/// time restarts at 0 once it exceeds one loop.
#[derive(Clone, Debug)]
pub struct FrameClock {
    previous: Option<f64>,
    elapsed: f64,
    total: f64,
}

impl FrameClock {
    /// Clock for a loop of `total` seconds.
    pub fn new(total: f64) -> Self {
        Self {
            previous: None,
            elapsed: 0.0,
            total,
        }
    }

    /// Advance to `timestamp` and return the new elapsed time.
    pub fn tick(&mut self, timestamp: f64, paused: bool) -> f64 {
        let previous = match self.previous {
            Some(p) if !paused => p,
            _ => timestamp,
        };
        self.elapsed += (timestamp - previous).max(0.0);
        if self.elapsed > self.total {
            self.elapsed = 0.0;
        }
        self.previous = Some(timestamp);
        self.elapsed
    }

    /// Elapsed seconds within the current loop.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Forget the previous timestamp; the next tick consumes no time.
    pub fn reanchor(&mut self) {
        self.previous = None;
    }

    /// Restart the loop from the beginning.
    pub fn reset(&mut self) {
        self.previous = None;
        self.elapsed = 0.0;
    }
}

/// Animated property of a stroke path.
#[derive(Clone, Debug, PartialEq)]
pub enum TrackKeyframes {
    /// `stroke-dasharray` reveal.
    StrokeDasharray(Vec<Keyframe<DashArray>>),
    /// `stroke-width` step.
    StrokeWidth(Vec<Keyframe<f64>>),
}

/// Value of one track at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackValue {
    /// Current dash array.
    StrokeDasharray(DashArray),
    /// Current stroke width.
    StrokeWidth(f64),
}

/// Keyframes bound to the element they animate.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeEffect {
    /// Id of the animated element.
    pub target: String,
    /// Property keyframes.
    pub keyframes: TrackKeyframes,
}

/// Iteration timing of an effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectTiming {
    /// Length of one iteration in milliseconds.
    pub duration_ms: f64,
    /// Iteration count; `f64::INFINITY` loops forever.
    pub iterations: f64,
}

impl EffectTiming {
    /// Endless loop of `duration_ms`.
    pub fn looping(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            iterations: f64::INFINITY,
        }
    }
}

/// Play state as reported by Web Animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    /// Cancelled or never played.
    Idle,
    /// Advancing with the timeline (including a pending play).
    Running,
    /// Frozen at its hold time.
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum AnimState {
    Idle,
    PendingPlay { hold: f64 },
    Running { start: f64 },
    Paused { hold: f64 },
}

/// One effect playing on a [`DocumentTimeline`].
#[derive(Clone, Debug)]
pub struct Animation {
    effect: KeyframeEffect,
    timing: EffectTiming,
    state: AnimState,
}

impl Animation {
    /// Effect being played.
    pub fn effect(&self) -> &KeyframeEffect {
        &self.effect
    }

    /// Timing of the effect.
    pub fn timing(&self) -> EffectTiming {
        self.timing
    }

    /// Current play state.
    pub fn play_state(&self) -> PlayState {
        match self.state {
            AnimState::Idle => PlayState::Idle,
            AnimState::PendingPlay { .. } | AnimState::Running { .. } => PlayState::Running,
            AnimState::Paused { .. } => PlayState::Paused,
        }
    }

    /// Local time in milliseconds given the timeline time.
    pub fn current_time(&self, timeline_time: Option<f64>) -> Option<f64> {
        match self.state {
            AnimState::Idle => None,
            AnimState::PendingPlay { hold } | AnimState::Paused { hold } => Some(hold),
            AnimState::Running { start } => timeline_time.map(|t| t - start),
        }
    }

    fn play(&mut self, now: Option<f64>) {
        let hold = match self.state {
            AnimState::Running { .. } | AnimState::PendingPlay { .. } => return,
            AnimState::Idle => 0.0,
            AnimState::Paused { hold } => hold,
        };
        self.state = match now {
            Some(t) => AnimState::Running { start: t - hold },
            None => AnimState::PendingPlay { hold },
        };
    }

    fn pause(&mut self, now: Option<f64>) {
        let hold = match self.current_time(now) {
            Some(t) => t,
            None => 0.0,
        };
        self.state = AnimState::Paused { hold };
    }

    fn cancel(&mut self) {
        self.state = AnimState::Idle;
    }

    fn resolve_pending(&mut self, now: f64) {
        if let AnimState::PendingPlay { hold } = self.state {
            self.state = AnimState::Running { start: now - hold };
        }
    }

    /// Effect value at `timeline_time`; `None` while idle or after the last iteration.
    pub fn sample(&self, timeline_time: Option<f64>) -> Option<TrackValue> {
        let local = self.current_time(timeline_time)?.max(0.0);
        let duration = self.timing.duration_ms;
        if duration <= 0.0 || local >= duration * self.timing.iterations {
            return None;
        }
        let offset = (local % duration) / duration;
        match &self.effect.keyframes {
            TrackKeyframes::StrokeDasharray(keys) => {
                sample_keyframes(keys, offset).map(TrackValue::StrokeDasharray)
            }
            TrackKeyframes::StrokeWidth(keys) => {
                sample_keyframes(keys, offset).map(TrackValue::StrokeWidth)
            }
        }
    }
}

/// Timeline driving a set of looping effects, in milliseconds.
///
/// The timeline time is unresolved until the first [`DocumentTimeline::tick`]; animations
/// played before that start on the first tick.
#[derive(Clone, Debug, Default)]
pub struct DocumentTimeline {
    current_time: Option<f64>,
    animations: Vec<Animation>,
}

impl DocumentTimeline {
    /// Empty timeline with unresolved time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and play an animation; returns its index.
    pub fn animate(&mut self, effect: KeyframeEffect, timing: EffectTiming) -> usize {
        let mut animation = Animation {
            effect,
            timing,
            state: AnimState::Idle,
        };
        animation.play(self.current_time);
        self.animations.push(animation);
        self.animations.len() - 1
    }

    /// Advance the timeline to `now_ms` (never backwards).
    pub fn tick(&mut self, now_ms: f64) {
        let now = match self.current_time {
            Some(t) if t > now_ms => t,
            _ => now_ms,
        };
        self.current_time = Some(now);
        for a in &mut self.animations {
            a.resolve_pending(now);
        }
    }

    /// Timeline time in milliseconds.
    pub fn current_time(&self) -> Option<f64> {
        self.current_time
    }

    /// Every animation in creation order.
    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    /// Play every animation.
    pub fn play_all(&mut self) {
        let now = self.current_time;
        for a in &mut self.animations {
            a.play(now);
        }
    }

    /// Pause every animation.
    pub fn pause_all(&mut self) {
        let now = self.current_time;
        for a in &mut self.animations {
            a.pause(now);
        }
    }

    /// Cancel every animation.
    pub fn cancel_all(&mut self) {
        for a in &mut self.animations {
            a.cancel();
        }
    }

    /// True when there is at least one animation and every one of them is paused.
    pub fn all_paused(&self) -> bool {
        !self.animations.is_empty()
            && self
                .animations
                .iter()
                .all(|a| a.play_state() == PlayState::Paused)
    }

    /// Local time of the first animation, in seconds. Every track shares one period and start,
    /// so this is the loop position of the whole document.
    pub fn elapsed_secs(&self) -> Option<f64> {
        self.animations
            .first()
            .and_then(|a| a.current_time(self.current_time))
            .map(|ms| ms / 1000.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/timeline.rs"]
mod tests;
