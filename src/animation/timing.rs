//! Stroke scheduling: which stroke is being written at a given elapsed time, and how much of it.
//!
//! Every back-end derives its visible state from [`StrokeTiming`]. The raster back-end calls it
//! once per frame; the declarative back-ends bake it into keyframes (see
//! [`crate::StrokeTiming::dash_keyframes`]) and the two views agree at every elapsed time.

use crate::animation::options::AnimationOptions;
use crate::foundation::error::{StrokesError, StrokesResult, Violation};

/// Timing parameters of one animated character.
///
/// Each stroke owns a slot of `stroke_duration` seconds. It is drawn linearly over the first
/// `1 - pause_ratio` of the slot and then held fully drawn. The whole sequence lasts
/// `stroke_duration * number_of_strokes` and loops forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeTiming {
    number_of_strokes: usize,
    pause_ratio: f64,
    stroke_duration: f64,
}

/// Active stroke and its drawn fraction at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phase {
    /// Index of the stroke being drawn.
    pub stroke_index: usize,
    /// Drawn fraction of that stroke, in `[0, 1]`.
    pub progress: f64,
}

/// Where a stroke's reveal starts and ends, as fractions of the whole loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyTimes {
    /// Offset at which the stroke starts drawing.
    pub start: f64,
    /// Offset at which the stroke is fully drawn.
    pub end: f64,
}

impl KeyTimes {
    /// Whether a separate "fully drawn" key is needed before the loop point.
    pub fn holds_before_loop(self) -> bool {
        self.end < 1.0
    }
}

impl StrokeTiming {
    /// Build a timing model, validating every parameter.
    pub fn new(
        number_of_strokes: usize,
        pause_ratio: f64,
        total_stroke_duration: f64,
    ) -> StrokesResult<Self> {
        let mut violations = Vec::new();
        if number_of_strokes == 0 {
            violations.push(Violation::new("strokes", "must not be empty"));
        }
        if !(0.0..1.0).contains(&pause_ratio) {
            violations.push(Violation::new("pause_ratio", "must be in [0, 1)"));
        }
        if !total_stroke_duration.is_finite() || total_stroke_duration <= 0.0 {
            violations.push(Violation::new(
                "total_stroke_duration",
                "must be finite and > 0",
            ));
        }
        if !violations.is_empty() {
            return Err(StrokesError::Validation(violations));
        }
        Ok(Self {
            number_of_strokes,
            pause_ratio,
            stroke_duration: total_stroke_duration,
        })
    }

    /// Timing of `number_of_strokes` strokes animated with `options`.
    pub fn from_options(
        options: &AnimationOptions,
        number_of_strokes: usize,
    ) -> StrokesResult<Self> {
        Self::new(
            number_of_strokes,
            options.pause_ratio(),
            options.total_stroke_duration(),
        )
    }

    /// Number of strokes (N).
    pub fn number_of_strokes(&self) -> usize {
        self.number_of_strokes
    }

    /// Hold share of each slot (p).
    pub fn pause_ratio(&self) -> f64 {
        self.pause_ratio
    }

    /// Seconds per stroke slot (T).
    pub fn stroke_duration(&self) -> f64 {
        self.stroke_duration
    }

    /// Length of one loop in seconds (`T * N`).
    pub fn total_duration(&self) -> f64 {
        self.stroke_duration * self.number_of_strokes as f64
    }

    /// Map any elapsed time into `[0, total_duration)`.
    pub fn wrap(&self, elapsed: f64) -> f64 {
        if !elapsed.is_finite() {
            return 0.0;
        }
        let total = self.total_duration();
        let e = elapsed.rem_euclid(total);
        // rem_euclid can round up to `total` for tiny negative inputs
        if e >= total { 0.0 } else { e }
    }

    /// Index of the stroke being drawn at `elapsed`.
    pub fn stroke_index(&self, elapsed: f64) -> usize {
        let e = self.wrap(elapsed);
        let index = (e / self.stroke_duration).floor() as usize;
        index.min(self.number_of_strokes - 1)
    }

    /// Seconds spent in the active stroke's slot.
    pub fn within_stroke(&self, elapsed: f64) -> f64 {
        let e = self.wrap(elapsed);
        let start = self.stroke_index(e) as f64 * self.stroke_duration;
        (e - start).clamp(0.0, self.stroke_duration)
    }

    /// Drawn fraction of the active stroke.
    pub fn progress(&self, elapsed: f64) -> f64 {
        let within = self.within_stroke(elapsed);
        ((within / self.stroke_duration) / (1.0 - self.pause_ratio)).clamp(0.0, 1.0)
    }

    /// Active stroke and its progress.
    pub fn phase(&self, elapsed: f64) -> Phase {
        Phase {
            stroke_index: self.stroke_index(elapsed),
            progress: self.progress(elapsed),
        }
    }

    /// Drawn fraction of `stroke`: 1 once written, 0 before its slot.
    pub fn stroke_progress(&self, stroke: usize, elapsed: f64) -> f64 {
        let phase = self.phase(elapsed);
        match stroke.cmp(&phase.stroke_index) {
            std::cmp::Ordering::Less => 1.0,
            std::cmp::Ordering::Equal => phase.progress,
            std::cmp::Ordering::Greater => 0.0,
        }
    }

    /// Rendered width of `stroke`: 0 until its slot begins, then `nominal` for the rest of the
    /// loop.
    pub fn stroke_width_at(&self, stroke: usize, nominal: f64, elapsed: f64) -> f64 {
        if stroke <= self.stroke_index(elapsed) {
            nominal
        } else {
            0.0
        }
    }

    /// Loop offsets bounding the reveal of `stroke`.
    pub fn key_times(&self, stroke: usize) -> KeyTimes {
        let n = self.number_of_strokes as f64;
        let s = stroke as f64;
        KeyTimes {
            start: s / n,
            end: (s + (1.0 - self.pause_ratio)) / n,
        }
    }

    /// Loop offset (`[0, 1)`) corresponding to `elapsed`.
    pub fn offset(&self, elapsed: f64) -> f64 {
        self.wrap(elapsed) / self.total_duration()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
