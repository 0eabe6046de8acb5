use std::fmt;

use crate::animation::timing::StrokeTiming;

/// Linear interpolation between two keyframe values.
pub trait Lerp: Sized {
    /// Value at `t` in `[0, 1]` between `a` and `b`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// A `stroke-dasharray` of one dash and one gap.
///
/// `0 L` hides a path of length `L`, `L 0` shows all of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashArray {
    /// Visible length.
    pub drawn: f64,
    /// Hidden length.
    pub gap: f64,
}

impl DashArray {
    /// Nothing drawn.
    pub fn hidden(length: f64) -> Self {
        Self {
            drawn: 0.0,
            gap: length,
        }
    }

    /// Everything drawn.
    pub fn full(length: f64) -> Self {
        Self {
            drawn: length,
            gap: 0.0,
        }
    }

    /// Visible share of the path.
    pub fn fraction(&self) -> f64 {
        let total = self.drawn + self.gap;
        if total <= 0.0 {
            return 0.0;
        }
        self.drawn / total
    }
}

impl Lerp for DashArray {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            drawn: f64::lerp(&a.drawn, &b.drawn, t),
            gap: f64::lerp(&a.gap, &b.gap, t),
        }
    }
}

impl fmt::Display for DashArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.drawn, self.gap)
    }
}

/// Timing function applied from a keyframe toward the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Straight interpolation.
    Linear,
    /// Hold the current value until the next key (`steps(1, end)`).
    StepEnd,
}

impl Easing {
    /// CSS / Web Animations spelling.
    pub fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::StepEnd => "steps(1, end)",
        }
    }
}

/// One key of a looping track; `offset` is a fraction of the whole loop.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe<T> {
    /// Position in `[0, 1]`.
    pub offset: f64,
    /// Value at `offset`.
    pub value: T,
    /// Easing toward the next key.
    pub easing: Easing,
}

impl<T> Keyframe<T> {
    fn new(offset: f64, value: T, easing: Easing) -> Self {
        Self {
            offset,
            value,
            easing,
        }
    }
}

impl StrokeTiming {
    /// Dash track of `stroke`, whose path is `length` long.
    ///
    /// Later strokes get a hidden key at 0; the reveal runs linearly between the key times;
    /// the "fully drawn" key before the loop point is omitted when the reveal ends exactly there.
    pub fn dash_keyframes(&self, stroke: usize, length: f64) -> Vec<Keyframe<DashArray>> {
        let kt = self.key_times(stroke);
        let mut keys = Vec::with_capacity(4);
        if stroke > 0 {
            keys.push(Keyframe::new(0.0, DashArray::hidden(length), Easing::Linear));
        }
        keys.push(Keyframe::new(
            kt.start,
            DashArray::hidden(length),
            Easing::Linear,
        ));
        if kt.holds_before_loop() {
            keys.push(Keyframe::new(kt.end, DashArray::full(length), Easing::Linear));
        }
        keys.push(Keyframe::new(1.0, DashArray::full(length), Easing::Linear));
        keys
    }

    /// Width track of `stroke`: 0 until its slot, then `width` (a step, not a ramp).
    pub fn width_keyframes(&self, stroke: usize, width: f64) -> Vec<Keyframe<f64>> {
        let kt = self.key_times(stroke);
        let mut keys = Vec::with_capacity(4);
        if stroke > 0 {
            keys.push(Keyframe::new(0.0, 0.0, Easing::StepEnd));
        }
        keys.push(Keyframe::new(kt.start, width, Easing::Linear));
        if kt.holds_before_loop() {
            keys.push(Keyframe::new(kt.end, width, Easing::Linear));
        }
        keys.push(Keyframe::new(1.0, width, Easing::Linear));
        keys
    }
}

/// Evaluate a sorted keyframe list at loop offset `offset`.
///
/// Returns `None` only for an empty list.
pub fn sample_keyframes<T>(keys: &[Keyframe<T>], offset: f64) -> Option<T>
where
    T: Lerp + Clone,
{
    let first = keys.first()?;
    let idx = keys.partition_point(|k| k.offset <= offset);
    if idx == 0 {
        return Some(first.value.clone());
    }
    if idx >= keys.len() {
        return keys.last().map(|k| k.value.clone());
    }

    let a = &keys[idx - 1];
    let b = &keys[idx];
    let span = b.offset - a.offset;
    if span <= 0.0 {
        return Some(a.value.clone());
    }
    match a.easing {
        Easing::StepEnd => Some(a.value.clone()),
        Easing::Linear => {
            let t = ((offset - a.offset) / span).clamp(0.0, 1.0);
            Some(T::lerp(&a.value, &b.value, t))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
