//! The object a render hands back: identity of what was rendered plus one lifecycle contract
//! over every back-end.
//!
//! The handle owns the playback state. Surfaces never report whether they are paused; they are
//! told, and mirror it into their own mechanism (a frozen frame clock, `animation-play-state`,
//! a paused SMIL clock, paused timeline tracks).

use crate::animation::options::AnimationOptions;
use crate::animation::timing::{Phase, StrokeTiming};
use crate::character::model::Character;
use crate::foundation::error::{StrokesError, StrokesResult};
use crate::render::format::Format;
use crate::render::raster::{FrameRGBA, RasterSurface};
use crate::render::svg::{CssSurface, SmilSurface, SvgElement, WaSurface};

/// Lifecycle state of an [`AnimationHandle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// Playing.
    Running,
    /// Paused; no animation time passes.
    Paused,
    /// Released; terminal.
    Disposed,
}

/// The animated surface produced by one back-end.
#[derive(Debug)]
pub enum Surface {
    /// `canvas-2d`.
    Raster(RasterSurface),
    /// `svg-css`.
    SvgCss(CssSurface),
    /// `svg-smil`.
    SvgSmil(SmilSurface),
    /// `svg-wa`.
    SvgWa(WaSurface),
}

impl Surface {
    fn set_paused(&mut self, paused: bool) {
        match self {
            // The frame clock reads the pause flag on every tick.
            Self::Raster(r) => {
                if !paused {
                    r.reanchor();
                }
            }
            Self::SvgCss(s) => s.set_paused(paused),
            Self::SvgSmil(s) => s.set_paused(paused),
            Self::SvgWa(s) => s.set_paused(paused),
        }
    }

    fn svg(&self) -> Option<&SvgElement> {
        match self {
            Self::Raster(_) => None,
            Self::SvgCss(s) => Some(s.document()),
            Self::SvgSmil(s) => Some(s.document()),
            Self::SvgWa(s) => Some(s.document()),
        }
    }
}

/// A running animation of one character from one source in one format.
#[derive(Debug)]
pub struct AnimationHandle {
    code_point: u32,
    source: String,
    format: Format,
    interactive: bool,
    state: PlaybackState,
    timing: StrokeTiming,
    surface: Surface,
    last_timestamp: Option<f64>,
}

impl AnimationHandle {
    pub(crate) fn new(
        character: &Character,
        format: Format,
        options: &AnimationOptions,
        surface: Surface,
    ) -> StrokesResult<Self> {
        Ok(Self {
            code_point: character.code_point,
            source: character.source.clone(),
            format,
            interactive: options.interactive(),
            state: PlaybackState::Running,
            timing: StrokeTiming::from_options(options, character.strokes.len())?,
            surface,
            last_timestamp: None,
        })
    }

    /// Code point of the animated character.
    pub fn code_point(&self) -> u32 {
        self.code_point
    }

    /// Source the stroke data came from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Output format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Whether clicks toggle playback.
    pub fn interactive(&self) -> bool {
        self.interactive
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Timing model of the animation.
    pub fn timing(&self) -> &StrokeTiming {
        &self.timing
    }

    /// Pause playback. No-op unless running.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Running {
            self.state = PlaybackState::Paused;
            self.surface.set_paused(true);
        }
    }

    /// Resume playback from where it was paused. No-op unless paused.
    pub fn resume(&mut self) {
        if self.state == PlaybackState::Paused {
            self.state = PlaybackState::Running;
            self.surface.set_paused(false);
        }
    }

    /// Whether playback is paused. Always `false` once disposed.
    pub fn is_paused(&self) -> bool {
        self.state == PlaybackState::Paused
    }

    /// Whether the handle has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.state == PlaybackState::Disposed
    }

    /// Release the surface. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.state == PlaybackState::Disposed {
            return;
        }
        match &mut self.surface {
            Surface::Raster(r) => r.dispose(),
            Surface::SvgCss(s) => s.playback.dispose(),
            Surface::SvgSmil(s) => s.playback.dispose(),
            Surface::SvgWa(s) => s.playback.dispose(),
        }
        self.state = PlaybackState::Disposed;
        tracing::debug!(
            code_point = self.code_point,
            source = %self.source,
            format = %self.format,
            "disposed animation"
        );
    }

    /// A click on the rendered element: toggles playback when interactive.
    ///
    /// Returns whether the click had an effect.
    pub fn click(&mut self) -> bool {
        if !self.interactive {
            return false;
        }
        match self.state {
            PlaybackState::Running => self.pause(),
            PlaybackState::Paused => self.resume(),
            PlaybackState::Disposed => return false,
        }
        true
    }

    /// Presentation tick at `timestamp_secs` (monotonic).
    ///
    /// Redraws the raster surface, or advances the SVG document timeline.
    pub fn on_frame(&mut self, timestamp_secs: f64) {
        let paused = match self.state {
            PlaybackState::Disposed => return,
            PlaybackState::Paused => true,
            PlaybackState::Running => false,
        };
        self.last_timestamp = Some(timestamp_secs);
        match &mut self.surface {
            Surface::Raster(r) => r.on_frame(timestamp_secs, paused),
            Surface::SvgCss(s) => s.playback.on_frame(timestamp_secs),
            Surface::SvgSmil(s) => s.playback.on_frame(timestamp_secs),
            Surface::SvgWa(s) => s.playback.on_frame(timestamp_secs),
        }
    }

    /// The host became visible or hidden.
    ///
    /// A raster animation that becomes visible while running restarts its loop instead of
    /// jumping over the time spent hidden. Engine timelines handle this themselves.
    pub fn on_visibility_change(&mut self, visible: bool) {
        if !visible || self.state != PlaybackState::Running {
            return;
        }
        if let Surface::Raster(r) = &mut self.surface {
            r.reset_clock();
        }
    }

    /// Timestamp of the last presentation tick.
    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }

    /// Pixel size of [`AnimationHandle::current_frame`].
    pub fn frame_size(&self) -> (u32, u32) {
        match &self.surface {
            Surface::Raster(r) => (r.width(), r.height()),
            Surface::SvgCss(s) => s.playback.frame_size(),
            Surface::SvgSmil(s) => s.playback.frame_size(),
            Surface::SvgWa(s) => s.playback.frame_size(),
        }
    }

    /// Seconds into the current loop.
    pub fn elapsed(&self) -> f64 {
        let local = match &self.surface {
            Surface::Raster(r) => return r.elapsed(),
            Surface::SvgCss(s) => s.playback.elapsed(),
            Surface::SvgSmil(s) => s.playback.elapsed(),
            Surface::SvgWa(s) => s.playback.elapsed(),
        };
        self.timing.wrap(local.unwrap_or(0.0))
    }

    /// Active stroke and its progress at the current position.
    pub fn phase(&self) -> Phase {
        self.timing.phase(self.elapsed())
    }

    /// Pixels of the animation at its current position.
    pub fn current_frame(&self) -> StrokesResult<FrameRGBA> {
        if self.is_disposed() {
            return Err(StrokesError::render("animation has been disposed"));
        }
        match &self.surface {
            Surface::Raster(r) => Ok(r.frame()),
            Surface::SvgCss(s) => s.playback.frame(self.format),
            Surface::SvgSmil(s) => s.playback.frame(self.format),
            Surface::SvgWa(s) => s.playback.frame(self.format),
        }
    }

    /// The SVG document, for SVG formats that are not disposed.
    pub fn svg(&self) -> Option<&SvgElement> {
        if self.is_disposed() {
            return None;
        }
        self.surface.svg()
    }

    /// Serialized SVG document, for SVG formats that are not disposed.
    pub fn to_svg_string(&self) -> Option<String> {
        self.svg().map(SvgElement::to_xml_string)
    }

    /// The raster surface, for `canvas-2d`.
    pub fn raster(&self) -> Option<&RasterSurface> {
        match &self.surface {
            Surface::Raster(r) => Some(r),
            _ => None,
        }
    }

    /// The underlying surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/handle.rs"]
mod tests;
