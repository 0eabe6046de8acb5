use std::fmt;

use crate::animation::options::AnimationOptions;
use crate::animation::timing::StrokeTiming;
use crate::character::model::Character;
use crate::foundation::core::{Affine, BezPath};
use crate::foundation::error::{StrokesError, StrokesResult};
use crate::foundation::ids::IdAllocator;
use crate::geometry::color::CssColor;
use crate::geometry::path::{ArcLengthPath, parse_path};
use crate::geometry::transform::transform_matrix;
use crate::render::format::{Animator, Format};
use crate::render::handle::Surface;
use crate::render::timeline::FrameClock;

/// A rendered frame as RGBA8 pixels.
///
/// Raster output is **premultiplied alpha**; the flag makes this explicit at API boundaries.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// `canvas-2d`: full redraw of every frame with `vello_cpu`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RasterAnimator;

impl Animator for RasterAnimator {
    fn format(&self) -> Format {
        Format::Canvas2d
    }

    fn animate(
        &self,
        character: &Character,
        options: &AnimationOptions,
        _ids: &IdAllocator,
    ) -> StrokesResult<Surface> {
        RasterSurface::new(character, options).map(Surface::Raster)
    }
}

struct RasterStroke {
    measured: ArcLengthPath,
    clip: Option<vello_cpu::kurbo::BezPath>,
    width: f64,
}

/// Frame-loop surface: owns the pixel buffer, the elapsed-time clock and the stroke geometry
/// (parsed and measured once).
pub struct RasterSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    strokes: Vec<RasterStroke>,
    stroke_transform: vello_cpu::kurbo::Affine,
    timing: StrokeTiming,
    clock: FrameClock,
    options: AnimationOptions,
    frames_drawn: u64,
}

impl fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("strokes", &self.strokes.len())
            .field("elapsed", &self.clock.elapsed())
            .field("frames_drawn", &self.frames_drawn)
            .finish_non_exhaustive()
    }
}

fn surface_extent(v: f64, what: &str) -> StrokesResult<u16> {
    let px = v.ceil();
    if !(1.0..=f64::from(u16::MAX)).contains(&px) {
        return Err(StrokesError::render(format!(
            "canvas {what} must be within 1..={}, got {px}",
            u16::MAX
        )));
    }
    Ok(px as u16)
}

impl RasterSurface {
    /// Prepare a surface sized to the character's view box.
    pub fn new(character: &Character, options: &AnimationOptions) -> StrokesResult<Self> {
        let timing = StrokeTiming::from_options(options, character.strokes.len())?;
        let vb = character.view_box;
        let width = surface_extent(vb.width, "width")?;
        let height = surface_extent(vb.height, "height")?;

        let char_transform = match &character.transform {
            Some(t) => transform_matrix(t)?,
            None => Affine::IDENTITY,
        };
        let stroke_transform = Affine::scale_non_uniform(
            f64::from(width) / vb.width,
            f64::from(height) / vb.height,
        ) * Affine::translate((-vb.min_x, -vb.min_y))
            * char_transform;

        let strokes = character
            .strokes
            .iter()
            .map(|s| {
                Ok(RasterStroke {
                    measured: ArcLengthPath::new(&parse_path(&s.stroke_path)?),
                    clip: s
                        .clip_path
                        .as_deref()
                        .map(|d| parse_path(d).map(|p| bezpath_to_cpu(&p)))
                        .transpose()?,
                    width: s.stroke_width,
                })
            })
            .collect::<StrokesResult<Vec<_>>>()?;

        tracing::debug!(width, height, strokes = strokes.len(), "built canvas-2d surface");
        let mut surface = Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            pixmap: vello_cpu::Pixmap::new(width, height),
            strokes,
            stroke_transform: affine_to_cpu(stroke_transform),
            timing,
            clock: FrameClock::new(timing.total_duration()),
            options: options.clone(),
            frames_drawn: 0,
        };
        surface.draw(0.0);
        Ok(surface)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Elapsed seconds within the loop.
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Number of frames drawn so far.
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Copy of the last drawn pixels.
    pub fn frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.width(),
            height: self.height(),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    pub(crate) fn on_frame(&mut self, timestamp_secs: f64, paused: bool) {
        let elapsed = self.clock.tick(timestamp_secs, paused);
        self.draw(elapsed);
    }

    pub(crate) fn reanchor(&mut self) {
        self.clock.reanchor();
    }

    pub(crate) fn reset_clock(&mut self) {
        self.clock.reset();
    }

    pub(crate) fn dispose(&mut self) {
        self.strokes.clear();
    }

    /// Draw the animation as it looks `elapsed` seconds into the loop, without touching the
    /// clock.
    pub fn draw(&mut self, elapsed: f64) {
        if self.strokes.is_empty() {
            return;
        }
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        self.ctx.reset();
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        if self.options.include_background() {
            self.ctx.set_paint(paint(self.options.background_color()));
            self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
        }
        if self.options.include_grid() {
            self.draw_grid(w, h);
        }

        let phase = self.timing.phase(elapsed);
        let preview = self.options.include_preview();
        let preview_color = self.options.preview_color().clone();
        let stroke_color = self.options.stroke_color().clone();

        self.ctx.set_transform(self.stroke_transform);
        for i in 0..self.strokes.len() {
            if preview {
                self.draw_stroke(i, 1.0, &preview_color);
            }
        }
        for i in 0..phase.stroke_index {
            self.draw_stroke(i, 1.0, &stroke_color);
        }
        self.draw_stroke(phase.stroke_index, phase.progress, &stroke_color);

        self.ctx.flush();
        self.pixmap.data_as_u8_slice_mut().fill(0);
        self.ctx.render_to_pixmap(&mut self.pixmap);
        self.frames_drawn += 1;
    }

    fn draw_grid(&mut self, w: f64, h: f64) {
        use vello_cpu::kurbo::{Line, Shape, Stroke};

        let columns = self.options.grid_columns();
        let rows = self.options.grid_rows();
        self.ctx.set_paint(paint(self.options.grid_color()));

        self.ctx.set_stroke(Stroke::new((w / 100.0).ceil()));
        let mut k = 1.0;
        while k < columns {
            let x = w * (k / columns);
            let line = Line::new((x, 0.0), (x, h));
            self.ctx.stroke_path(&line.to_path(0.1));
            k += 1.0;
        }
        self.ctx.set_stroke(Stroke::new((h / 100.0).ceil()));
        let mut k = 1.0;
        while k < rows {
            let y = h * (k / rows);
            let line = Line::new((0.0, y), (w, y));
            self.ctx.stroke_path(&line.to_path(0.1));
            k += 1.0;
        }
    }

    fn draw_stroke(&mut self, index: usize, progress: f64, color: &CssColor) {
        use vello_cpu::kurbo::{Cap, Circle, Join, Shape, Stroke};

        let Some(stroke) = self.strokes.get(index) else {
            return;
        };
        let visible = stroke.measured.leading(progress);
        // a zero-length round-capped dash still shows as a dot
        let dot = match stroke.measured.start() {
            Some(p) if visible.elements().is_empty() => Some(p),
            Some(_) => None,
            None => return,
        };
        self.ctx.set_paint(paint(color));
        if let Some(clip) = &stroke.clip {
            self.ctx.push_clip_layer(clip);
        }
        match dot {
            Some(p) => {
                let cap = Circle::new(point_to_cpu(p), stroke.width / 2.0);
                self.ctx.fill_path(&cap.to_path(0.1));
            }
            None => {
                self.ctx.set_stroke(
                    Stroke::new(stroke.width)
                        .with_caps(Cap::Round)
                        .with_join(Join::Round),
                );
                self.ctx.stroke_path(&bezpath_to_cpu(&visible));
            }
        }
        if stroke.clip.is_some() {
            self.ctx.pop_layer();
        }
    }
}

fn paint(color: &CssColor) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = color.rgba();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
