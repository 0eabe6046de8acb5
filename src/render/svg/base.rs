use crate::animation::keyframes::{DashArray, Keyframe};
use crate::animation::options::AnimationOptions;
use crate::animation::timing::StrokeTiming;
use crate::character::model::Character;
use crate::foundation::error::{StrokesError, StrokesResult};
use crate::geometry::path::path_length;
use crate::geometry::view_box::ViewBox;
use crate::render::format::Format;
use crate::render::raster::FrameRGBA;
use crate::render::svg::doc::{SVG_NS, SvgElement};
use crate::render::svg::snapshot::{rasterize_svg, snapshot_svg};
use crate::render::timeline::{DocumentTimeline, EffectTiming, KeyframeEffect, TrackKeyframes};

/// Id of the animated path of stroke `index`.
pub(crate) fn stroke_path_id(character: &Character, index: usize, uid: &str) -> String {
    format!(
        "strokePath-{}-{}-{index}-{uid}",
        character.code_point, character.source
    )
}

fn clip_path_id(index: usize, uid: &str, is_static: bool) -> String {
    if is_static {
        format!("clipPath-static-{index}-{uid}")
    } else {
        format!("clipPath-{index}-{uid}")
    }
}

/// Both keyframe tracks of one stroke, bound to its path id.
#[derive(Clone, Debug)]
pub(crate) struct StrokeTracks {
    pub(crate) id: String,
    pub(crate) dash: Vec<Keyframe<DashArray>>,
    pub(crate) width: Vec<Keyframe<f64>>,
}

pub(crate) fn stroke_tracks(
    character: &Character,
    timing: &StrokeTiming,
    uid: &str,
) -> StrokesResult<Vec<StrokeTracks>> {
    character
        .strokes
        .iter()
        .enumerate()
        .map(|(i, stroke)| {
            let length = path_length(&stroke.stroke_path)?;
            Ok(StrokeTracks {
                id: stroke_path_id(character, i, uid),
                dash: timing.dash_keyframes(i, length),
                width: timing.width_keyframes(i, stroke.stroke_width),
            })
        })
        .collect()
}

fn background(options: &AnimationOptions, vb: ViewBox) -> Option<SvgElement> {
    if !options.include_background() {
        return None;
    }
    let rect = SvgElement::new("rect")
        .with_attr("x", vb.min_x.to_string())
        .with_attr("y", vb.min_y.to_string())
        .with_attr("width", vb.width.to_string())
        .with_attr("height", vb.height.to_string())
        .with_attr("fill", options.background_color().as_str());
    Some(SvgElement::new("g").with_child(rect))
}

fn grid(options: &AnimationOptions, vb: ViewBox) -> Option<SvgElement> {
    if !options.include_grid() {
        return None;
    }
    let line = |x1: f64, y1: f64, x2: f64, y2: f64| {
        SvgElement::new("line")
            .with_attr("x1", x1.to_string())
            .with_attr("y1", y1.to_string())
            .with_attr("x2", x2.to_string())
            .with_attr("y2", y2.to_string())
            .with_attr("stroke", options.grid_color().as_str())
            .with_attr("stroke-width", "1%")
    };
    let mut group = SvgElement::new("g");
    let mut k = 1.0;
    while k < options.grid_columns() {
        let x = vb.min_x + vb.width * (k / options.grid_columns());
        group.push(line(x, vb.min_y, x, vb.min_y + vb.height));
        k += 1.0;
    }
    let mut k = 1.0;
    while k < options.grid_rows() {
        let y = vb.min_y + vb.height * (k / options.grid_rows());
        group.push(line(vb.min_x, y, vb.min_x + vb.width, y));
        k += 1.0;
    }
    Some(group)
}

/// Append one `<path>` per stroke (and its `<clipPath>`) to `group`.
///
/// Static strokes (the preview) carry their nominal width; animated ones get an id and are
/// handed to `decorate`.
fn push_strokes(
    group: &mut SvgElement,
    character: &Character,
    color: &str,
    uid: &str,
    is_static: bool,
    decorate: &mut dyn FnMut(usize, &mut SvgElement),
) {
    for (i, stroke) in character.strokes.iter().enumerate() {
        let mut path = SvgElement::new("path").with_attr("d", stroke.stroke_path.as_str());
        if !is_static {
            path.set_attr("id", stroke_path_id(character, i, uid));
        }
        if let Some(clip) = &stroke.clip_path {
            let id = clip_path_id(i, uid, is_static);
            path.set_attr("clip-path", format!("url(#{id})"));
            group.push(
                SvgElement::new("clipPath")
                    .with_attr("id", id)
                    .with_child(SvgElement::new("path").with_attr("d", clip.as_str())),
            );
        }
        path.set_attr("fill", "none");
        path.set_attr("stroke", color);
        path.set_attr("stroke-linecap", "round");
        path.set_attr("stroke-linejoin", "round");
        if is_static {
            path.set_attr("stroke-width", stroke.stroke_width.to_string());
        } else {
            decorate(i, &mut path);
        }
        group.push(path);
    }
}

/// Build the document shared by every SVG format.
///
/// Layout: optional background, optional grid, then a group carrying the character transform
/// with the optional preview, the stroke paths and finally `extra` (style sheets).
pub(crate) fn build_svg(
    character: &Character,
    options: &AnimationOptions,
    uid: &str,
    decorate: &mut dyn FnMut(usize, &mut SvgElement),
    extra: Option<SvgElement>,
) -> SvgElement {
    let vb = character.view_box;
    let mut svg = SvgElement::new("svg")
        .with_attr("xmlns", SVG_NS)
        .with_attr("viewBox", vb.to_string());

    if let Some(bg) = background(options, vb) {
        svg.push(bg);
    }
    if let Some(grid) = grid(options, vb) {
        svg.push(grid);
    }

    let mut group = SvgElement::new("g");
    if let Some(t) = &character.transform {
        group.set_attr("transform", t.as_str());
    }
    if options.include_preview() {
        let mut preview = SvgElement::new("g");
        push_strokes(
            &mut preview,
            character,
            options.preview_color().as_str(),
            uid,
            true,
            &mut |_, _| {},
        );
        group.push(preview);
    }
    push_strokes(
        &mut group,
        character,
        options.stroke_color().as_str(),
        uid,
        false,
        decorate,
    );
    if let Some(extra) = extra {
        group.push(extra);
    }
    svg.push(group);
    svg
}

/// State shared by the three SVG surfaces: the document, the ids of its animated paths and the
/// engine timeline playing their tracks.
#[derive(Clone, Debug)]
pub(crate) struct SvgPlayback {
    pub(crate) document: SvgElement,
    pub(crate) tracks: Vec<StrokeTracks>,
    pub(crate) timeline: DocumentTimeline,
    character: Character,
    options: AnimationOptions,
    timing: StrokeTiming,
}

impl SvgPlayback {
    pub(crate) fn new(
        document: SvgElement,
        tracks: Vec<StrokeTracks>,
        character: &Character,
        options: &AnimationOptions,
        timing: StrokeTiming,
    ) -> Self {
        let mut timeline = DocumentTimeline::new();
        let effect_timing = EffectTiming::looping(timing.total_duration() * 1000.0);
        for t in &tracks {
            timeline.animate(
                KeyframeEffect {
                    target: t.id.clone(),
                    keyframes: TrackKeyframes::StrokeDasharray(t.dash.clone()),
                },
                effect_timing,
            );
            timeline.animate(
                KeyframeEffect {
                    target: t.id.clone(),
                    keyframes: TrackKeyframes::StrokeWidth(t.width.clone()),
                },
                effect_timing,
            );
        }
        Self {
            document,
            tracks,
            timeline,
            character: character.clone(),
            options: options.clone(),
            timing,
        }
    }

    pub(crate) fn timing(&self) -> &StrokeTiming {
        &self.timing
    }

    pub(crate) fn on_frame(&mut self, timestamp_secs: f64) {
        self.timeline.tick(timestamp_secs * 1000.0);
    }

    pub(crate) fn elapsed(&self) -> Option<f64> {
        self.timeline.elapsed_secs()
    }

    /// Static rendering of the document at the timeline's current position.
    pub(crate) fn frame(&self, format: Format) -> StrokesResult<FrameRGBA> {
        let elapsed = self.elapsed().ok_or_else(|| {
            StrokesError::render(format!("{format} timeline has no current time"))
        })?;
        let still = snapshot_svg(&self.character, &self.options, elapsed)?;
        let (width, height) = self.frame_size();
        rasterize_svg(&still, width, height)
    }

    /// Pixel size of rasterized frames: the view box rounded up.
    pub(crate) fn frame_size(&self) -> (u32, u32) {
        let vb = self.character.view_box;
        (
            vb.width.ceil().max(1.0) as u32,
            vb.height.ceil().max(1.0) as u32,
        )
    }

    pub(crate) fn dispose(&mut self) {
        self.timeline.cancel_all();
        self.document.clear();
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/render/svg_base.rs"]
mod tests;
