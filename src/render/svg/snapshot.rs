use crate::animation::keyframes::sample_keyframes;
use crate::animation::options::AnimationOptions;
use crate::animation::timing::StrokeTiming;
use crate::character::model::Character;
use crate::foundation::error::{StrokesError, StrokesResult};
use crate::render::raster::FrameRGBA;
use crate::render::svg::base::{build_svg, stroke_tracks};
use crate::render::svg::doc::SvgElement;

/// Still SVG of the animation at `elapsed` seconds.
///
/// Each stroke carries the `stroke-dasharray` and `stroke-width` its keyframe tracks hold at
/// that instant, so the document is what a declarative renderer would show.
#[tracing::instrument(skip(character, options), fields(code_point = character.code_point))]
pub fn snapshot_svg(
    character: &Character,
    options: &AnimationOptions,
    elapsed: f64,
) -> StrokesResult<SvgElement> {
    let timing = StrokeTiming::from_options(options, character.strokes.len())?;
    let tracks = stroke_tracks(character, &timing, "still")?;
    let offset = timing.offset(elapsed);

    let mut decorate = |i: usize, path: &mut SvgElement| {
        let Some(t) = tracks.get(i) else {
            return;
        };
        if let Some(dash) = sample_keyframes(&t.dash, offset) {
            path.set_attr("stroke-dasharray", dash.to_string());
        }
        if let Some(width) = sample_keyframes(&t.width, offset) {
            path.set_attr("stroke-width", width.to_string());
        }
    };
    Ok(build_svg(character, options, "still", &mut decorate, None))
}

/// Rasterize an SVG document into a `width` x `height` premultiplied frame.
pub fn rasterize_svg(svg: &SvgElement, width: u32, height: u32) -> StrokesResult<FrameRGBA> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(&svg.to_xml_string(), &opts)
        .map_err(|e| StrokesError::render(format!("parse svg tree: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| StrokesError::render("failed to allocate svg pixmap"))?;
    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    Ok(FrameRGBA {
        width,
        height,
        data: pixmap.data().to_vec(),
        premultiplied: true,
    })
}
