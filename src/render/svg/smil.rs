use crate::animation::keyframes::Keyframe;
use crate::animation::options::AnimationOptions;
use crate::animation::timing::StrokeTiming;
use crate::character::model::Character;
use crate::foundation::error::StrokesResult;
use crate::foundation::ids::IdAllocator;
use crate::render::format::{Animator, Format};
use crate::render::handle::Surface;
use crate::render::svg::base::{SvgPlayback, build_svg, stroke_tracks};
use crate::render::svg::doc::SvgElement;

const TOGGLE_SCRIPT: &str =
    "if(this.animationsPaused()){this.unpauseAnimations();}else{this.pauseAnimations();}";
const PAUSE_ON_LOAD: &str = "this.pauseAnimations();";

/// `svg-smil`: two `<animate>` children per stroke path.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmilAnimator;

fn animate_element<T: std::fmt::Display>(
    attribute: &'static str,
    calc_mode: &'static str,
    keys: &[Keyframe<T>],
    total_duration: f64,
) -> SvgElement {
    let key_times = keys
        .iter()
        .map(|k| k.offset.to_string())
        .collect::<Vec<_>>()
        .join(";");
    let values = keys
        .iter()
        .map(|k| k.value.to_string())
        .collect::<Vec<_>>()
        .join(";");
    SvgElement::new("animate")
        .with_attr("attributeName", attribute)
        .with_attr("repeatCount", "indefinite")
        .with_attr("dur", format!("{total_duration}s"))
        .with_attr("calcMode", calc_mode)
        .with_attr("keyTimes", key_times)
        .with_attr("values", values)
}

impl Animator for SmilAnimator {
    fn format(&self) -> Format {
        Format::SvgSmil
    }

    fn animate(
        &self,
        character: &Character,
        options: &AnimationOptions,
        ids: &IdAllocator,
    ) -> StrokesResult<Surface> {
        let uid = ids.next_id();
        let timing = StrokeTiming::from_options(options, character.strokes.len())?;
        let tracks = stroke_tracks(character, &timing, &uid)?;
        let total = timing.total_duration();

        let mut decorate = |i: usize, path: &mut SvgElement| {
            if let Some(t) = tracks.get(i) {
                path.push(animate_element("stroke-dasharray", "linear", &t.dash, total));
                path.push(animate_element("stroke-width", "discrete", &t.width, total));
            }
        };
        let mut svg = build_svg(character, options, &uid, &mut decorate, None);
        if options.interactive() {
            svg.set_attr("onclick", TOGGLE_SCRIPT);
        }
        tracing::debug!(uid = %uid, strokes = tracks.len(), "built svg-smil document");

        Ok(Surface::SvgSmil(SmilSurface {
            playback: SvgPlayback::new(svg, tracks, character, options, timing),
        }))
    }
}

/// Document animated by SMIL `<animate>` elements.
///
/// SMIL pauses the whole document clock at once; a paused surface exports with an `onload`
/// hook that pauses it again when the file is opened.
#[derive(Clone, Debug)]
pub struct SmilSurface {
    pub(crate) playback: SvgPlayback,
}

impl SmilSurface {
    /// The SVG document.
    pub fn document(&self) -> &SvgElement {
        &self.playback.document
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        if paused {
            self.playback.document.set_attr("onload", PAUSE_ON_LOAD);
            self.playback.timeline.pause_all();
        } else {
            self.playback.document.remove_attr("onload");
            self.playback.timeline.play_all();
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/render/svg_smil.rs"]
mod tests;
