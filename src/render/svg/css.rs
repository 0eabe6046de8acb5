use crate::animation::options::AnimationOptions;
use crate::animation::timing::StrokeTiming;
use crate::character::model::Character;
use crate::foundation::error::StrokesResult;
use crate::foundation::ids::IdAllocator;
use crate::render::format::{Animator, Format};
use crate::render::handle::Surface;
use crate::render::svg::base::{StrokeTracks, SvgPlayback, build_svg, stroke_tracks};
use crate::render::svg::doc::SvgElement;

const TOGGLE_SCRIPT: &str = "var s=this.querySelectorAll('path[id^=\"strokePath-\"]');\
var p=s.length>0&&s[0].style.animationPlayState!=='paused';\
s.forEach(function(e){e.style.animationPlayState=p?'paused':'running';});";

/// `svg-css`: one `@keyframes` pair per stroke in an embedded style sheet.
#[derive(Clone, Copy, Debug, Default)]
pub struct CssAnimator;

fn percent(offset: f64) -> String {
    format!("{}%", offset * 100.0)
}

fn style_sheet(tracks: &[StrokeTracks], total_duration: f64) -> String {
    let mut css = String::new();
    for t in tracks {
        let id = &t.id;
        css.push_str(&format!("@keyframes dash-{id} {{ "));
        for k in &t.dash {
            css.push_str(&format!(
                "{} {{ stroke-dasharray: {}; animation-timing-function: {}; }} ",
                percent(k.offset),
                k.value,
                k.easing.css()
            ));
        }
        css.push_str("}\n");

        css.push_str(&format!("@keyframes width-{id} {{ "));
        for k in &t.width {
            css.push_str(&format!(
                "{} {{ stroke-width: {}; animation-timing-function: {}; }} ",
                percent(k.offset),
                k.value,
                k.easing.css()
            ));
        }
        css.push_str("}\n");

        css.push_str(&format!(
            "#{id} {{ animation: dash-{id} {total_duration}s infinite, width-{id} {total_duration}s infinite; }}\n"
        ));
    }
    css
}

impl Animator for CssAnimator {
    fn format(&self) -> Format {
        Format::SvgCss
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

        let mut style = SvgElement::new("style");
        style.push_text(style_sheet(&tracks, timing.total_duration()));
        let mut svg = build_svg(character, options, &uid, &mut |_, _| {}, Some(style));
        if options.interactive() {
            svg.set_attr("onclick", TOGGLE_SCRIPT);
        }
        tracing::debug!(uid = %uid, strokes = tracks.len(), "built svg-css document");

        Ok(Surface::SvgCss(CssSurface {
            playback: SvgPlayback::new(svg, tracks, character, options, timing),
        }))
    }
}

/// Document animated by its embedded style sheet.
///
/// Pausing mirrors `animation-play-state` into every stroke path's inline style.
#[derive(Clone, Debug)]
pub struct CssSurface {
    pub(crate) playback: SvgPlayback,
}

impl CssSurface {
    /// The SVG document.
    pub fn document(&self) -> &SvgElement {
        &self.playback.document
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        let state = if paused { "paused" } else { "running" };
        for t in &self.playback.tracks {
            if let Some(path) = self.playback.document.find_by_id_mut(&t.id) {
                path.set_attr("style", format!("animation-play-state: {state}"));
            }
        }
        if paused {
            self.playback.timeline.pause_all();
        } else {
            self.playback.timeline.play_all();
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/render/svg_css.rs"]
mod tests;
