use crate::animation::options::AnimationOptions;
use crate::animation::timing::StrokeTiming;
use crate::character::model::Character;
use crate::foundation::error::StrokesResult;
use crate::foundation::ids::IdAllocator;
use crate::render::format::{Animator, Format};
use crate::render::handle::Surface;
use crate::render::svg::base::{StrokeTracks, SvgPlayback, build_svg, stroke_tracks};
use crate::render::svg::doc::SvgElement;
use crate::render::timeline::{DocumentTimeline, PlayState};

const TOGGLE_SCRIPT: &str = "this.getAnimations({subtree:true}).forEach(function(a){\
if(a.playState==='paused'){a.play();}else{a.pause();}});";

/// `svg-wa`: explicit keyframe effects submitted to the document timeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct WaAnimator;

fn effects_json(tracks: &[StrokeTracks]) -> serde_json::Value {
    let tracks: Vec<_> = tracks
        .iter()
        .map(|t| {
            let dash: Vec<_> = t
                .dash
                .iter()
                .map(|k| {
                    serde_json::json!({
                        "offset": k.offset,
                        "strokeDasharray": k.value.to_string(),
                        "easing": k.easing.css(),
                    })
                })
                .collect();
            let width: Vec<_> = t
                .width
                .iter()
                .map(|k| {
                    serde_json::json!({
                        "offset": k.offset,
                        "strokeWidth": k.value.to_string(),
                        "easing": k.easing.css(),
                    })
                })
                .collect();
            serde_json::json!({ "id": t.id, "dash": dash, "width": width })
        })
        .collect();
    serde_json::Value::Array(tracks)
}

/// Script replaying the effects with `Element.animate`; a paused timeline is re-paused.
fn replay_script(effects: &serde_json::Value, duration_ms: f64, paused: bool) -> String {
    format!(
        "(function(){{var tracks={effects};var timing={{duration:{duration_ms},iterations:Infinity}};\
var all=[];tracks.forEach(function(t){{var e=document.getElementById(t.id);if(!e){{return;}}\
all.push(e.animate(t.dash,timing));all.push(e.animate(t.width,timing));}});\
if({paused}){{all.forEach(function(a){{a.pause();}});}}}})();"
    )
}

impl Animator for WaAnimator {
    fn format(&self) -> Format {
        Format::SvgWa
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

        let mut svg = build_svg(character, options, &uid, &mut |_, _| {}, None);
        if options.interactive() {
            svg.set_attr("onclick", TOGGLE_SCRIPT);
        }
        let effects = effects_json(&tracks);
        tracing::debug!(uid = %uid, strokes = tracks.len(), "built svg-wa document");

        let mut surface = WaSurface {
            playback: SvgPlayback::new(svg, tracks, character, options, timing),
            effects,
        };
        surface.write_script();
        Ok(Surface::SvgWa(surface))
    }
}

/// Document animated through the Web Animations API, two tracks per stroke.
///
/// The surface counts as paused only when every track is paused.
#[derive(Clone, Debug)]
pub struct WaSurface {
    pub(crate) playback: SvgPlayback,
    effects: serde_json::Value,
}

impl WaSurface {
    /// The SVG document, including the replay script.
    pub fn document(&self) -> &SvgElement {
        &self.playback.document
    }

    /// The timeline playing the tracks.
    pub fn timeline(&self) -> &DocumentTimeline {
        &self.playback.timeline
    }

    /// Whether every track is paused.
    pub fn all_tracks_paused(&self) -> bool {
        self.playback.timeline.all_paused()
    }

    /// Play state of every track, in creation order (dash then width, per stroke).
    pub fn track_states(&self) -> Vec<PlayState> {
        self.playback
            .timeline
            .animations()
            .iter()
            .map(|a| a.play_state())
            .collect()
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        if paused {
            self.playback.timeline.pause_all();
        } else {
            self.playback.timeline.play_all();
        }
        self.write_script();
    }

    fn write_script(&mut self) {
        let duration_ms = self.playback.timing().total_duration() * 1000.0;
        let script = replay_script(&self.effects, duration_ms, self.all_tracks_paused());
        let doc = &mut self.playback.document;
        if doc.attr("viewBox").is_none() {
            return;
        }
        let mut element = SvgElement::new("script");
        element.push_text(script);
        doc.replace_children_named(element);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/render/svg_wa.rs"]
mod tests;
