//! strokeorder renders animated stroke-order diagrams for CJK characters.
//!
//! Stroke geometry comes from a [`StrokeLoader`] (CDN data sets or in-memory characters). A
//! [`RenderSession`] resolves a source and a [`Format`], loads the character and hands back an
//! [`AnimationHandle`]:
//!
//! - `canvas-2d`: raster frames redrawn on every tick ([`RasterSurface`])
//! - `svg-css`, `svg-smil`, `svg-wa`: SVG documents animated by the viewer's own timeline
//!
//! Every format derives what is visible from one timing model, [`StrokeTiming`], and exposes the
//! same pause / resume / dispose contract through the handle.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub(crate) mod animation;
pub(crate) mod character;
/// Frame sinks fed by the frame drivers.
pub mod encode;
pub(crate) mod foundation;
pub(crate) mod geometry;
pub(crate) mod render;
pub(crate) mod session;
pub(crate) mod source;

pub use crate::foundation::core::{Affine, BezPath, Fps, FrameIndex};
pub use crate::foundation::error::{CapabilityKind, StrokesError, StrokesResult, Violation};
pub use crate::foundation::ids::IdAllocator;

pub use crate::geometry::color::CssColor;
pub use crate::geometry::path::{ArcLengthPath, parse_path, path_length};
pub use crate::geometry::transform::transform_matrix;
pub use crate::geometry::view_box::ViewBox;

pub use crate::character::code_point::code_point_of;
pub use crate::character::model::{Character, Stroke};

pub use crate::animation::keyframes::{DashArray, Easing, Keyframe, Lerp, sample_keyframes};
pub use crate::animation::options::{AnimationOptions, PartialAnimationOptions};
pub use crate::animation::timing::{KeyTimes, Phase, StrokeTiming};

pub use crate::encode::png::PngSequenceSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};

pub use crate::render::format::{Animator, Format, animator_for};
pub use crate::render::frame_loop::{render_frames, run_frame_loop};
pub use crate::render::handle::{AnimationHandle, PlaybackState, Surface};
pub use crate::render::raster::{FrameRGBA, RasterAnimator, RasterSurface};
pub use crate::render::svg::{
    CssAnimator, CssSurface, SmilAnimator, SmilSurface, SvgElement, SvgNode, WaAnimator,
    WaSurface, rasterize_svg, snapshot_svg,
};
pub use crate::render::timeline::{
    Animation, DocumentTimeline, EffectTiming, FrameClock, KeyframeEffect, PlayState,
    TrackKeyframes, TrackValue,
};

pub use crate::session::registry::Registry;
pub use crate::session::render_session::{
    CharacterRenderer, RenderOutcome, RenderSession, render_all, render_character,
};

pub use crate::source::animcjk::{AnimCjkGroup, parse_animcjk};
pub use crate::source::config::{DEFAULT_CDN_BASE_URL, SourcesConfig};
pub use crate::source::http::{HttpSource, SourceKind};
pub use crate::source::ja::{SOURCE_JA, parse_kanjivg};
pub use crate::source::loader::StrokeLoader;
pub use crate::source::static_source::StaticSource;
pub use crate::source::zh::{SOURCE_ZH, parse_hanzi_writer};
