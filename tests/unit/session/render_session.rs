use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::character::model::Stroke;
use crate::foundation::error::StrokesError;
use crate::geometry::view_box::ViewBox;
use crate::render::handle::PlaybackState;
use crate::source::static_source::StaticSource;

fn character(code_point: u32) -> Character {
    Character {
        source: String::new(),
        code_point,
        transform: None,
        view_box: ViewBox::parse("0 0 100 100").unwrap(),
        strokes: vec![Stroke::new("M10 50 L90 50", 8.0)],
    }
}

/// Loader that counts calls and always fails.
struct Failing {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl StrokeLoader for Failing {
    fn id(&self) -> &str {
        "broken"
    }

    async fn load(&self, _code_point: u32) -> StrokesResult<Character> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StrokesError::source("broken", "Unexpected HTTP response status code 404."))
    }
}

fn session(failing: Arc<Failing>) -> RenderSession {
    let local = StaticSource::new("local")
        .with_character(character(0x4E00))
        .with_character(character(0x4E8C));
    let registry = Registry::new()
        .with_source(Arc::new(local))
        .with_source(failing);
    RenderSession::with_ids(Arc::new(registry), IdAllocator::with_tag("s"))
}

fn failing() -> Arc<Failing> {
    Arc::new(Failing {
        calls: AtomicUsize::new(0),
    })
}

#[tokio::test]
async fn renders_a_loaded_character() {
    let session = session(failing());
    let renderer = session
        .renderer("local", "svg-css", AnimationOptions::default())
        .unwrap();
    let handle = renderer.render("一").await.unwrap();
    assert_eq!(handle.code_point(), 0x4E00);
    assert_eq!(handle.source(), "local");
    assert_eq!(handle.state(), PlaybackState::Running);
    assert!(handle.to_svg_string().unwrap().contains("strokePath-19968-local-0-sn1"));
}

#[tokio::test]
async fn unsupported_identifiers_fail_before_loading() {
    let broken = failing();
    let session = session(Arc::clone(&broken));
    let err = session
        .renderer("broken", "svg-xyz", AnimationOptions::default())
        .unwrap_err();
    assert!(matches!(err, StrokesError::Unsupported { .. }));

    let err = render_all(&session, "一", &["broken", "nope"], "svg-css", &AnimationOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("nope"));
    assert_eq!(broken.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn multi_character_text_is_rejected() {
    let session = session(failing());
    let renderer = session
        .renderer("local", "canvas-2d", AnimationOptions::default())
        .unwrap();
    let err = renderer.render("一二").await.unwrap_err();
    assert_eq!(err.violations()[0].field, "character");
}

#[tokio::test]
async fn failing_source_does_not_affect_siblings() {
    let broken = failing();
    let session = session(Arc::clone(&broken));
    let outcomes = render_all(
        &session,
        "一二",
        &["local", "broken"],
        "svg-wa",
        &AnimationOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(outcomes.len(), 4);
    assert_eq!(broken.calls.load(Ordering::SeqCst), 2);
    let pairs: Vec<_> = outcomes
        .iter()
        .map(|o| (o.text.as_str(), o.source.as_str(), o.result.is_ok()))
        .collect();
    assert_eq!(
        pairs,
        [
            ("一", "local", true),
            ("一", "broken", false),
            ("二", "local", true),
            ("二", "broken", false),
        ]
    );

    let mut outcomes = outcomes;
    let mut handle = outcomes.remove(0).result.unwrap();
    assert!(handle.click());
    assert!(handle.is_paused());
}

#[test]
fn render_character_validates_geometry() {
    let mut c = character(0x4E00);
    c.strokes.clear();
    let err = render_character(
        &c,
        Format::Canvas2d,
        &AnimationOptions::default(),
        &IdAllocator::with_tag("x"),
    )
    .unwrap_err();
    assert!(matches!(err, StrokesError::Geometry(_)));
}
