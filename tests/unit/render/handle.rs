use super::*;
use crate::animation::options::PartialAnimationOptions;
use crate::character::model::Stroke;
use crate::foundation::ids::IdAllocator;
use crate::geometry::view_box::ViewBox;
use crate::render::format::animator_for;

fn character() -> Character {
    Character {
        source: "test".to_owned(),
        code_point: 0x4E09,
        transform: None,
        view_box: ViewBox::parse("0 0 100 100").unwrap(),
        strokes: vec![
            Stroke::new("M20 20 L80 20", 6.0),
            Stroke::new("M30 50 L70 50", 6.0),
            Stroke::new("M10 80 L90 80", 6.0),
        ],
    }
}

fn handle_with(format: Format, options: &AnimationOptions) -> AnimationHandle {
    let c = character();
    let ids = IdAllocator::with_tag("h");
    let surface = animator_for(format).animate(&c, options, &ids).unwrap();
    AnimationHandle::new(&c, format, options, surface).unwrap()
}

fn handle(format: Format) -> AnimationHandle {
    handle_with(format, &AnimationOptions::default())
}

#[test]
fn identity_fields() {
    let h = handle(Format::SvgSmil);
    assert_eq!(h.code_point(), 0x4E09);
    assert_eq!(h.source(), "test");
    assert_eq!(h.format(), Format::SvgSmil);
    assert!(h.interactive());
    assert_eq!(h.state(), PlaybackState::Running);
    assert!(h.svg().is_some());
    assert!(h.raster().is_none());
}

#[test]
fn pause_and_resume_on_every_format() {
    for format in Format::ALL {
        let mut h = handle(format);
        assert!(!h.is_paused(), "{format}");
        h.pause();
        assert!(h.is_paused(), "{format}");
        h.pause();
        assert!(h.is_paused(), "{format}");
        h.resume();
        assert!(!h.is_paused(), "{format}");
    }
}

#[test]
fn paused_time_is_not_consumed() {
    for format in Format::ALL {
        let mut h = handle(format);
        h.on_frame(5.0);
        h.on_frame(5.5);
        assert!((h.elapsed() - 0.5).abs() < 1e-9, "{format}");

        h.pause();
        h.on_frame(6.0);
        h.on_frame(9.0);
        assert!((h.elapsed() - 0.5).abs() < 1e-9, "{format}");

        h.resume();
        h.on_frame(9.25);
        let e = h.elapsed();
        assert!((0.5..=0.75 + 1e-9).contains(&e), "{format}: {e}");
        h.on_frame(9.5);
        assert!(h.elapsed() > e, "{format}");
    }
}

#[test]
fn phase_follows_elapsed_time() {
    let opts = AnimationOptions::from_partial(PartialAnimationOptions {
        pause_ratio: Some(0.2),
        total_stroke_duration: Some(1.0),
        ..Default::default()
    })
    .unwrap();
    for format in Format::ALL {
        let mut h = handle_with(format, &opts);
        h.on_frame(0.0);
        h.on_frame(2.5);
        let phase = h.phase();
        assert_eq!(phase.stroke_index, 2, "{format}");
        assert!((phase.progress - 0.625).abs() < 1e-9, "{format}");
    }
}

#[test]
fn dispose_is_terminal_and_idempotent() {
    for format in Format::ALL {
        let mut h = handle(format);
        h.pause();
        h.dispose();
        h.dispose();
        assert!(h.is_disposed());
        assert!(!h.is_paused());
        h.resume();
        h.pause();
        assert!(!h.is_paused());
        assert!(!h.click());
        h.on_frame(1.0);
        assert!(h.svg().is_none());
        assert!(h.current_frame().is_err());
    }
}

#[test]
fn click_toggles_only_when_interactive() {
    let mut h = handle(Format::SvgWa);
    assert!(h.click());
    assert!(h.is_paused());
    assert!(h.click());
    assert!(!h.is_paused());

    let opts = AnimationOptions::from_partial(PartialAnimationOptions {
        interactive: Some(false),
        ..Default::default()
    })
    .unwrap();
    let mut h = handle_with(Format::Canvas2d, &opts);
    assert!(!h.click());
    assert!(!h.is_paused());
}

#[test]
fn wa_pause_reaches_every_track() {
    let mut h = handle(Format::SvgWa);
    h.pause();
    let Surface::SvgWa(s) = h.surface() else {
        panic!("expected svg-wa surface");
    };
    assert!(s.all_tracks_paused());
    assert_eq!(s.track_states().len(), 6);
}

#[test]
fn visibility_resets_a_running_raster_clock_only() {
    let mut h = handle(Format::Canvas2d);
    h.on_frame(0.0);
    h.on_frame(1.0);
    h.on_visibility_change(false);
    assert!((h.elapsed() - 1.0).abs() < 1e-9);
    h.on_visibility_change(true);
    assert_eq!(h.elapsed(), 0.0);

    h.on_frame(2.0);
    h.on_frame(2.5);
    h.pause();
    h.on_visibility_change(true);
    assert!((h.elapsed() - 0.5).abs() < 1e-9);
}

#[test]
fn frames_have_the_view_box_size() {
    for format in Format::ALL {
        let mut h = handle(format);
        h.on_frame(0.0);
        h.on_frame(1.0);
        assert_eq!(h.frame_size(), (100, 100), "{format}");
        let f = h.current_frame().unwrap();
        assert_eq!((f.width, f.height), (100, 100), "{format}");
    }
}
