use super::*;
use crate::animation::timing::StrokeTiming;

fn dash_effect(t: &StrokeTiming, stroke: usize) -> KeyframeEffect {
    KeyframeEffect {
        target: format!("s{stroke}"),
        keyframes: TrackKeyframes::StrokeDasharray(t.dash_keyframes(stroke, 100.0)),
    }
}

#[test]
fn frame_clock_accumulates_and_wraps() {
    let mut clock = FrameClock::new(3.0);
    assert_eq!(clock.tick(10.0, false), 0.0);
    assert_eq!(clock.tick(11.5, false), 1.5);
    assert_eq!(clock.tick(13.0, false), 3.0);
    assert_eq!(clock.tick(13.5, false), 0.0);
}

#[test]
fn frame_clock_consumes_no_time_while_paused() {
    let mut clock = FrameClock::new(10.0);
    clock.tick(0.0, false);
    clock.tick(1.0, false);
    assert_eq!(clock.tick(5.0, true), 1.0);
    assert_eq!(clock.tick(6.0, true), 1.0);
    assert_eq!(clock.tick(6.5, false), 1.5);

    clock.reanchor();
    assert_eq!(clock.tick(9.0, false), 1.5);
    clock.reset();
    assert_eq!(clock.tick(9.5, false), 0.0);
}

#[test]
fn pending_animations_start_on_first_tick() {
    let t = StrokeTiming::new(1, 0.0, 1.0).unwrap();
    let mut tl = DocumentTimeline::new();
    let i = tl.animate(dash_effect(&t, 0), EffectTiming::looping(1000.0));
    assert_eq!(tl.animations()[i].play_state(), PlayState::Running);
    assert_eq!(tl.elapsed_secs(), Some(0.0));

    tl.tick(5000.0);
    tl.tick(5250.0);
    assert_eq!(tl.elapsed_secs(), Some(0.25));
    let value = tl.animations()[i].sample(tl.current_time()).unwrap();
    assert_eq!(
        value,
        TrackValue::StrokeDasharray(DashArray {
            drawn: 25.0,
            gap: 75.0
        })
    );
}

#[test]
fn pause_holds_and_play_resumes_without_a_jump() {
    let t = StrokeTiming::new(2, 0.2, 1.0).unwrap();
    let mut tl = DocumentTimeline::new();
    tl.animate(dash_effect(&t, 0), EffectTiming::looping(2000.0));
    tl.animate(dash_effect(&t, 1), EffectTiming::looping(2000.0));
    tl.tick(0.0);
    tl.tick(300.0);
    tl.pause_all();
    assert!(tl.all_paused());
    tl.tick(10_000.0);
    assert_eq!(tl.elapsed_secs(), Some(0.3));
    tl.play_all();
    assert!(!tl.all_paused());
    tl.tick(10_100.0);
    assert!((tl.elapsed_secs().unwrap() - 0.4).abs() < 1e-9);
}

#[test]
fn one_running_track_means_not_all_paused() {
    let t = StrokeTiming::new(2, 0.2, 1.0).unwrap();
    let mut tl = DocumentTimeline::new();
    tl.animate(dash_effect(&t, 0), EffectTiming::looping(2000.0));
    tl.tick(0.0);
    tl.pause_all();
    assert!(tl.all_paused());
    // added after the pause, so it starts playing
    tl.animate(dash_effect(&t, 1), EffectTiming::looping(2000.0));
    assert!(!tl.all_paused());
    tl.cancel_all();
    assert!(tl.animations().iter().all(|a| a.play_state() == PlayState::Idle));
    assert_eq!(tl.elapsed_secs(), None);
}

#[test]
fn timeline_never_runs_backwards() {
    let mut tl = DocumentTimeline::new();
    tl.tick(100.0);
    tl.tick(50.0);
    assert_eq!(tl.current_time(), Some(100.0));
}
