use super::*;

fn offsets<T>(keys: &[Keyframe<T>]) -> Vec<f64> {
    keys.iter().map(|k| k.offset).collect()
}

#[test]
fn first_stroke_has_no_leading_key() {
    let t = StrokeTiming::new(2, 0.2, 1.0).unwrap();
    let dash = t.dash_keyframes(0, 100.0);
    assert_eq!(offsets(&dash), [0.0, 0.4, 1.0]);
    assert_eq!(dash[0].value, DashArray::hidden(100.0));
    assert_eq!(dash[1].value, DashArray::full(100.0));
}

#[test]
fn later_strokes_hold_hidden_then_step_width() {
    let t = StrokeTiming::new(2, 0.2, 1.0).unwrap();
    let dash = t.dash_keyframes(1, 50.0);
    assert_eq!(offsets(&dash), [0.0, 0.5, 0.9, 1.0]);

    let width = t.width_keyframes(1, 6.0);
    assert_eq!(offsets(&width), [0.0, 0.5, 0.9, 1.0]);
    assert_eq!(width[0].easing, Easing::StepEnd);
    assert_eq!(width[0].value, 0.0);
    assert!(width[1..].iter().all(|k| k.value == 6.0));
}

#[test]
fn no_hold_key_when_reveal_ends_at_loop_point() {
    let t = StrokeTiming::new(3, 0.0, 1.0).unwrap();
    assert_eq!(t.dash_keyframes(2, 10.0).len(), 3);
    assert_eq!(t.width_keyframes(2, 10.0).len(), 3);
    assert_eq!(t.dash_keyframes(1, 10.0).len(), 4);
}

#[test]
fn sampled_tracks_match_the_timing_model() {
    let t = StrokeTiming::new(4, 0.3, 0.5).unwrap();
    let length = 80.0;
    for stroke in 0..4 {
        let dash = t.dash_keyframes(stroke, length);
        let width = t.width_keyframes(stroke, 5.0);
        for i in 0..400 {
            let e = t.total_duration() * (i as f64 + 0.5) / 400.0;
            let offset = t.offset(e);
            let sampled = sample_keyframes(&dash, offset).unwrap();
            assert!(
                (sampled.fraction() - t.stroke_progress(stroke, e)).abs() < 1e-9,
                "stroke {stroke} at {e}"
            );
            let w = sample_keyframes(&width, offset).unwrap();
            assert_eq!(w, t.stroke_width_at(stroke, 5.0, e), "stroke {stroke} at {e}");
        }
    }
}

#[test]
fn sampling_edges() {
    let keys: Vec<Keyframe<f64>> = Vec::new();
    assert_eq!(sample_keyframes(&keys, 0.5), None);

    let t = StrokeTiming::new(1, 0.5, 1.0).unwrap();
    let dash = t.dash_keyframes(0, 10.0);
    assert_eq!(sample_keyframes(&dash, 0.25).unwrap().drawn, 5.0);
    assert_eq!(sample_keyframes(&dash, 1.0).unwrap(), DashArray::full(10.0));
    assert_eq!(DashArray::full(10.0).to_string(), "10 0");
}
