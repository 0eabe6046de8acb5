use super::*;

fn with(f: impl FnOnce(&mut PartialAnimationOptions)) -> StrokesResult<AnimationOptions> {
    let mut partial = PartialAnimationOptions::default();
    f(&mut partial);
    AnimationOptions::from_partial(partial)
}

#[test]
fn empty_partial_yields_defaults() {
    let options = AnimationOptions::from_partial(PartialAnimationOptions::default()).unwrap();
    assert_eq!(options, AnimationOptions::default());
    assert_eq!(options.grid_color().as_str(), "#d3d3d3");
    assert_eq!(options.pause_ratio(), 0.2);
    assert_eq!(options.total_stroke_duration(), 1.0);
    assert!(options.interactive());
    assert!(!options.include_grid());
}

#[test]
fn full_options_are_a_fixed_point() {
    let once = with(|p| {
        p.stroke_color = Some("rgb(0, 0, 0)".to_owned());
        p.grid_rows = Some(3.0);
        p.include_preview = Some(true);
    })
    .unwrap();
    let twice = AnimationOptions::from_partial(once.to_partial()).unwrap();
    assert_eq!(once, twice);
    assert_eq!(twice.stroke_color().as_str(), "rgb(0, 0, 0)");
}

#[test]
fn pause_ratio_must_stay_below_one() {
    let err = with(|p| p.pause_ratio = Some(1.0)).unwrap_err();
    assert_eq!(err.violations().len(), 1);
    assert_eq!(err.violations()[0].field, "pause_ratio");
    assert!(with(|p| p.pause_ratio = Some(0.999)).is_ok());
    assert!(with(|p| p.pause_ratio = Some(0.0)).is_ok());
    assert!(with(|p| p.pause_ratio = Some(-0.1)).is_err());
}

#[test]
fn single_bad_field_is_named_in_the_error() {
    let cases: Vec<(&str, Box<dyn Fn(&mut PartialAnimationOptions)>)> = vec![
        ("grid_color", Box::new(|p| p.grid_color = Some("inherit".into()))),
        ("grid_rows", Box::new(|p| p.grid_rows = Some(0.5))),
        ("grid_columns", Box::new(|p| p.grid_columns = Some(f64::NAN))),
        ("background_color", Box::new(|p| p.background_color = Some("".into()))),
        ("preview_color", Box::new(|p| p.preview_color = Some("unset".into()))),
        ("stroke_color", Box::new(|p| p.stroke_color = Some("not-a-color".into()))),
        ("total_stroke_duration", Box::new(|p| p.total_stroke_duration = Some(0.0))),
        (
            "total_stroke_duration",
            Box::new(|p| p.total_stroke_duration = Some(f64::INFINITY)),
        ),
    ];
    for (field, apply) in cases {
        let err = with(|p| apply(p)).unwrap_err();
        assert!(err.to_string().contains(field), "{err}");
        assert_eq!(err.violations().len(), 1, "{field}: {err}");
    }
}

#[test]
fn all_violations_are_collected() {
    let err = with(|p| {
        p.grid_color = Some("currentcolor".into());
        p.pause_ratio = Some(2.0);
        p.total_stroke_duration = Some(-1.0);
    })
    .unwrap_err();
    let fields: Vec<_> = err.violations().iter().map(|v| v.field).collect();
    assert_eq!(fields, ["grid_color", "pause_ratio", "total_stroke_duration"]);
}

#[test]
fn json_ignores_unknown_and_null_fields() {
    let options: AnimationOptions = serde_json::from_value(serde_json::json!({
        "stroke_color": null,
        "dummy": true,
        "pause_ratio": 0.5
    }))
    .unwrap();
    assert_eq!(options.stroke_color().as_str(), "#000000");
    assert_eq!(options.pause_ratio(), 0.5);

    let bad = serde_json::from_value::<AnimationOptions>(serde_json::json!({ "pause_ratio": 1 }));
    assert!(bad.unwrap_err().to_string().contains("pause_ratio"));
}

#[test]
fn json_roundtrip_is_stable() {
    let options = AnimationOptions::default();
    let text = serde_json::to_string(&options).unwrap();
    let back: AnimationOptions = serde_json::from_str(&text).unwrap();
    assert_eq!(back, options);
}
