use super::*;

const BODY: &str = r#"{
  "strokes": ["M 100 100 L 200 100 L 200 200 Z", "M 300 300 L 400 300 L 400 400 Z"],
  "medians": [[[110, 150], [190, 150]], [[310, 350], [350, 350], [390, 350]]],
  "radStrokes": [0]
}"#;

#[test]
fn medians_become_stroke_paths_and_outlines_clips() {
    let c = parse_hanzi_writer("zh", 0x4E8C, BODY).unwrap();
    assert_eq!(c.source, "zh");
    assert_eq!(c.code_point, 0x4E8C);
    assert_eq!(c.transform.as_deref(), Some("scale(1, -1) translate(0, -900)"));
    assert_eq!(c.view_box, ViewBox::new(0.0, 0.0, 1024.0, 1024.0).unwrap());
    assert_eq!(c.strokes.len(), 2);
    assert_eq!(c.strokes[0].stroke_path, "M 110 150 L 190 150");
    assert_eq!(c.strokes[1].stroke_path, "M 310 350 L 350 350 L 390 350");
    assert_eq!(
        c.strokes[0].clip_path.as_deref(),
        Some("M 100 100 L 200 100 L 200 200 Z")
    );
    assert_eq!(c.strokes[1].stroke_width, 128.0);
    c.validate().unwrap();
}

#[test]
fn extra_outlines_without_medians_are_dropped() {
    let body = r#"{"strokes": ["M0 0 L1 1", "M2 2 L3 3"], "medians": [[[0, 0], [1, 1]]]}"#;
    assert_eq!(parse_hanzi_writer("zh", 1, body).unwrap().strokes.len(), 1);
}

#[test]
fn invalid_data_is_attributed_to_the_source() {
    let err = parse_hanzi_writer("zh", 1, r#"{"strokes": []}"#).unwrap_err();
    assert!(matches!(err, StrokesError::Source { ref source_id, .. } if source_id == "zh"));
    assert!(err.to_string().contains("data is invalid"));
}

#[test]
fn data_file_is_named_after_the_character() {
    assert_eq!(path_for(0x6C38).unwrap(), "npm/hanzi-writer-data/永.json");
    assert!(path_for(0xD800).is_err());
}
