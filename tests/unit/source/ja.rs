use super::*;

const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.0//EN" "http://www.w3.org/TR/2001/REC-SVG-20010904/DTD/svg10.dtd" [
<!ATTLIST g
xmlns:kvg CDATA #FIXED "http://kanjivg.tagaini.net"
kvg:element CDATA #IMPLIED >
]>
<svg xmlns="http://www.w3.org/2000/svg" width="109" height="109" viewBox="0 0 109 109">
<g id="kvg:StrokePaths_04e8c" style="fill:none;stroke:#000000;stroke-width:3;stroke-linecap:round;stroke-linejoin:round;">
<g id="kvg:04e8c" kvg:element="二">
  <path id="kvg:04e8c-s2" d="M14.5,82.5c4,1,8,1,12,0.5L92,77"/>
  <path id="kvg:04e8c-s1" d="M27,30c3,1,6,1,9,0.5l37-3"/>
</g>
</g>
<g id="kvg:StrokeNumbers_04e8c" style="font-size:8;fill:#808080">
  <text transform="matrix(1 0 0 1 20 28)">1</text>
</g>
</svg>"#;

#[test]
fn strokes_follow_their_numbers_not_document_order() {
    let c = parse_kanjivg("ja", 0x4E8C, BODY).unwrap();
    assert_eq!(c.view_box.to_string(), "0 0 109 109");
    assert_eq!(c.transform, None);
    assert_eq!(c.strokes.len(), 2);
    assert!(c.strokes[0].stroke_path.starts_with("M27,30"));
    assert!(c.strokes[1].stroke_path.starts_with("M14.5,82.5"));
    assert!(c.strokes.iter().all(|s| s.stroke_width == 3.0 && s.clip_path.is_none()));
    c.validate().unwrap();
}

#[test]
fn missing_stroke_width_is_an_error() {
    let body = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 109 109">
        <g><path id="kvg:04e00-s1" d="M0 0 L10 0"/></g></svg>"#;
    let err = parse_kanjivg("ja", 0x4E00, body).unwrap_err();
    assert!(err.to_string().contains("stroke width"));
}

#[test]
fn missing_view_box_is_an_error() {
    let body = r#"<svg xmlns="http://www.w3.org/2000/svg"><g style="stroke-width:3"/></svg>"#;
    let err = parse_kanjivg("ja", 0x4E00, body).unwrap_err();
    assert!(err.to_string().contains("viewBox"));
}

#[test]
fn file_names_are_five_hex_digits() {
    assert_eq!(path_for(0x4E00), "gh/KanjiVG/kanjivg/kanji/04e00.svg");
    assert_eq!(path_for(0x2000B), "gh/KanjiVG/kanjivg/kanji/2000b.svg");
}
