use super::*;
use crate::animation::options::PartialAnimationOptions;
use crate::character::model::Stroke;

fn character(view_box: &str) -> Character {
    Character {
        source: "test".to_owned(),
        code_point: 0x5341,
        transform: Some("translate(1, 2)".to_owned()),
        view_box: ViewBox::parse(view_box).unwrap(),
        strokes: vec![
            Stroke::new("M10 50 L90 50", 8.0),
            Stroke::new("M50 10 L50 90", 6.0).with_clip("M40 0 L60 0 L60 100 L40 100 Z"),
        ],
    }
}

fn options(partial: PartialAnimationOptions) -> AnimationOptions {
    AnimationOptions::from_partial(partial).unwrap()
}

#[test]
fn ids_carry_code_point_source_and_session_token() {
    let c = character("0 0 100 100");
    assert_eq!(stroke_path_id(&c, 1, "abcn1"), "strokePath-21313-test-1-abcn1");
    assert_eq!(clip_path_id(1, "abcn1", false), "clipPath-1-abcn1");
    assert_eq!(clip_path_id(1, "abcn1", true), "clipPath-static-1-abcn1");
}

#[test]
fn default_document_layout() {
    let c = character("0 0 100 100");
    let svg = build_svg(&c, &AnimationOptions::default(), "u", &mut |_, _| {}, None);
    assert_eq!(svg.attr("viewBox"), Some("0 0 100 100"));
    assert_eq!(svg.attr("xmlns"), Some(SVG_NS));

    let groups: Vec<_> = svg.child_elements().collect();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].attr("transform"), Some("translate(1, 2)"));

    let first = svg.find_by_id("strokePath-21313-test-0-u").unwrap();
    assert_eq!(first.attr("fill"), Some("none"));
    assert_eq!(first.attr("stroke"), Some("#000000"));
    assert_eq!(first.attr("stroke-linecap"), Some("round"));
    assert_eq!(first.attr("stroke-width"), None);

    let second = svg.find_by_id("strokePath-21313-test-1-u").unwrap();
    assert_eq!(second.attr("clip-path"), Some("url(#clipPath-1-u)"));
    assert!(svg.find_by_id("clipPath-1-u").is_some());
}

#[test]
fn background_and_grid_follow_the_view_box_origin() {
    let c = character("10 20 100 50");
    let opts = options(PartialAnimationOptions {
        include_background: Some(true),
        include_grid: Some(true),
        grid_rows: Some(2.0),
        grid_columns: Some(4.0),
        ..Default::default()
    });
    let svg = build_svg(&c, &opts, "u", &mut |_, _| {}, None);
    let rect = svg.descendants_named("rect")[0];
    assert_eq!(rect.attr("x"), Some("10"));
    assert_eq!(rect.attr("y"), Some("20"));
    assert_eq!(rect.attr("fill"), Some("#ffffff"));

    let lines = svg.descendants_named("line");
    assert_eq!(lines.len(), 3 + 1);
    assert_eq!(lines[0].attr("x1"), Some("35"));
    assert_eq!(lines[0].attr("y2"), Some("70"));
    assert_eq!(lines[3].attr("y1"), Some("45"));
    assert!(lines.iter().all(|l| l.attr("stroke-width") == Some("1%")));
}

#[test]
fn preview_strokes_are_static() {
    let c = character("0 0 100 100");
    let opts = options(PartialAnimationOptions {
        include_preview: Some(true),
        ..Default::default()
    });
    let mut decorated = Vec::new();
    let svg = build_svg(
        &c,
        &opts,
        "u",
        &mut |i, p| {
            decorated.push(i);
            p.set_attr("stroke-width", "0");
        },
        None,
    );
    assert_eq!(decorated, [0, 1]);

    let paths = svg.descendants_named("path");
    let preview: Vec<_> = paths
        .iter()
        .filter(|p| p.attr("stroke") == Some("#c0c0c0"))
        .collect();
    assert_eq!(preview.len(), 2);
    assert!(preview.iter().all(|p| p.attr("id").is_none()));
    assert_eq!(preview[0].attr("stroke-width"), Some("8"));
    assert!(svg.find_by_id("clipPath-static-1-u").is_some());
}

#[test]
fn playback_registers_two_tracks_per_stroke() {
    let c = character("0 0 100 100");
    let opts = AnimationOptions::default();
    let timing = StrokeTiming::from_options(&opts, 2).unwrap();
    let tracks = stroke_tracks(&c, &timing, "u").unwrap();
    assert_eq!(tracks[0].dash[0].value, DashArray::hidden(80.0));

    let svg = build_svg(&c, &opts, "u", &mut |_, _| {}, None);
    let mut playback = SvgPlayback::new(svg, tracks, &c, &opts, timing);
    assert_eq!(playback.timeline.animations().len(), 4);
    assert_eq!(playback.elapsed(), Some(0.0));

    playback.on_frame(10.0);
    playback.on_frame(10.5);
    assert!((playback.elapsed().unwrap() - 0.5).abs() < 1e-9);
    assert_eq!(playback.frame_size(), (100, 100));

    playback.dispose();
    assert_eq!(playback.elapsed(), None);
    assert!(playback.document.children().is_empty());
}

#[test]
fn frame_rasterizes_the_current_position() {
    let c = character("0 0 100 100");
    let opts = AnimationOptions::default();
    let timing = StrokeTiming::from_options(&opts, 2).unwrap();
    let tracks = stroke_tracks(&c, &timing, "u").unwrap();
    let svg = build_svg(&c, &opts, "u", &mut |_, _| {}, None);
    let mut playback = SvgPlayback::new(svg, tracks, &c, &opts, timing);

    let covered = |f: &FrameRGBA| f.data.chunks_exact(4).filter(|px| px[3] > 0).count();
    playback.on_frame(0.0);
    let start = playback.frame(Format::SvgCss).unwrap();
    playback.on_frame(1.5);
    let later = playback.frame(Format::SvgCss).unwrap();
    assert_eq!((later.width, later.height), (100, 100));
    assert!(covered(&later) > covered(&start) + 300);
}
