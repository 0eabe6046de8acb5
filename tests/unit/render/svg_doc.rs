use super::*;

#[test]
fn serializes_nested_elements_with_escaping() {
    let mut svg = SvgElement::new("svg").with_attr("xmlns", SVG_NS);
    let mut style = SvgElement::new("style");
    style.push_text("a > b { fill: \"red\" }");
    svg.push(style);
    svg.push(SvgElement::new("path").with_attr("d", "M0 0 L1 1"));

    assert_eq!(
        svg.to_xml_string(),
        "<svg xmlns=\"http://www.w3.org/2000/svg\"><style>a &gt; b { fill: &quot;red&quot; }</style><path d=\"M0 0 L1 1\"/></svg>"
    );
}

#[test]
fn set_attr_replaces_in_place() {
    let mut p = SvgElement::new("path")
        .with_attr("id", "a")
        .with_attr("fill", "none");
    p.set_attr("id", "b");
    assert_eq!(p.to_xml_string(), "<path id=\"b\" fill=\"none\"/>");
    p.remove_attr("fill");
    assert_eq!(p.attr("fill"), None);
}

#[test]
fn finds_elements_by_id_and_name() {
    let mut svg = SvgElement::new("svg").with_child(
        SvgElement::new("g")
            .with_child(SvgElement::new("path").with_attr("id", "p1"))
            .with_child(SvgElement::new("path").with_attr("id", "p2")),
    );
    assert!(svg.find_by_id("p2").is_some());
    assert!(svg.find_by_id("p3").is_none());
    svg.find_by_id_mut("p1").unwrap().set_attr("stroke", "red");
    assert_eq!(svg.find_by_id("p1").unwrap().attr("stroke"), Some("red"));
    assert_eq!(svg.descendants_named("path").len(), 2);
    svg.clear();
    assert_eq!(svg.to_xml_string(), "<svg/>");
}
