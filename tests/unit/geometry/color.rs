use super::*;

#[test]
fn accepts_common_notations() {
    for text in ["#000000", "black", "rgb(0, 0, 0)"] {
        let c = CssColor::parse(text).unwrap();
        assert_eq!(c.rgba(), [0, 0, 0, 255], "{text}");
        assert_eq!(c.as_str(), text);
    }
    assert_eq!(CssColor::parse("#d3d3d3").unwrap().rgba(), [211, 211, 211, 255]);
    assert_eq!(CssColor::parse("transparent").unwrap().rgba()[3], 0);
}

#[test]
fn rejects_keywords_and_garbage() {
    for text in [
        "",
        "not-a-color",
        "currentcolor",
        "CURRENTCOLOR",
        "inherit",
        "initial",
        "revert",
        "revert-layer",
        "unset",
    ] {
        assert!(CssColor::parse(text).is_err(), "{text:?} should be rejected");
    }
}

#[test]
fn premultiplies_alpha() {
    let c = CssColor::parse("rgba(255, 0, 0, 0.5)").unwrap();
    let [r, g, b, a] = c.premultiplied();
    assert_eq!((g, b), (0, 0));
    assert_eq!(r, a);
}

#[test]
fn serde_keeps_the_original_text() {
    let c: CssColor = serde_json::from_str("\"#FFF\"").unwrap();
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#FFF\"");
    assert!(serde_json::from_str::<CssColor>("\"inherit\"").is_err());
}
