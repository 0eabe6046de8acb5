//! Small helpers shared by the SVG based source parsers.

use crate::foundation::error::{StrokesError, StrokesResult};
use crate::geometry::view_box::ViewBox;

/// Every decimal number in `text`, in order (`"url(#z20108c3)"` gives `[20108, 3]`).
pub(crate) fn extract_numbers(text: &str) -> Vec<f64> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = if i > 0 && bytes[i - 1] == b'-' { i - 1 } else { i };
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
        if let Ok(n) = text[start..i].parse() {
            out.push(n);
        }
    }
    out
}

/// Value of `property` in a list of CSS declarations or rules, parsed as a leading number.
pub(crate) fn css_number(css: &str, property: &str) -> Option<f64> {
    css.split(['{', '}', ';'])
        .filter_map(|decl| decl.split_once(':'))
        .filter(|(name, _)| name.trim().eq_ignore_ascii_case(property))
        .filter_map(|(_, value)| leading_number(value.trim()))
        .find(|n| n.is_finite())
}

fn leading_number(value: &str) -> Option<f64> {
    let end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

pub(crate) fn parse_xml<'a>(
    source_id: &str,
    text: &'a str,
) -> StrokesResult<roxmltree::Document<'a>> {
    let opts = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    roxmltree::Document::parse_with_options(text, opts)
        .map_err(|e| StrokesError::source(source_id, format!("invalid svg: {e}")))
}

pub(crate) fn root_view_box(source_id: &str, doc: &roxmltree::Document<'_>) -> StrokesResult<ViewBox> {
    let text = doc
        .descendants()
        .find(|n| n.has_tag_name("svg"))
        .and_then(|n| n.attribute("viewBox"))
        .ok_or_else(|| StrokesError::source(source_id, "cannot get viewBox"))?;
    ViewBox::parse(text).map_err(|e| StrokesError::source(source_id, e.to_string()))
}
