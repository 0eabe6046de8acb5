//! KanjiVG SVG files: one `<path>` per stroke, numbered by an `-sN` id suffix.

use std::borrow::Cow;

use crate::character::model::{Character, Stroke};
use crate::foundation::error::{StrokesError, StrokesResult};
use crate::source::markup::{css_number, parse_xml, root_view_box};

/// Source id.
pub const SOURCE_JA: &str = "ja";

/// URL path of the KanjiVG file for `code_point` (five hex digits).
pub(crate) fn path_for(code_point: u32) -> String {
    format!("gh/KanjiVG/kanjivg/kanji/{code_point:05x}.svg")
}

const KVG_NS: &str = "http://kanjivg.tagaini.net";

/// KanjiVG declares its `kvg:` prefix only through DTD defaults, which the XML parser does not
/// apply, so the declaration is added to the root element.
fn declare_kvg_namespace(body: &str) -> Cow<'_, str> {
    if body.contains("xmlns:kvg=") {
        return Cow::Borrowed(body);
    }
    Cow::Owned(body.replacen("<svg ", &format!("<svg xmlns:kvg=\"{KVG_NS}\" "), 1))
}

fn stroke_number(id: &str) -> Option<u32> {
    let (_, n) = id.rsplit_once("-s")?;
    n.parse().ok()
}

/// Parse a KanjiVG document.
pub fn parse_kanjivg(source_id: &str, code_point: u32, body: &str) -> StrokesResult<Character> {
    let body = declare_kvg_namespace(body);
    let doc = parse_xml(source_id, &body)?;
    let view_box = root_view_box(source_id, &doc)?;

    let stroke_width = doc
        .descendants()
        .filter(|n| n.has_tag_name("g"))
        .filter_map(|n| n.attribute("style"))
        .find_map(|style| css_number(style, "stroke-width"))
        .ok_or_else(|| StrokesError::source(source_id, "cannot get stroke width"))?;

    let mut numbered = doc
        .descendants()
        .filter(|n| n.has_tag_name("path"))
        .map(|n| {
            let id = n
                .attribute("id")
                .ok_or_else(|| StrokesError::source(source_id, "stroke path has no id"))?;
            let number = stroke_number(id).ok_or_else(|| {
                StrokesError::source(source_id, format!("cannot get stroke number from \"{id}\""))
            })?;
            let d = n
                .attribute("d")
                .ok_or_else(|| StrokesError::source(source_id, format!("path \"{id}\" has no d")))?;
            Ok((number, d.to_owned()))
        })
        .collect::<StrokesResult<Vec<_>>>()?;
    numbered.sort_by_key(|(number, _)| *number);

    Ok(Character {
        source: source_id.to_owned(),
        code_point,
        transform: None,
        view_box,
        strokes: numbered
            .into_iter()
            .map(|(_, d)| Stroke::new(d, stroke_width))
            .collect(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/source/ja.rs"]
mod tests;
