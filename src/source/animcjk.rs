//! AnimCJK SVG files: stroke center lines clipped by `<clipPath><use href>` outlines.

use crate::character::model::{Character, Stroke};
use crate::foundation::error::{StrokesError, StrokesResult};
use crate::source::markup::{css_number, extract_numbers, parse_xml, root_view_box};

const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Character set published by AnimCJK.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimCjkGroup {
    /// Japanese.
    Ja,
    /// Simplified Chinese.
    ZhHans,
    /// Traditional Chinese.
    ZhHant,
    /// Korean.
    Ko,
}

impl AnimCjkGroup {
    /// Every group, in registry order.
    pub const ALL: [AnimCjkGroup; 4] = [Self::Ja, Self::ZhHans, Self::ZhHant, Self::Ko];

    /// Source id (`animcjk-ja`, ...).
    pub fn source_id(self) -> &'static str {
        match self {
            Self::Ja => "animcjk-ja",
            Self::ZhHans => "animcjk-zh-hans",
            Self::ZhHant => "animcjk-zh-hant",
            Self::Ko => "animcjk-ko",
        }
    }

    fn directory(self) -> &'static str {
        match self {
            Self::Ja => "svgsJa",
            Self::ZhHans => "svgsZhHans",
            Self::ZhHant => "svgsZhHant",
            Self::Ko => "svgsKo",
        }
    }

    /// URL path of the file for `code_point` (decimal).
    pub(crate) fn path_for(self, code_point: u32) -> String {
        format!("gh/parsimonhi/animCJK/{}/{code_point}.svg", self.directory())
    }
}

fn url_target(reference: &str) -> &str {
    reference
        .trim()
        .trim_start_matches("url(")
        .trim_end_matches(')')
        .trim_start_matches('#')
}

/// Parse an AnimCJK document.
pub fn parse_animcjk(source_id: &str, code_point: u32, body: &str) -> StrokesResult<Character> {
    let doc = parse_xml(source_id, body)?;
    let view_box = root_view_box(source_id, &doc)?;
    let by_id = |id: &str| {
        doc.descendants()
            .find(|n| n.is_element() && n.attribute("id") == Some(id))
    };

    let stroke_width = doc
        .descendants()
        .filter(|n| n.has_tag_name("style"))
        .map(|n| {
            n.descendants()
                .filter_map(|t| if t.is_text() { t.text() } else { None })
                .collect::<String>()
        })
        .find_map(|css| css_number(&css, "stroke-width"))
        .ok_or_else(|| StrokesError::source(source_id, "cannot get stroke width"))?;

    let mut numbered = doc
        .descendants()
        .filter(|n| n.has_tag_name("path"))
        .filter_map(|n| n.attribute("clip-path").map(|clip| (n, clip)))
        .map(|(n, clip)| {
            let number = extract_numbers(clip).get(1).copied().ok_or_else(|| {
                StrokesError::source(source_id, format!("cannot get stroke number from \"{clip}\""))
            })?;
            let stroke_path = n
                .attribute("d")
                .ok_or_else(|| StrokesError::source(source_id, "cannot get stroke path"))?;
            let outline = by_id(url_target(clip))
                .and_then(|c| c.descendants().find(|u| u.has_tag_name("use")))
                .and_then(|u| u.attribute((XLINK_NS, "href")).or_else(|| u.attribute("href")))
                .and_then(|href| by_id(href.trim_start_matches('#')))
                .and_then(|p| p.attribute("d"))
                .ok_or_else(|| {
                    StrokesError::source(source_id, format!("cannot get clip path for \"{clip}\""))
                })?;
            Ok((
                number,
                Stroke::new(stroke_path, stroke_width).with_clip(outline),
            ))
        })
        .collect::<StrokesResult<Vec<_>>>()?;
    numbered.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    Ok(Character {
        source: source_id.to_owned(),
        code_point,
        transform: None,
        view_box,
        strokes: numbered.into_iter().map(|(_, s)| s).collect(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/source/animcjk.rs"]
mod tests;
