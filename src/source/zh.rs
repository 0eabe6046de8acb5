//! hanzi-writer-data JSON (`strokes` outlines plus `medians` center lines).

use crate::character::model::{Character, Stroke};
use crate::foundation::error::{StrokesError, StrokesResult};
use crate::geometry::view_box::ViewBox;

/// Source id.
pub const SOURCE_ZH: &str = "zh";

const STROKE_WIDTH: f64 = 128.0;
const TRANSFORM: &str = "scale(1, -1) translate(0, -900)";

#[derive(serde::Deserialize)]
struct HanziWriterData {
    strokes: Vec<String>,
    medians: Vec<Vec<[f64; 2]>>,
}

/// URL path of the data file for `code_point`.
pub(crate) fn path_for(code_point: u32) -> StrokesResult<String> {
    let c = char::from_u32(code_point).ok_or_else(|| {
        StrokesError::source(SOURCE_ZH, format!("U+{code_point:04X} is not a character"))
    })?;
    Ok(format!("npm/hanzi-writer-data/{c}.json"))
}

fn median_path(points: &[[f64; 2]]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, [x, y])| format!("{} {x} {y}", if i == 0 { "M" } else { "L" }))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a hanzi-writer-data document.
///
/// Medians become stroke paths, outlines become their clip paths; the glyph is flipped into SVG
/// coordinates by a fixed transform.
pub fn parse_hanzi_writer(source_id: &str, code_point: u32, body: &str) -> StrokesResult<Character> {
    let data: HanziWriterData = serde_json::from_str(body)
        .map_err(|e| StrokesError::source(source_id, format!("data is invalid: {e}")))?;
    let strokes = data
        .strokes
        .into_iter()
        .zip(&data.medians)
        .map(|(outline, median)| Stroke::new(median_path(median), STROKE_WIDTH).with_clip(outline))
        .collect();
    Ok(Character {
        source: source_id.to_owned(),
        code_point,
        transform: Some(TRANSFORM.to_owned()),
        view_box: ViewBox::new(0.0, 0.0, 1024.0, 1024.0)?,
        strokes,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/source/zh.rs"]
mod tests;
