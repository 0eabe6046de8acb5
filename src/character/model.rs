use crate::foundation::error::{StrokesError, StrokesResult};
use crate::geometry::path::parse_path;
use crate::geometry::view_box::ViewBox;

/// One pen movement of a glyph.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Center line of the stroke, in SVG path data syntax.
    pub stroke_path: String,
    /// Optional outline the stroke is clipped to (SVG path data).
    #[serde(default)]
    pub clip_path: Option<String>,
    /// Nominal pen width in view box units.
    pub stroke_width: f64,
}

impl Stroke {
    /// Stroke without a clip region.
    pub fn new(stroke_path: impl Into<String>, stroke_width: f64) -> Self {
        Self {
            stroke_path: stroke_path.into(),
            clip_path: None,
            stroke_width,
        }
    }

    /// Attach a clip outline.
    pub fn with_clip(mut self, clip_path: impl Into<String>) -> Self {
        self.clip_path = Some(clip_path.into());
        self
    }
}

/// A glyph loaded from one source: its coordinate frame plus strokes in writing order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Character {
    /// Identifier of the source the geometry came from.
    pub source: String,
    /// Unicode scalar value of the glyph.
    pub code_point: u32,
    /// Optional SVG transform applied to every stroke.
    #[serde(default)]
    pub transform: Option<String>,
    /// Coordinate frame of the stroke geometry.
    pub view_box: ViewBox,
    /// Strokes in writing order.
    pub strokes: Vec<Stroke>,
}

impl Character {
    /// Check that the character can be rendered.
    pub fn validate(&self) -> StrokesResult<()> {
        if self.strokes.is_empty() {
            return Err(StrokesError::geometry(format!(
                "character U+{:04X} from \"{}\" has no strokes",
                self.code_point, self.source
            )));
        }
        for (i, stroke) in self.strokes.iter().enumerate() {
            if !stroke.stroke_width.is_finite() || stroke.stroke_width <= 0.0 {
                return Err(StrokesError::geometry(format!(
                    "stroke {i} width must be finite and > 0, got {}",
                    stroke.stroke_width
                )));
            }
            parse_path(&stroke.stroke_path)?;
            if let Some(clip) = &stroke.clip_path {
                parse_path(clip)?;
            }
        }
        if let Some(t) = &self.transform {
            crate::geometry::transform::transform_matrix(t)?;
        }
        Ok(())
    }

    /// The glyph as a `char`, when the code point is a valid scalar.
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.code_point)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/character/model.rs"]
mod tests;
