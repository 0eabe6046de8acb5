use std::{fmt, str::FromStr};

use crate::foundation::error::{StrokesError, StrokesResult};

/// The user-space rectangle a character is drawn in (`min-x min-y width height`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ViewBox {
    /// Left edge.
    pub min_x: f64,
    /// Top edge.
    pub min_y: f64,
    /// Width, > 0.
    pub width: f64,
    /// Height, > 0.
    pub height: f64,
}

impl ViewBox {
    /// Build a view box, rejecting non-finite values and empty extents.
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> StrokesResult<Self> {
        if ![min_x, min_y, width, height].iter().all(|v| v.is_finite()) {
            return Err(StrokesError::geometry("view box must be finite"));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(StrokesError::geometry(format!(
                "view box extent must be > 0, got {width}x{height}"
            )));
        }
        Ok(Self {
            min_x,
            min_y,
            width,
            height,
        })
    }

    /// Parse a `viewBox` attribute value.
    pub fn parse(s: &str) -> StrokesResult<Self> {
        let vb = svgtypes::ViewBox::from_str(s.trim())
            .map_err(|e| StrokesError::geometry(format!("invalid view box \"{s}\": {e}")))?;
        Self::new(vb.x, vb.y, vb.w, vb.h)
    }

    /// The view box as a rectangle in user space.
    pub fn to_rect(self) -> kurbo::Rect {
        kurbo::Rect::new(
            self.min_x,
            self.min_y,
            self.min_x + self.width,
            self.min_y + self.height,
        )
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

impl FromStr for ViewBox {
    type Err = StrokesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ViewBox {
    type Error = StrokesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ViewBox> for String {
    fn from(value: ViewBox) -> Self {
        value.to_string()
    }
}
