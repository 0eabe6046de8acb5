use std::{fmt, str::FromStr};

use crate::foundation::error::{StrokesError, StrokesResult};

/// CSS-wide keywords and `currentcolor` parse as colors in a style sheet but do not name one.
const NON_COLOR_KEYWORDS: &[&str] = &[
    "currentcolor",
    "inherit",
    "initial",
    "revert",
    "revert-layer",
    "unset",
];

/// A validated CSS color expression.
///
/// The original text is kept verbatim (it is written back into generated SVG and style
/// sheets); the resolved straight-alpha RGBA8 value feeds the raster back-end.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CssColor {
    text: String,
    rgba: [u8; 4],
}

impl CssColor {
    /// Parse and validate a color expression.
    pub fn parse(text: &str) -> StrokesResult<Self> {
        check_css_color(text).map_err(|msg| StrokesError::validation("color", msg))
    }

    pub(crate) fn opaque(text: &str, [r, g, b]: [u8; 3]) -> Self {
        Self {
            text: text.to_owned(),
            rgba: [r, g, b, 255],
        }
    }

    /// The expression as written.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Straight (non-premultiplied) RGBA8.
    pub fn rgba(&self) -> [u8; 4] {
        self.rgba
    }

    /// Premultiplied RGBA8.
    pub fn premultiplied(&self) -> [u8; 4] {
        let [r, g, b, a] = self.rgba;
        let premul = |c: u8| -> u8 { ((u16::from(c) * u16::from(a) + 127) / 255) as u8 };
        [premul(r), premul(g), premul(b), a]
    }
}

/// Validate `text`, returning the rule it broke on failure.
pub(crate) fn check_css_color(text: &str) -> Result<CssColor, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("must be a CSS color, got an empty string".to_owned());
    }
    if NON_COLOR_KEYWORDS
        .iter()
        .any(|kw| trimmed.eq_ignore_ascii_case(kw))
    {
        return Err(format!("must be a concrete CSS color, got \"{text}\""));
    }
    let c = svgtypes::Color::from_str(trimmed)
        .map_err(|_| format!("must be a CSS color, got \"{text}\""))?;
    Ok(CssColor {
        text: text.to_owned(),
        rgba: [c.red, c.green, c.blue, c.alpha],
    })
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for CssColor {
    type Err = StrokesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CssColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_css_color(&value)
    }
}

impl From<CssColor> for String {
    fn from(value: CssColor) -> Self {
        value.text
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/color.rs"]
mod tests;
