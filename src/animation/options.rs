use crate::foundation::error::{StrokesError, StrokesResult, Violation};
use crate::geometry::color::{CssColor, check_css_color};

/// Caller-facing option set: every field optional, missing and `null` fields take the default.
///
/// Unknown fields are ignored when deserializing, so option blobs written for other versions
/// still load.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PartialAnimationOptions {
    /// Draw the grid overlay.
    pub include_grid: Option<bool>,
    /// Grid line color.
    pub grid_color: Option<String>,
    /// Number of grid rows, >= 1.
    pub grid_rows: Option<f64>,
    /// Number of grid columns, >= 1.
    pub grid_columns: Option<f64>,
    /// Fill the surface before drawing.
    pub include_background: Option<bool>,
    /// Background fill color.
    pub background_color: Option<String>,
    /// Draw the whole character underneath as a guide.
    pub include_preview: Option<bool>,
    /// Guide color.
    pub preview_color: Option<String>,
    /// Color of the animated strokes.
    pub stroke_color: Option<String>,
    /// Share of each stroke slot spent holding the finished stroke, in `[0, 1)`.
    pub pause_ratio: Option<f64>,
    /// Seconds per stroke slot, > 0.
    pub total_stroke_duration: Option<f64>,
    /// Clicking the output toggles pause.
    pub interactive: Option<bool>,
}

/// Validated, immutable animation options.
///
/// Built with [`AnimationOptions::from_partial`] (or [`Default`]); once built every color is a
/// concrete CSS color and every number is finite and in range.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "PartialAnimationOptions", into = "PartialAnimationOptions")]
pub struct AnimationOptions {
    include_grid: bool,
    grid_color: CssColor,
    grid_rows: f64,
    grid_columns: f64,
    include_background: bool,
    background_color: CssColor,
    include_preview: bool,
    preview_color: CssColor,
    stroke_color: CssColor,
    pause_ratio: f64,
    total_stroke_duration: f64,
    interactive: bool,
}

const DEFAULT_GRID_COLOR: &str = "#d3d3d3";
const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";
const DEFAULT_PREVIEW_COLOR: &str = "#c0c0c0";
const DEFAULT_STROKE_COLOR: &str = "#000000";

#[derive(Clone, Copy)]
enum Bound {
    Ge(f64),
    Gt(f64),
    Lt(f64),
}

fn check_number(
    violations: &mut Vec<Violation>,
    field: &'static str,
    value: f64,
    bounds: &[Bound],
) -> f64 {
    if value.is_nan() {
        violations.push(Violation::new(field, "is NaN"));
        return value;
    }
    if !value.is_finite() {
        violations.push(Violation::new(field, "is not finite"));
        return value;
    }
    for bound in bounds {
        let broken = match *bound {
            Bound::Ge(b) => (value < b).then(|| format!("is not >= {b}")),
            Bound::Gt(b) => (value <= b).then(|| format!("is not > {b}")),
            Bound::Lt(b) => (value >= b).then(|| format!("is not < {b}")),
        };
        if let Some(msg) = broken {
            violations.push(Violation::new(field, msg));
        }
    }
    value
}

fn check_color(
    violations: &mut Vec<Violation>,
    field: &'static str,
    value: Option<String>,
    default: &str,
) -> Option<CssColor> {
    let text = value.unwrap_or_else(|| default.to_owned());
    match check_css_color(&text) {
        Ok(c) => Some(c),
        Err(msg) => {
            violations.push(Violation::new(field, msg));
            None
        }
    }
}

impl AnimationOptions {
    /// Merge `partial` over the defaults and validate the result.
    ///
    /// Every broken rule is reported at once in a single [`StrokesError::Validation`].
    pub fn from_partial(partial: PartialAnimationOptions) -> StrokesResult<Self> {
        let mut v = Vec::new();

        let grid_color = check_color(&mut v, "grid_color", partial.grid_color, DEFAULT_GRID_COLOR);
        let grid_rows = check_number(
            &mut v,
            "grid_rows",
            partial.grid_rows.unwrap_or(2.0),
            &[Bound::Ge(1.0)],
        );
        let grid_columns = check_number(
            &mut v,
            "grid_columns",
            partial.grid_columns.unwrap_or(2.0),
            &[Bound::Ge(1.0)],
        );
        let background_color = check_color(
            &mut v,
            "background_color",
            partial.background_color,
            DEFAULT_BACKGROUND_COLOR,
        );
        let preview_color = check_color(
            &mut v,
            "preview_color",
            partial.preview_color,
            DEFAULT_PREVIEW_COLOR,
        );
        let stroke_color = check_color(
            &mut v,
            "stroke_color",
            partial.stroke_color,
            DEFAULT_STROKE_COLOR,
        );
        let pause_ratio = check_number(
            &mut v,
            "pause_ratio",
            partial.pause_ratio.unwrap_or(0.2),
            &[Bound::Ge(0.0), Bound::Lt(1.0)],
        );
        let total_stroke_duration = check_number(
            &mut v,
            "total_stroke_duration",
            partial.total_stroke_duration.unwrap_or(1.0),
            &[Bound::Gt(0.0)],
        );

        match (grid_color, background_color, preview_color, stroke_color) {
            (Some(grid_color), Some(background_color), Some(preview_color), Some(stroke_color))
                if v.is_empty() =>
            {
                Ok(Self {
                    include_grid: partial.include_grid.unwrap_or(false),
                    grid_color,
                    grid_rows,
                    grid_columns,
                    include_background: partial.include_background.unwrap_or(false),
                    background_color,
                    include_preview: partial.include_preview.unwrap_or(false),
                    preview_color,
                    stroke_color,
                    pause_ratio,
                    total_stroke_duration,
                    interactive: partial.interactive.unwrap_or(true),
                })
            }
            _ => Err(StrokesError::Validation(v)),
        }
    }

    /// Every field set explicitly; `from_partial(o.to_partial()) == o`.
    pub fn to_partial(&self) -> PartialAnimationOptions {
        PartialAnimationOptions {
            include_grid: Some(self.include_grid),
            grid_color: Some(self.grid_color.to_string()),
            grid_rows: Some(self.grid_rows),
            grid_columns: Some(self.grid_columns),
            include_background: Some(self.include_background),
            background_color: Some(self.background_color.to_string()),
            include_preview: Some(self.include_preview),
            preview_color: Some(self.preview_color.to_string()),
            stroke_color: Some(self.stroke_color.to_string()),
            pause_ratio: Some(self.pause_ratio),
            total_stroke_duration: Some(self.total_stroke_duration),
            interactive: Some(self.interactive),
        }
    }

    /// Draw the grid overlay.
    pub fn include_grid(&self) -> bool {
        self.include_grid
    }

    /// Grid line color.
    pub fn grid_color(&self) -> &CssColor {
        &self.grid_color
    }

    /// Grid rows.
    pub fn grid_rows(&self) -> f64 {
        self.grid_rows
    }

    /// Grid columns.
    pub fn grid_columns(&self) -> f64 {
        self.grid_columns
    }

    /// Fill the background.
    pub fn include_background(&self) -> bool {
        self.include_background
    }

    /// Background color.
    pub fn background_color(&self) -> &CssColor {
        &self.background_color
    }

    /// Draw the guide silhouette.
    pub fn include_preview(&self) -> bool {
        self.include_preview
    }

    /// Guide color.
    pub fn preview_color(&self) -> &CssColor {
        &self.preview_color
    }

    /// Stroke color.
    pub fn stroke_color(&self) -> &CssColor {
        &self.stroke_color
    }

    /// Hold share of each stroke slot, in `[0, 1)`.
    pub fn pause_ratio(&self) -> f64 {
        self.pause_ratio
    }

    /// Seconds per stroke slot.
    pub fn total_stroke_duration(&self) -> f64 {
        self.total_stroke_duration
    }

    /// Click toggles pause.
    pub fn interactive(&self) -> bool {
        self.interactive
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            include_grid: false,
            grid_color: CssColor::opaque(DEFAULT_GRID_COLOR, [211, 211, 211]),
            grid_rows: 2.0,
            grid_columns: 2.0,
            include_background: false,
            background_color: CssColor::opaque(DEFAULT_BACKGROUND_COLOR, [255, 255, 255]),
            include_preview: false,
            preview_color: CssColor::opaque(DEFAULT_PREVIEW_COLOR, [192, 192, 192]),
            stroke_color: CssColor::opaque(DEFAULT_STROKE_COLOR, [0, 0, 0]),
            pause_ratio: 0.2,
            total_stroke_duration: 1.0,
            interactive: true,
        }
    }
}

impl TryFrom<PartialAnimationOptions> for AnimationOptions {
    type Error = StrokesError;

    fn try_from(value: PartialAnimationOptions) -> Result<Self, Self::Error> {
        Self::from_partial(value)
    }
}

impl From<AnimationOptions> for PartialAnimationOptions {
    fn from(value: AnimationOptions) -> Self {
        value.to_partial()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/options.rs"]
mod tests;
