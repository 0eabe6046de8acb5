use std::fmt;
use std::str::FromStr;

use crate::animation::options::AnimationOptions;
use crate::character::model::Character;
use crate::foundation::error::{StrokesError, StrokesResult};
use crate::foundation::ids::IdAllocator;
use crate::render::handle::Surface;
use crate::render::raster::RasterAnimator;
use crate::render::svg::{CssAnimator, SmilAnimator, WaAnimator};

/// Animation output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Format {
    /// Raster frames redrawn on every tick.
    #[serde(rename = "canvas-2d")]
    Canvas2d,
    /// SVG with an embedded `@keyframes` style sheet.
    #[serde(rename = "svg-css")]
    SvgCss,
    /// SVG with SMIL `<animate>` elements.
    #[serde(rename = "svg-smil")]
    SvgSmil,
    /// SVG driven through a Web Animations timeline.
    #[serde(rename = "svg-wa")]
    SvgWa,
}

impl Format {
    /// Every supported format, in registry order.
    pub const ALL: [Format; 4] = [
        Format::Canvas2d,
        Format::SvgCss,
        Format::SvgSmil,
        Format::SvgWa,
    ];

    /// Stable identifier (`canvas-2d`, `svg-css`, `svg-smil`, `svg-wa`).
    pub fn id(self) -> &'static str {
        match self {
            Self::Canvas2d => "canvas-2d",
            Self::SvgCss => "svg-css",
            Self::SvgSmil => "svg-smil",
            Self::SvgWa => "svg-wa",
        }
    }

    /// Whether the output is an SVG document.
    pub fn is_svg(self) -> bool {
        !matches!(self, Self::Canvas2d)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Format {
    type Err = StrokesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| StrokesError::unsupported_format(s))
    }
}

/// One rendering strategy: turns a character into an animated surface.
pub trait Animator: Send + Sync {
    /// Format produced by this strategy.
    fn format(&self) -> Format;

    /// Build the surface. Element ids are drawn from `ids`.
    fn animate(
        &self,
        character: &Character,
        options: &AnimationOptions,
        ids: &IdAllocator,
    ) -> StrokesResult<Surface>;
}

/// Strategy implementing `format`.
pub fn animator_for(format: Format) -> &'static dyn Animator {
    match format {
        Format::Canvas2d => &RasterAnimator,
        Format::SvgCss => &CssAnimator,
        Format::SvgSmil => &SmilAnimator,
        Format::SvgWa => &WaAnimator,
    }
}
