pub(crate) mod base;
pub(crate) mod css;
pub(crate) mod doc;
pub(crate) mod smil;
pub(crate) mod snapshot;
pub(crate) mod wa;

pub use css::{CssAnimator, CssSurface};
pub use doc::{SvgElement, SvgNode};
pub use smil::{SmilAnimator, SmilSurface};
pub use snapshot::{rasterize_svg, snapshot_svg};
pub use wa::{WaAnimator, WaSurface};
