use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathSeg, Point};

use crate::foundation::error::{StrokesError, StrokesResult};

/// Accuracy used for every arc length computation.
pub(crate) const ARCLEN_ACCURACY: f64 = 1e-3;

/// Parse SVG path data (`d` attribute syntax).
pub fn parse_path(d: &str) -> StrokesResult<BezPath> {
    BezPath::from_svg(d.trim())
        .map_err(|e| StrokesError::geometry(format!("invalid path data: {e}")))
}

/// Total length of SVG path data, rounded up to a whole user unit.
///
/// This is the dash length used by the declarative back-ends: rounding up guarantees that a
/// `L 0` dash array covers the whole path.
pub fn path_length(d: &str) -> StrokesResult<f64> {
    Ok(ArcLengthPath::new(&parse_path(d)?).total().ceil())
}

#[derive(Clone, Copy, Debug)]
struct MeasuredSegment {
    seg: PathSeg,
    length: f64,
    starts_subpath: bool,
}

/// A path measured once so partial reveals can be cut from it cheaply.
///
/// `leading(f)` returns the part of the path a dash of length `f * total` would show, which is
/// how the raster back-end draws the stroke that is currently being written.
#[derive(Clone, Debug)]
pub struct ArcLengthPath {
    path: BezPath,
    segments: Vec<MeasuredSegment>,
    total: f64,
}

impl ArcLengthPath {
    /// Measure every segment of `path`.
    pub fn new(path: &BezPath) -> Self {
        let mut segments = Vec::new();
        let mut total = 0.0;
        let mut pen: Option<Point> = None;
        for seg in path.segments() {
            let start = seg.start();
            let starts_subpath = pen.is_none_or(|p| p != start);
            let length = seg.arclen(ARCLEN_ACCURACY);
            total += length;
            pen = Some(seg.end());
            segments.push(MeasuredSegment {
                seg,
                length,
                starts_subpath,
            });
        }
        Self {
            path: path.clone(),
            segments,
            total,
        }
    }

    /// Exact (unrounded) length of the path.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Where drawing starts.
    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(|m| m.seg.start())
    }

    /// The untrimmed path.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Sub-path covering the first `fraction` of the length (clamped to `[0, 1]`).
    pub fn leading(&self, fraction: f64) -> BezPath {
        if fraction.is_nan() || fraction <= 0.0 || self.segments.is_empty() {
            return BezPath::new();
        }
        if fraction >= 1.0 {
            return self.path.clone();
        }

        let mut out = BezPath::new();
        let mut remaining = self.total * fraction;
        for m in &self.segments {
            if remaining <= 0.0 {
                break;
            }
            let seg = if m.length <= remaining {
                m.seg
            } else {
                let t = m.seg.inv_arclen(remaining, ARCLEN_ACCURACY);
                m.seg.subsegment(0.0..t)
            };
            if m.starts_subpath || out.elements().is_empty() {
                out.move_to(seg.start());
            }
            out.push(seg.as_path_el());
            remaining -= m.length;
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
