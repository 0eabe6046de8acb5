use std::str::FromStr;

use kurbo::Affine;

use crate::foundation::error::{StrokesError, StrokesResult};

/// Resolve an SVG `transform` attribute into a single affine matrix.
///
/// Composite lists (`scale(1, -1) translate(0, -900)`) are multiplied left to right, as SVG
/// does. An empty descriptor yields the identity.
pub fn transform_matrix(transform: &str) -> StrokesResult<Affine> {
    let transform = transform.trim();
    if transform.is_empty() {
        return Ok(Affine::IDENTITY);
    }
    let ts = svgtypes::Transform::from_str(transform)
        .map_err(|e| StrokesError::geometry(format!("invalid transform \"{transform}\": {e}")))?;
    let coeffs = [ts.a, ts.b, ts.c, ts.d, ts.e, ts.f];
    if coeffs.iter().any(|c| !c.is_finite()) {
        return Err(StrokesError::geometry(format!(
            "transform \"{transform}\" is not finite"
        )));
    }
    Ok(Affine::new(coeffs))
}
