use crate::foundation::error::{StrokesError, StrokesResult};

/// Code point of a string holding exactly one Unicode scalar value.
pub fn code_point_of(text: &str) -> StrokesResult<u32> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(u32::from(c)),
        _ => Err(StrokesError::validation(
            "character",
            format!("must be a single character, got \"{text}\""),
        )),
    }
}
