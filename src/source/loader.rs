use crate::character::model::Character;
use crate::foundation::error::StrokesResult;

/// Supplier of stroke geometry for one source.
///
/// Failures are attributed to the source through [`crate::StrokesError::Source`].
#[async_trait::async_trait]
pub trait StrokeLoader: Send + Sync {
    /// Source identifier (`zh`, `ja`, ...).
    fn id(&self) -> &str;

    /// Load the character with `code_point`.
    async fn load(&self, code_point: u32) -> StrokesResult<Character>;
}
