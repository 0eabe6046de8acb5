use std::collections::HashMap;
use std::path::Path;

use anyhow::Context as _;

use crate::character::model::Character;
use crate::foundation::error::{StrokesError, StrokesResult};
use crate::source::loader::StrokeLoader;

/// Characters held in memory under one source id.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    id: String,
    characters: HashMap<u32, Character>,
}

impl StaticSource {
    /// Empty source named `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            characters: HashMap::new(),
        }
    }

    /// Add a character; its `source` is rewritten to this source's id.
    pub fn with_character(mut self, mut character: Character) -> Self {
        character.source = self.id.clone();
        self.characters.insert(character.code_point, character);
        self
    }

    /// Source built from a JSON array of characters.
    pub fn from_json(id: impl Into<String>, json: &str) -> StrokesResult<Self> {
        let id = id.into();
        let characters: Vec<Character> = serde_json::from_str(json)
            .map_err(|e| StrokesError::source(id.clone(), format!("invalid character data: {e}")))?;
        Ok(characters
            .into_iter()
            .fold(Self::new(id), Self::with_character))
    }

    /// Source built from a JSON file.
    pub fn from_json_file(id: impl Into<String>, path: &Path) -> StrokesResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read character data '{}'", path.display()))?;
        Self::from_json(id, &text)
    }

    /// Number of characters held.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether no character is held.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

#[async_trait::async_trait]
impl StrokeLoader for StaticSource {
    fn id(&self) -> &str {
        &self.id
    }

    async fn load(&self, code_point: u32) -> StrokesResult<Character> {
        self.characters.get(&code_point).cloned().ok_or_else(|| {
            StrokesError::source(
                self.id.as_str(),
                format!("no stroke data for U+{code_point:04X}"),
            )
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/static_source.rs"]
mod tests;
