use std::collections::BTreeMap;
use std::sync::Arc;

use crate::foundation::error::{StrokesError, StrokesResult};
use crate::render::format::Format;
use crate::source::config::SourcesConfig;
use crate::source::http::{HttpSource, SourceKind};
use crate::source::loader::StrokeLoader;

/// The formats and sources available to a session.
///
/// Built once at startup and passed down; nothing is registered globally.
#[derive(Clone, Default)]
pub struct Registry {
    sources: BTreeMap<String, Arc<dyn StrokeLoader>>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("sources", &self.sources.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Registry {
    /// Registry without sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every HTTP source, sharing one client.
    pub fn with_default_sources(config: &SourcesConfig) -> StrokesResult<Self> {
        let client = HttpSource::client(config)?;
        Ok(SourceKind::all().into_iter().fold(Self::new(), |registry, kind| {
            registry.with_source(Arc::new(HttpSource::new(
                kind,
                config.clone(),
                client.clone(),
            )))
        }))
    }

    /// Register `loader` under its id, replacing any loader with the same id.
    pub fn with_source(mut self, loader: Arc<dyn StrokeLoader>) -> Self {
        self.sources.insert(loader.id().to_owned(), loader);
        self
    }

    /// Supported formats.
    pub fn formats(&self) -> &'static [Format] {
        &Format::ALL
    }

    /// Registered source ids, sorted.
    pub fn sources(&self) -> Vec<&str> {
        self.sources.keys().map(String::as_str).collect()
    }

    /// Loader registered as `id`.
    pub fn source(&self, id: &str) -> StrokesResult<Arc<dyn StrokeLoader>> {
        self.sources
            .get(id)
            .cloned()
            .ok_or_else(|| StrokesError::unsupported_source(id))
    }

    /// Format named `id`.
    pub fn format(&self, id: &str) -> StrokesResult<Format> {
        id.parse()
    }
}
