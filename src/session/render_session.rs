use std::sync::Arc;

use crate::animation::options::AnimationOptions;
use crate::character::code_point::code_point_of;
use crate::character::model::Character;
use crate::foundation::error::StrokesResult;
use crate::foundation::ids::IdAllocator;
use crate::render::format::{Format, animator_for};
use crate::render::handle::AnimationHandle;
use crate::session::registry::Registry;
use crate::source::loader::StrokeLoader;

/// Turn a loaded character into a running animation.
///
/// This is the synchronous core of every render: validate the geometry, dispatch to the
/// format's strategy, wrap the surface in a handle.
#[tracing::instrument(skip(character, options, ids), fields(code_point = character.code_point, source = %character.source))]
pub fn render_character(
    character: &Character,
    format: Format,
    options: &AnimationOptions,
    ids: &IdAllocator,
) -> StrokesResult<AnimationHandle> {
    character.validate()?;
    let surface = animator_for(format).animate(character, options, ids)?;
    AnimationHandle::new(character, format, options, surface)
}

/// A registry plus the id allocator shared by every render it performs.
#[derive(Debug)]
pub struct RenderSession {
    registry: Arc<Registry>,
    ids: Arc<IdAllocator>,
}

impl RenderSession {
    /// Session with a fresh id allocator.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self::with_ids(registry, IdAllocator::new())
    }

    /// Session using `ids` (a fixed tag makes output reproducible).
    pub fn with_ids(registry: Arc<Registry>, ids: IdAllocator) -> Self {
        Self {
            registry,
            ids: Arc::new(ids),
        }
    }

    /// The registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The id allocator.
    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    /// Resolve a renderer for `source` and `format`.
    ///
    /// Unknown identifiers fail here, before anything is fetched.
    pub fn renderer(
        &self,
        source: &str,
        format: &str,
        options: AnimationOptions,
    ) -> StrokesResult<CharacterRenderer> {
        let format = self.registry.format(format)?;
        let loader = self.registry.source(source)?;
        Ok(CharacterRenderer {
            loader,
            format,
            options,
            ids: Arc::clone(&self.ids),
        })
    }
}

/// A resolved `(source, format, options)` triple, ready to render characters.
#[derive(Clone)]
pub struct CharacterRenderer {
    loader: Arc<dyn StrokeLoader>,
    format: Format,
    options: AnimationOptions,
    ids: Arc<IdAllocator>,
}

impl std::fmt::Debug for CharacterRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterRenderer")
            .field("source", &self.loader.id())
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl CharacterRenderer {
    /// Source id.
    pub fn source(&self) -> &str {
        self.loader.id()
    }

    /// Output format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Load `text` (exactly one character) and animate it.
    #[tracing::instrument(skip(self), fields(source = self.loader.id(), format = %self.format))]
    pub async fn render(&self, text: &str) -> StrokesResult<AnimationHandle> {
        let code_point = code_point_of(text)?;
        let character = self.loader.load(code_point).await?;
        render_character(&character, self.format, &self.options, &self.ids)
    }
}

/// Result of one `(character, source)` render inside [`render_all`].
#[derive(Debug)]
pub struct RenderOutcome {
    /// The requested character.
    pub text: String,
    /// Source id.
    pub source: String,
    /// The animation, or why this pair failed.
    pub result: StrokesResult<AnimationHandle>,
}

/// Render every character of `text` from every source in `sources`.
///
/// Renderers are resolved first, so an unknown format or source fails before any fetch. The
/// renders then run concurrently; each outcome carries its own result and a failing pair never
/// affects its siblings. Outcomes are ordered by character, then by source.
#[tracing::instrument(skip(session, options))]
pub async fn render_all(
    session: &RenderSession,
    text: &str,
    sources: &[&str],
    format: &str,
    options: &AnimationOptions,
) -> StrokesResult<Vec<RenderOutcome>> {
    let renderers = sources
        .iter()
        .map(|source| session.renderer(source, format, options.clone()))
        .collect::<StrokesResult<Vec<_>>>()?;

    let jobs = text.chars().flat_map(|c| {
        renderers.iter().map(move |renderer| async move {
            let text = c.to_string();
            let result = renderer.render(&text).await;
            if let Err(e) = &result {
                tracing::warn!(character = %text, source = renderer.source(), error = %e, "render failed");
            }
            RenderOutcome {
                text,
                source: renderer.source().to_owned(),
                result,
            }
        })
    });
    Ok(futures::future::join_all(jobs).await)
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;
