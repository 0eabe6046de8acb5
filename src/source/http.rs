use crate::character::model::Character;
use crate::foundation::error::{StrokesError, StrokesResult};
use crate::source::animcjk::{AnimCjkGroup, parse_animcjk};
use crate::source::config::SourcesConfig;
use crate::source::ja::{self, SOURCE_JA, parse_kanjivg};
use crate::source::loader::StrokeLoader;
use crate::source::zh::{self, SOURCE_ZH, parse_hanzi_writer};

/// Data set an [`HttpSource`] reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// hanzi-writer-data.
    Zh,
    /// KanjiVG.
    Ja,
    /// AnimCJK, one character set.
    AnimCjk(AnimCjkGroup),
}

impl SourceKind {
    /// Every HTTP source kind, in registry order.
    pub fn all() -> Vec<SourceKind> {
        let mut kinds = vec![Self::Zh, Self::Ja];
        kinds.extend(AnimCjkGroup::ALL.into_iter().map(Self::AnimCjk));
        kinds
    }

    /// Source id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Zh => SOURCE_ZH,
            Self::Ja => SOURCE_JA,
            Self::AnimCjk(group) => group.source_id(),
        }
    }

    fn path_for(self, code_point: u32) -> StrokesResult<String> {
        match self {
            Self::Zh => zh::path_for(code_point),
            Self::Ja => Ok(ja::path_for(code_point)),
            Self::AnimCjk(group) => Ok(group.path_for(code_point)),
        }
    }

    /// Parse a response body into a character.
    pub fn parse(self, code_point: u32, body: &str) -> StrokesResult<Character> {
        let id = self.id();
        match self {
            Self::Zh => parse_hanzi_writer(id, code_point, body),
            Self::Ja => parse_kanjivg(id, code_point, body),
            Self::AnimCjk(_) => parse_animcjk(id, code_point, body),
        }
    }
}

/// Loader fetching stroke data from a CDN.
///
/// Any non-2xx response is a failure of this source; nothing is retried.
#[derive(Clone, Debug)]
pub struct HttpSource {
    kind: SourceKind,
    config: SourcesConfig,
    client: reqwest::Client,
}

impl HttpSource {
    /// Build a source sharing `client`.
    pub fn new(kind: SourceKind, config: SourcesConfig, client: reqwest::Client) -> Self {
        Self {
            kind,
            config,
            client,
        }
    }

    /// HTTP client configured from `config`.
    pub fn client(config: &SourcesConfig) -> StrokesResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| StrokesError::Other(anyhow::Error::new(e).context("build http client")))
    }

    /// Data set this source reads.
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Full URL of the data for `code_point`.
    pub fn url_for(&self, code_point: u32) -> StrokesResult<String> {
        Ok(self.config.url(&self.kind.path_for(code_point)?))
    }

    async fn fetch(&self, url: &str) -> StrokesResult<String> {
        let id = self.kind.id();
        let response = self
            .client
            .get(url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| StrokesError::source(id, format!("request failed: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(StrokesError::source(
                id,
                format!("Unexpected HTTP response status code {}.", status.as_u16()),
            ));
        }
        response
            .text()
            .await
            .map_err(|e| StrokesError::source(id, format!("cannot read response body: {e}")))
    }
}

#[async_trait::async_trait]
impl StrokeLoader for HttpSource {
    fn id(&self) -> &str {
        self.kind.id()
    }

    #[tracing::instrument(skip(self), fields(source = self.kind.id()))]
    async fn load(&self, code_point: u32) -> StrokesResult<Character> {
        let url = self.url_for(code_point)?;
        tracing::debug!(%url, "fetching stroke data");
        let body = self.fetch(&url).await?;
        self.kind.parse(code_point, &body)
    }
}
