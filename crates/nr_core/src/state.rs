use crate::error::LoadError;
use crate::types::Article;
use crate::views::ArticleStore;

/// What the page is showing. Settles once, from `Loading` only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
    #[default]
    Loading,
    Error(String),
    Loaded(ArticleStore),
}

impl DisplayState {
    pub fn from_result(result: std::result::Result<Vec<Article>, LoadError>) -> Self {
        let mut state = Self::Loading;
        state.resolve(result);
        state
    }

    /// Settles a `Loading` state with the outcome of a load.
    ///
    /// Returns `false` and leaves the state alone when it has already settled.
    pub fn resolve(&mut self, result: std::result::Result<Vec<Article>, LoadError>) -> bool {
        if !self.is_loading() {
            tracing::warn!("🔒 Ignoring load result, display state already settled");
            return false;
        }
        *self = match result {
            Ok(articles) => Self::Loaded(ArticleStore::new(articles)),
            Err(e) => Self::Error(e.to_string()),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn store(&self) -> Option<&ArticleStore> {
        match self {
            Self::Loaded(store) => Some(store),
            _ => None,
        }
    }
}
