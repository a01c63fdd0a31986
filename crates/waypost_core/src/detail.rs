use crate::Article;

/// Resolution state of one article detail view.
///
/// `Resolved` and `NotFound` are terminal. While `Resolving`, the consumer
/// renders a placeholder and must not read article fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Resolving,
    Resolved(Article),
    NotFound,
}

impl DetailState {
    /// Start directly resolved from build-time data.
    pub fn prebuilt(article: Article) -> Self {
        Self::Resolved(article)
    }

    /// Lazy path: the identifier was not part of the statically built set,
    /// so resolution begins on demand.
    pub fn resolving(id: impl Into<String>) -> (Self, Vec<DetailEffect>) {
        (
            Self::Resolving,
            vec![DetailEffect::FetchArticle { id: id.into() }],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailMsg {
    /// The source resolved the requested identifier.
    ArticleResolved(Article),
    /// The source reports the identifier does not exist.
    ArticleMissing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEffect {
    FetchArticle { id: String },
}

/// Pure transition function for the detail state machine.
///
/// Only `Resolving` transitions; late messages arriving in a terminal state
/// are ignored.
pub fn update_detail(state: DetailState, msg: DetailMsg) -> DetailState {
    match (state, msg) {
        (DetailState::Resolving, DetailMsg::ArticleResolved(article)) => {
            DetailState::Resolved(article)
        }
        (DetailState::Resolving, DetailMsg::ArticleMissing) => DetailState::NotFound,
        (state, _) => state,
    }
}
