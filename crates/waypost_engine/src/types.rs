use serde::Deserialize;
use thiserror::Error;
use waypost_core::LoadFailure;

/// One page of a query-by-type response as the content repository sends it.
///
/// `next_page` is a fully-qualified fetchable URL; the engine requests it
/// verbatim and never constructs or parses it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQueryResponse {
    #[serde(default)]
    pub results: Vec<RawEntity>,
    #[serde(default)]
    pub next_page: Option<String>,
}

/// A source-side article record before normalization.
///
/// Every field is optional at the wire level; the adapter decides which
/// absences are hard errors and which get defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntity {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub data: RawEntityData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntityData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub banner: Option<RawBanner>,
    #[serde(default)]
    pub content: Vec<RawContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBanner {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawContentBlock {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub body: Vec<RawParagraph>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawParagraph {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// A required field is absent; fatal for that single entity only.
    #[error("entity {id:?} is missing required field `{field}`")]
    MalformedEntity {
        id: Option<String>,
        field: &'static str,
    },
    /// The source reports the identifier does not exist.
    #[error("document not found")]
    NotFound,
    #[error("http status {status}")]
    Http { status: u16 },
    #[error("request timed out")]
    Timeout,
    #[error("network error: {message}")]
    Network { message: String },
    #[error("malformed response: {message}")]
    MalformedResponse { message: String },
}

/// Strip the engine error down to the plain transport failure the core
/// carries in listing state.
impl From<SourceError> for LoadFailure {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Timeout => LoadFailure::Timeout,
            SourceError::Http { status } => LoadFailure::Http { status },
            SourceError::Network { message } => LoadFailure::Network { message },
            other => LoadFailure::MalformedResponse {
                message: other.to_string(),
            },
        }
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> SourceError {
    if err.is_timeout() {
        return SourceError::Timeout;
    }
    if err.is_decode() {
        return SourceError::MalformedResponse {
            message: err.to_string(),
        };
    }
    SourceError::Network {
        message: err.to_string(),
    }
}
