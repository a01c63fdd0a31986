//! Waypost engine: content-source I/O and entity normalization.
mod adapter;
mod engine;
mod seed;
mod source;
mod types;

pub use adapter::{normalize_entity, normalize_page};
pub use engine::{EngineHandle, SourceEvent};
pub use seed::{fetch_seed_page, fetch_seed_page_blocking};
pub use source::{ContentSource, ReqwestContentSource, SourceSettings};
pub use types::{
    RawBanner, RawContentBlock, RawEntity, RawEntityData, RawParagraph, RawQueryResponse,
    SourceError,
};
