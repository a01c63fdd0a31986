//! Waypost core: pure listing/detail state machines and view-model helpers.
mod detail;
mod effect;
mod model;
mod msg;
mod reading_time;
mod state;
mod update;
mod view_model;

pub use detail::{update_detail, DetailEffect, DetailMsg, DetailState};
pub use effect::ListEffect;
pub use model::{Article, ArticlePage, BannerImage, ContentBlock, Cursor, Epoch, Paragraph};
pub use msg::{ListMsg, LoadFailure};
pub use reading_time::{estimate, ReadingEstimate, WORDS_PER_MINUTE};
pub use state::ListingState;
pub use update::update_list;
pub use view_model::{ArticleRowView, ListingView};
