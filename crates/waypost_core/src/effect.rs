use crate::{Cursor, Epoch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEffect {
    /// Fetch the page at `cursor` on behalf of listing instance `epoch`.
    FetchPage { epoch: Epoch, cursor: Cursor },
}
