use crate::{ListEffect, ListMsg, ListingState};

/// Pure update function: applies a message to listing state and returns any
/// effects.
///
/// At most one page fetch may be outstanding: `LoadMoreRequested` while a
/// fetch is in flight is a no-op, not queued, so pages are always fetched and
/// merged strictly in cursor order. Completion messages tagged with a
/// superseded epoch belong to an abandoned listing instance and are dropped
/// without touching state.
pub fn update_list(mut state: ListingState, msg: ListMsg) -> (ListingState, Vec<ListEffect>) {
    let effects = match msg {
        ListMsg::LoadMoreRequested => {
            if state.is_fetching() {
                return (state, Vec::new());
            }
            let Some(cursor) = state.cursor().cloned() else {
                // End of list; "no more pages" is not an error.
                return (state, Vec::new());
            };
            state.begin_fetch();
            vec![ListEffect::FetchPage {
                epoch: state.epoch(),
                cursor,
            }]
        }
        ListMsg::PageLoaded { epoch, page } => {
            if epoch != state.epoch() {
                return (state, Vec::new());
            }
            state.merge_page(page);
            Vec::new()
        }
        ListMsg::LoadFailed { epoch, failure } => {
            if epoch != state.epoch() {
                return (state, Vec::new());
            }
            state.fail_fetch(failure);
            Vec::new()
        }
    };

    (state, effects)
}
