use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use waypost_core::{
    update_detail, update_list, DetailMsg, DetailState, Epoch, ListMsg, ListingState,
};
use waypost_engine::{
    fetch_seed_page_blocking, ContentSource, ReqwestContentSource, SourceError, SourceEvent,
    SourceSettings,
};
use waypost_logging::{wp_info, wp_warn};

use crate::effects::EffectRunner;
use crate::render;

const EVENT_DEADLINE: Duration = Duration::from_secs(60);

pub fn run() -> anyhow::Result<()> {
    let settings = settings_from_env();
    wp_info!("Using content source at {}", settings.base_url);
    let source: Arc<dyn ContentSource> = Arc::new(
        ReqwestContentSource::new(settings).context("building content source client")?,
    );

    let mut next_epoch = 1u64;
    let mut state = initialize_listing(source.as_ref(), Epoch(next_epoch))?;
    let runner = EffectRunner::new(source.clone());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", render::render_listing(&state.view()));
        print!("waypost> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("more"), None) => state = load_more(state, &runner),
            (Some("open"), Some(id)) => show_detail(&state, &runner, id),
            (Some("reload"), None) => {
                // A fresh epoch supersedes any fetch still in flight for the
                // old listing instance.
                next_epoch += 1;
                state = initialize_listing(source.as_ref(), Epoch(next_epoch))?;
            }
            (Some("quit"), None) | (Some("q"), None) => break,
            (None, _) => {}
            _ => println!("Commands: more | open <id> | reload | quit"),
        }
    }
    Ok(())
}

fn settings_from_env() -> SourceSettings {
    let mut settings = SourceSettings::default();
    if let Ok(base_url) = std::env::var("WAYPOST_BASE_URL") {
        settings.base_url = base_url;
    }
    if let Ok(content_type) = std::env::var("WAYPOST_CONTENT_TYPE") {
        settings.content_type = content_type;
    }
    if let Ok(page_size) = std::env::var("WAYPOST_PAGE_SIZE") {
        match page_size.parse() {
            Ok(value) => settings.page_size = value,
            Err(_) => wp_warn!("Ignoring unparseable WAYPOST_PAGE_SIZE: {}", page_size),
        }
    }
    settings
}

fn initialize_listing(source: &dyn ContentSource, epoch: Epoch) -> anyhow::Result<ListingState> {
    let seed = fetch_seed_page_blocking(source).context("fetching seed page")?;
    Ok(ListingState::initialize(epoch, seed))
}

fn load_more(state: ListingState, runner: &EffectRunner) -> ListingState {
    let state = drain_pending(state, runner);
    let (mut state, effects) = update_list(state, ListMsg::LoadMoreRequested);
    if effects.is_empty() {
        return state;
    }
    runner.run_list_effects(effects);

    // This driver blocks on the single outstanding fetch; a UI shell would
    // keep handling input here and dispatch the completion when it arrives.
    while state.is_fetching() {
        match runner.wait_event(EVENT_DEADLINE) {
            Some(SourceEvent::PageFetched { epoch, result }) => {
                let msg = match result {
                    Ok(page) => ListMsg::PageLoaded { epoch, page },
                    Err(failure) => {
                        wp_warn!("Page load failed: {}", failure);
                        ListMsg::LoadFailed { epoch, failure }
                    }
                };
                let (next, _effects) = update_list(state, msg);
                state = next;
            }
            Some(other) => {
                wp_warn!("Ignoring unexpected engine event: {:?}", other);
            }
            None => {
                wp_warn!("No fetch completion within {:?}", EVENT_DEADLINE);
                break;
            }
        }
    }
    state
}

/// Apply completions that arrived while nobody was waiting, e.g. a fetch
/// issued by a listing instance that `reload` has since superseded. The epoch
/// guard in `update_list` drops those.
fn drain_pending(mut state: ListingState, runner: &EffectRunner) -> ListingState {
    while let Some(event) = runner.poll_event() {
        if let SourceEvent::PageFetched { epoch, result } = event {
            let msg = match result {
                Ok(page) => ListMsg::PageLoaded { epoch, page },
                Err(failure) => ListMsg::LoadFailed { epoch, failure },
            };
            let (next, _effects) = update_list(state, msg);
            state = next;
        }
    }
    state
}

fn show_detail(listing: &ListingState, runner: &EffectRunner, id: &str) {
    let prebuilt = listing.articles().iter().find(|article| article.id == id);
    let state = match prebuilt {
        Some(article) => DetailState::prebuilt(article.clone()),
        None => {
            let (state, effects) = DetailState::resolving(id);
            // Interim placeholder while resolution is pending.
            print!("{}", render::render_detail(&state));
            runner.run_detail_effects(effects);
            resolve_detail(state, runner)
        }
    };
    print!("{}", render::render_detail(&state));
}

fn resolve_detail(mut state: DetailState, runner: &EffectRunner) -> DetailState {
    while matches!(state, DetailState::Resolving) {
        match runner.wait_event(EVENT_DEADLINE) {
            Some(SourceEvent::ArticleFetched { id, result }) => {
                let msg = match result {
                    Ok(article) => DetailMsg::ArticleResolved(article),
                    Err(SourceError::NotFound) => DetailMsg::ArticleMissing,
                    Err(err) => {
                        // Transport failure is not "not found": leave the
                        // placeholder so `open` can be retried.
                        wp_warn!("Resolving article {} failed: {}", id, err);
                        return state;
                    }
                };
                state = update_detail(state, msg);
            }
            Some(other) => {
                wp_warn!("Ignoring unexpected engine event: {:?}", other);
            }
            None => {
                wp_warn!("No resolution within {:?}", EVENT_DEADLINE);
                return state;
            }
        }
    }
    state
}
