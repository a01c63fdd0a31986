use std::sync::Arc;
use std::time::Duration;

use waypost_core::{DetailEffect, ListEffect};
use waypost_engine::{ContentSource, EngineHandle, SourceEvent};
use waypost_logging::wp_info;

/// Executes core effects against the engine and hands completions back.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            engine: EngineHandle::new(source),
        }
    }

    pub fn run_list_effects(&self, effects: Vec<ListEffect>) {
        for effect in effects {
            match effect {
                ListEffect::FetchPage { epoch, cursor } => {
                    wp_info!(
                        "FetchPage epoch={} cursor={}",
                        epoch.0,
                        cursor.as_str()
                    );
                    self.engine.fetch_page(epoch, cursor);
                }
            }
        }
    }

    pub fn run_detail_effects(&self, effects: Vec<DetailEffect>) {
        for effect in effects {
            match effect {
                DetailEffect::FetchArticle { id } => {
                    wp_info!("FetchArticle id={}", id);
                    self.engine.fetch_article(id);
                }
            }
        }
    }

    /// Wait for the next completion event from the engine.
    pub fn wait_event(&self, timeout: Duration) -> Option<SourceEvent> {
        self.engine.recv_timeout(timeout)
    }

    /// Non-blocking poll for a completion that already arrived.
    pub fn poll_event(&self) -> Option<SourceEvent> {
        self.engine.try_recv()
    }
}
