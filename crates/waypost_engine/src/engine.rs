use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use waypost_core::{Article, ArticlePage, Cursor, Epoch, LoadFailure};

use crate::adapter;
use crate::source::ContentSource;
use crate::types::SourceError;

enum SourceCommand {
    FetchPage { epoch: Epoch, cursor: Cursor },
    FetchArticle { id: String },
}

/// Completion events, already normalized into core types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEvent {
    PageFetched {
        epoch: Epoch,
        result: Result<ArticlePage, LoadFailure>,
    },
    ArticleFetched {
        id: String,
        result: Result<Article, SourceError>,
    },
}

/// Bridge between the synchronous core and the async content source.
///
/// A dedicated thread owns a tokio runtime and spawns one task per command;
/// completion events come back over a channel the driver polls. Fetches are
/// normalized engine-side so events carry core-ready pages and articles.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<SourceCommand>,
    event_rx: mpsc::Receiver<SourceEvent>,
}

impl EngineHandle {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch_page(&self, epoch: Epoch, cursor: Cursor) {
        let _ = self.cmd_tx.send(SourceCommand::FetchPage { epoch, cursor });
    }

    pub fn fetch_article(&self, id: impl Into<String>) {
        let _ = self
            .cmd_tx
            .send(SourceCommand::FetchArticle { id: id.into() });
    }

    pub fn try_recv(&self) -> Option<SourceEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocking receive with a deadline, for drivers (and tests) that wait
    /// for the next completion rather than polling.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<SourceEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    source: &dyn ContentSource,
    command: SourceCommand,
    event_tx: mpsc::Sender<SourceEvent>,
) {
    match command {
        SourceCommand::FetchPage { epoch, cursor } => {
            let result = source
                .query_by_cursor(&cursor)
                .await
                .map(adapter::normalize_page)
                .map_err(LoadFailure::from);
            let _ = event_tx.send(SourceEvent::PageFetched { epoch, result });
        }
        SourceCommand::FetchArticle { id } => {
            let result = source
                .query_by_id(&id)
                .await
                .and_then(adapter::normalize_entity);
            let _ = event_tx.send(SourceEvent::ArticleFetched { id, result });
        }
    }
}
