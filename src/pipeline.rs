// src/pipeline.rs
use crate::config::SearchConfig;
use crate::presenter::HostView;
use crate::searchlibs::{KeywordEncoder, RecordNormalizer, RequestBuilder, SearchError, SnackRecord};
use crate::store::ResultStore;
use crate::web::SearchEngine;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Encoding,
    Requesting,
    Decoding,
    Updated,
    Failed,
}

/// How a single run ended.
#[derive(Debug)]
pub enum RunOutcome {
    Updated { count: usize },
    Failed(SearchError),
    /// Decoded fine, but a run submitted later had already been applied.
    Discarded,
}

struct LatestRun {
    sequence: u64,
    state: RunState,
}

/// Drives keyword -> request -> fetch -> normalize -> store.
///
/// Every submission gets a sequence number when it is made. Runs are never
/// cancelled; a run's records are applied only if no later submission has
/// been applied first.
pub struct SearchPipeline<E> {
    engine: E,
    builder: RequestBuilder,
    store: Arc<ResultStore>,
    view: Arc<dyn HostView>,
    next_sequence: AtomicU64,
    latest: Mutex<LatestRun>,
}

impl<E: SearchEngine> SearchPipeline<E> {
    pub fn new(
        engine: E,
        config: &SearchConfig,
        store: Arc<ResultStore>,
        view: Arc<dyn HostView>,
    ) -> Self {
        Self {
            engine,
            builder: RequestBuilder::new(config),
            store,
            view,
            next_sequence: AtomicU64::new(1),
            latest: Mutex::new(LatestRun {
                sequence: 0,
                state: RunState::Idle,
            }),
        }
    }

    pub fn store(&self) -> &Arc<ResultStore> {
        &self.store
    }

    /// State of the most recently submitted run.
    pub fn state(&self) -> RunState {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .state
    }

    /// Starts a run in the background and returns immediately.
    pub fn on_search_submitted(self: &Arc<Self>, keyword: impl Into<String>) -> JoinHandle<RunOutcome>
    where
        E: 'static,
    {
        let sequence = self.begin();
        let keyword = keyword.into();
        let pipeline = Arc::clone(self);

        tokio::spawn(async move { pipeline.execute(sequence, &keyword).await })
    }

    /// Runs a search to completion on the current task.
    pub async fn run(&self, keyword: &str) -> RunOutcome {
        let sequence = self.begin();
        self.execute(sequence, keyword).await
    }

    fn begin(&self) -> u64 {
        let sequence = self.next_sequence.fetch_add(1, Ordering::SeqCst);
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        if sequence > latest.sequence {
            latest.sequence = sequence;
            latest.state = RunState::Idle;
        }
        sequence
    }

    fn transition(&self, sequence: u64, state: RunState) {
        debug!("search #{} -> {:?}", sequence, state);
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        if latest.sequence == sequence {
            latest.state = state;
        }
    }

    async fn execute(&self, sequence: u64, keyword: &str) -> RunOutcome {
        let records = match self.fetch_records(sequence, keyword).await {
            Ok(records) => records,
            Err(e) => {
                self.transition(sequence, RunState::Failed);
                match e {
                    SearchError::Encoding(_) => {
                        debug!("search #{} skipped ({}): {}", sequence, e.kind(), e)
                    }
                    _ => warn!("search #{} failed ({}): {}", sequence, e.kind(), e),
                }
                return RunOutcome::Failed(e);
            }
        };

        let count = records.len();
        if !self.store.replace_if_newer(sequence, records) {
            info!(
                "search #{} for {:?} finished after a newer search was shown, discarding",
                sequence, keyword
            );
            return RunOutcome::Discarded;
        }

        self.transition(sequence, RunState::Updated);
        self.view.notify_data_changed();
        RunOutcome::Updated { count }
    }

    async fn fetch_records(&self, sequence: u64, keyword: &str) -> Result<Vec<SnackRecord>, SearchError> {
        self.transition(sequence, RunState::Encoding);
        let encoded = KeywordEncoder::encode(keyword)?;

        self.transition(sequence, RunState::Requesting);
        let request = self.builder.build(&encoded)?;
        debug!("search #{} GET {}", sequence, request.url());
        let payload = self.engine.search(&request).await?;

        self.transition(sequence, RunState::Decoding);
        let records = RecordNormalizer::normalize(&payload)?;

        Ok(records)
    }
}
