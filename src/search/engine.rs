//! The search engine actor and its handle.
//!
//! All engine state is owned by one tokio task. Handles send it commands over
//! an unbounded channel and read immutable snapshots from a watch channel,
//! so readers only ever see the result of a complete recomputation.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, error, info, warn};

use crate::catalog::{Item, ItemStore};
use crate::config::SearchConfig;
use crate::error::{Result, SearchableError};
use crate::suggestions::{DEFAULT_SHORT_QUERY_THRESHOLD, Suggester};

use super::debounce::{DEFAULT_QUIET_PERIOD, Debouncer};
use super::filter::filter_items;
use super::scope::{SearchScope, available_scopes};

/// Tunables for a running engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    /// Input must be idle this long before results are recomputed.
    pub quiet_period: Duration,
    /// Suggestions are offered while the query is shorter than this many
    /// characters.
    pub short_query_threshold: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            quiet_period: DEFAULT_QUIET_PERIOD,
            short_query_threshold: DEFAULT_SHORT_QUERY_THRESHOLD,
        }
    }
}

impl From<&SearchConfig> for EngineSettings {
    fn from(config: &SearchConfig) -> Self {
        Self {
            quiet_period: Duration::from_millis(config.debounce_ms),
            short_query_threshold: config.short_query_threshold,
        }
    }
}

/// Consistent view of the engine after a recomputation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub all_items: Vec<Item>,
    pub available_scopes: Vec<SearchScope>,
    pub query: String,
    pub scope: SearchScope,
    pub filtered_items: Vec<Item>,
    pub text_suggestions: Vec<String>,
    pub item_suggestions: Vec<Item>,
    /// Number of recomputations so far.
    pub revision: u64,
    /// Sequence number of the last settled input folded into this snapshot.
    #[serde(skip)]
    pub input_seq: u64,
}

impl Snapshot {
    #[must_use]
    pub const fn is_searching(&self) -> bool {
        !self.query.is_empty()
    }

    /// What a list should show: the filtered results while searching,
    /// otherwise the whole catalog.
    #[must_use]
    pub fn displayed_items(&self) -> &[Item] {
        if self.is_searching() {
            &self.filtered_items
        } else {
            &self.all_items
        }
    }
}

#[derive(Debug)]
enum Command {
    SetQuery { text: String, seq: u64 },
    SetScope { scope: SearchScope, seq: u64 },
    ReplaceCatalog { items: Vec<Item>, ack: oneshot::Sender<()> },
}

/// Handle to a running search engine.
///
/// Cheap to clone; the engine task stops once every handle is dropped.
pub struct SearchEngine<S> {
    store: Arc<S>,
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Arc<Snapshot>>,
    input_seq: Arc<AtomicU64>,
    settings: EngineSettings,
}

impl<S> Clone for SearchEngine<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            commands: self.commands.clone(),
            snapshots: self.snapshots.clone(),
            input_seq: Arc::clone(&self.input_seq),
            settings: self.settings,
        }
    }
}

impl<S: ItemStore + 'static> SearchEngine<S> {
    /// Start the engine task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn(store: S, settings: EngineSettings) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(Arc::new(Snapshot {
            available_scopes: vec![SearchScope::All],
            ..Snapshot::default()
        }));

        let task = EngineTask::new(command_rx, snapshot_tx, settings);
        tokio::spawn(task.run());

        debug!(
            quiet_ms = settings.quiet_period.as_millis(),
            threshold = settings.short_query_threshold,
            "search engine started"
        );

        Self {
            store: Arc::new(store),
            commands: command_tx,
            snapshots: snapshot_rx,
            input_seq: Arc::new(AtomicU64::new(0)),
            settings,
        }
    }
}

impl<S: ItemStore> SearchEngine<S> {
    /// Fetch the catalog from the store and install it.
    ///
    /// The store is awaited on the caller's task; the engine only sees the
    /// finished result. A failed load is logged and leaves the previous
    /// catalog in place.
    pub async fn load(&self) {
        if let Err(err) = self.try_load().await {
            error!(error = %err, "catalog load failed; keeping previous items");
        }
    }

    /// Like [`load`](Self::load) but hands the failure back to the caller.
    /// Returns the number of items installed.
    pub async fn try_load(&self) -> Result<usize> {
        let items = self.store.load_all().await?;
        let count = items.len();

        let (ack, applied) = oneshot::channel();
        self.send(Command::ReplaceCatalog { items, ack })?;
        applied.await.map_err(|_| SearchableError::EngineClosed)?;

        info!(items = count, "catalog loaded");
        Ok(count)
    }

    /// Replace the query text. Results follow after the quiet period.
    pub fn set_query(&self, text: impl Into<String>) {
        let seq = self.next_seq();
        self.send(Command::SetQuery {
            text: text.into(),
            seq,
        })
        .ok();
    }

    /// Replace the active scope. Results follow after the quiet period.
    pub fn set_scope(&self, scope: SearchScope) {
        let seq = self.next_seq();
        self.send(Command::SetScope { scope, seq }).ok();
    }
}

impl<S> SearchEngine<S> {
    fn next_seq(&self) -> u64 {
        self.input_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn send(&self, command: Command) -> Result<()> {
        self.commands.send(command).map_err(|_| {
            warn!("search engine is no longer running; input dropped");
            SearchableError::EngineClosed
        })
    }

    #[must_use]
    pub const fn settings(&self) -> EngineSettings {
        self.settings
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&*self.snapshots.borrow())
    }

    /// Receiver that wakes on every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.snapshots.clone()
    }

    /// True once every input sent so far is reflected in the snapshot.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.snapshots.borrow().input_seq >= self.input_seq.load(Ordering::SeqCst)
    }

    /// Wait until every input sent so far has been folded into a snapshot.
    pub async fn settled(&self) -> Arc<Snapshot> {
        let target = self.input_seq.load(Ordering::SeqCst);
        let mut receiver = self.snapshots.clone();
        match receiver.wait_for(|snapshot| snapshot.input_seq >= target).await {
            Ok(snapshot) => Arc::clone(&*snapshot),
            Err(_) => self.snapshot(),
        }
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.snapshots.borrow().is_searching()
    }

    #[must_use]
    pub fn all_items(&self) -> Vec<Item> {
        self.snapshots.borrow().all_items.clone()
    }

    #[must_use]
    pub fn filtered_items(&self) -> Vec<Item> {
        self.snapshots.borrow().filtered_items.clone()
    }

    #[must_use]
    pub fn text_suggestions(&self) -> Vec<String> {
        self.snapshots.borrow().text_suggestions.clone()
    }

    #[must_use]
    pub fn item_suggestions(&self) -> Vec<Item> {
        self.snapshots.borrow().item_suggestions.clone()
    }

    #[must_use]
    pub fn available_scopes(&self) -> Vec<SearchScope> {
        self.snapshots.borrow().available_scopes.clone()
    }

    #[must_use]
    pub fn query(&self) -> String {
        self.snapshots.borrow().query.clone()
    }

    #[must_use]
    pub fn scope(&self) -> SearchScope {
        self.snapshots.borrow().scope
    }
}

/// Query and scope as a pair, tagged with the last input sequence folded in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Inputs {
    query: String,
    scope: SearchScope,
    seq: u64,
}

#[derive(Debug, Default)]
struct EngineState {
    all_items: Vec<Item>,
    available_scopes: Vec<SearchScope>,
    /// Latest input, still inside its quiet period while the debouncer is
    /// pending.
    pending: Inputs,
    /// Input that has been quiet long enough; every snapshot derives from it.
    settled: Inputs,
    revision: u64,
}

enum Wakeup {
    Command(Option<Command>),
    QuietPeriodElapsed,
}

struct EngineTask {
    commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<Arc<Snapshot>>,
    debouncer: Debouncer,
    suggester: Suggester,
    state: EngineState,
}

impl EngineTask {
    fn new(
        commands: mpsc::UnboundedReceiver<Command>,
        snapshots: watch::Sender<Arc<Snapshot>>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            commands,
            snapshots,
            debouncer: Debouncer::new(settings.quiet_period),
            suggester: Suggester::new(settings.short_query_threshold),
            state: EngineState::default(),
        }
    }

    async fn run(mut self) {
        loop {
            let wakeup = tokio::select! {
                biased;
                command = self.commands.recv() => Wakeup::Command(command),
                () = self.debouncer.fired() => Wakeup::QuietPeriodElapsed,
            };
            match wakeup {
                Wakeup::Command(Some(command)) => self.apply(command),
                Wakeup::Command(None) => break,
                Wakeup::QuietPeriodElapsed => self.settle(),
            }
        }
        debug!("search engine stopped");
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::SetQuery { text, seq } => {
                self.state.pending.query = text;
                self.note_input(seq);
            }
            Command::SetScope { scope, seq } => {
                self.state.pending.scope = scope;
                self.note_input(seq);
            }
            Command::ReplaceCatalog { items, ack } => {
                self.state.available_scopes = available_scopes(&items);
                self.state.all_items = items;
                // Pending input keeps its own deadline.
                self.recompute();
                ack.send(()).ok();
            }
        }
    }

    fn note_input(&mut self, seq: u64) {
        // Handles on other threads may enqueue out of order.
        self.state.pending.seq = self.state.pending.seq.max(seq);
        self.debouncer.schedule();
    }

    fn settle(&mut self) {
        let state = &mut self.state;
        if state.pending.query.is_empty() {
            state.pending.scope = SearchScope::All;
        }
        state.settled = state.pending.clone();
        self.recompute();
    }

    fn recompute(&mut self) {
        let state = &mut self.state;
        let inputs = &state.settled;

        let filtered_items = filter_items(&state.all_items, &inputs.query, inputs.scope);
        let text_suggestions = self.suggester.text_suggestions(&inputs.query);
        let item_suggestions = self
            .suggester
            .item_suggestions(&inputs.query, &state.all_items);
        state.revision += 1;

        debug!(
            query = %inputs.query,
            scope = %inputs.scope,
            matches = filtered_items.len(),
            revision = state.revision,
            "recomputed search results"
        );

        let available_scopes = if state.available_scopes.is_empty() {
            vec![SearchScope::All]
        } else {
            state.available_scopes.clone()
        };

        self.snapshots.send_replace(Arc::new(Snapshot {
            all_items: state.all_items.clone(),
            available_scopes,
            query: inputs.query.clone(),
            scope: inputs.scope,
            filtered_items,
            text_suggestions,
            item_suggestions,
            revision: state.revision,
            input_seq: inputs.seq,
        }));
    }
}
