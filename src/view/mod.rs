//! Presentation adapter between the search engine and a UI layer.
//!
//! Exposes the engine's derived state as read-only views, forwards input,
//! and routes row selection to a UI-supplied handler. Holds no business
//! logic of its own.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

use crate::catalog::{Item, ItemStore};
use crate::config::ViewConfig;
use crate::search::{SearchEngine, SearchScope, Snapshot};

/// One list row as a UI renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub id: String,
    pub title: String,
    pub subtitle: String,
}

impl From<&Item> for Row {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            subtitle: item.category.title(),
        }
    }
}

/// Entry in the scope picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeOption {
    pub scope: SearchScope,
    pub title: String,
}

type SelectHandler = Arc<dyn Fn(&Item) + Send + Sync>;

pub struct SearchView<S> {
    engine: SearchEngine<S>,
    on_select: SelectHandler,
    title: String,
    prompt: String,
}

impl<S> fmt::Debug for SearchView<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchView")
            .field("title", &self.title)
            .field("prompt", &self.prompt)
            .finish_non_exhaustive()
    }
}

impl<S> SearchView<S> {
    #[must_use]
    pub fn new(engine: SearchEngine<S>, config: &ViewConfig) -> Self {
        Self {
            engine,
            on_select: Arc::new(|_: &Item| {}),
            title: config.title.clone(),
            prompt: config.prompt.clone(),
        }
    }

    /// Install the handler invoked when the user picks an item.
    #[must_use]
    pub fn on_select(mut self, handler: impl Fn(&Item) + Send + Sync + 'static) -> Self {
        self.on_select = Arc::new(handler);
        self
    }

    #[must_use]
    pub const fn engine(&self) -> &SearchEngine<S> {
        &self.engine
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.engine.snapshot()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.engine.subscribe()
    }

    pub async fn settled(&self) -> Arc<Snapshot> {
        self.engine.settled().await
    }

    #[must_use]
    pub fn all_items(&self) -> Vec<Item> {
        self.engine.all_items()
    }

    #[must_use]
    pub fn filtered_items(&self) -> Vec<Item> {
        self.engine.filtered_items()
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.engine.is_searching()
    }

    #[must_use]
    pub fn available_scopes(&self) -> Vec<SearchScope> {
        self.engine.available_scopes()
    }

    #[must_use]
    pub fn text_suggestions(&self) -> Vec<String> {
        self.engine.text_suggestions()
    }

    #[must_use]
    pub fn item_suggestions(&self) -> Vec<Item> {
        self.engine.item_suggestions()
    }

    /// Rows for the list: search results while searching, else everything.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        self.snapshot()
            .displayed_items()
            .iter()
            .map(Row::from)
            .collect()
    }

    #[must_use]
    pub fn scope_options(&self) -> Vec<ScopeOption> {
        self.available_scopes()
            .into_iter()
            .map(|scope| ScopeOption {
                scope,
                title: scope.title(),
            })
            .collect()
    }

    /// Route a pick to the UI's handler.
    pub fn select(&self, item: &Item) {
        debug!(id = %item.id, title = %item.title, "item selected");
        (self.on_select)(item);
    }

    /// Pick the displayed row at `index`, if there is one.
    pub fn select_row(&self, index: usize) -> Option<Item> {
        let snapshot = self.snapshot();
        let item = snapshot.displayed_items().get(index)?.clone();
        self.select(&item);
        Some(item)
    }
}

impl<S: ItemStore> SearchView<S> {
    /// Load the catalog when the view first shows.
    pub async fn appear(&self) {
        self.engine.load().await;
    }

    pub fn set_query(&self, text: impl Into<String>) {
        self.engine.set_query(text);
    }

    pub fn set_scope(&self, scope: SearchScope) {
        self.engine.set_scope(scope);
    }

    /// Accepting a text suggestion completes the query with it.
    pub fn accept_suggestion(&self, suggestion: &str) {
        self.engine.set_query(suggestion);
    }
}
