//! Catalog fixtures and scripted stores for engine tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::catalog::{Category, Item, ItemStore, LoadError, StaticCatalog};

/// The five-item restaurant catalog, one item per category.
#[must_use]
pub fn sample_items() -> Vec<Item> {
    StaticCatalog::items()
}

/// A larger catalog with several items per category, for scale tests.
#[must_use]
pub fn generated_items(per_category: usize) -> Vec<Item> {
    let mut items = Vec::with_capacity(per_category * Category::ALL.len());
    for index in 0..per_category {
        for category in Category::ALL {
            let id = items.len() + 1;
            items.push(Item::new(
                id.to_string(),
                format!("{} dish {index}", category.title()),
                category,
            ));
        }
    }
    items
}

/// Store that returns a fixed list, optionally after a delay, and counts
/// how often it was asked.
#[derive(Debug, Clone)]
pub struct FixedStore {
    items: Vec<Item>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl FixedStore {
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Shared counter; clone it before handing the store to an engine.
    #[must_use]
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl ItemStore for FixedStore {
    async fn load_all(&self) -> Result<Vec<Item>, LoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.items.clone())
    }
}

/// Store that fails its first `failures` loads, then returns `items`.
#[derive(Debug, Clone)]
pub struct FlakyStore {
    items: Vec<Item>,
    failures: usize,
    attempts: Arc<AtomicUsize>,
}

impl FlakyStore {
    #[must_use]
    pub fn new(items: Vec<Item>, failures: usize) -> Self {
        Self {
            items,
            failures,
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Store that never succeeds.
    #[must_use]
    pub fn always_failing() -> Self {
        Self::new(Vec::new(), usize::MAX)
    }
}

impl ItemStore for FlakyStore {
    async fn load_all(&self) -> Result<Vec<Item>, LoadError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failures {
            return Err(LoadError::Unavailable(format!(
                "scripted failure on attempt {}",
                attempt + 1
            )));
        }
        Ok(self.items.clone())
    }
}
