//! Item stores: the asynchronous source of the full catalog.

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;

use super::model::{Category, Item};

/// Failure to produce the catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
    #[error("catalog rejected: {0}")]
    Invalid(String),
}

/// Supplies the full item collection in one call.
///
/// Implementations may take arbitrarily long; callers await them off the
/// engine's processing context.
pub trait ItemStore: Send + Sync {
    fn load_all(&self) -> impl Future<Output = Result<Vec<Item>, LoadError>> + Send;
}

impl<S: ItemStore> ItemStore for Arc<S> {
    fn load_all(&self) -> impl Future<Output = Result<Vec<Item>, LoadError>> + Send {
        self.as_ref().load_all()
    }
}

/// The fixed restaurant catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The catalog contents, in display order.
    #[must_use]
    pub fn items() -> Vec<Item> {
        vec![
            Item::new("1", "Khinkali", Category::Georgian),
            Item::new("2", "Syrniki", Category::Russian),
            Item::new("3", "Lasania", Category::Italian),
            Item::new("4", "Ratatouille", Category::French),
            Item::new("5", "Ramen", Category::Japanese),
        ]
    }
}

impl ItemStore for StaticCatalog {
    async fn load_all(&self) -> Result<Vec<Item>, LoadError> {
        let items = Self::items();
        validate_unique_ids(&items)?;
        Ok(items)
    }
}

/// Reject catalogs that reuse an id.
pub fn validate_unique_ids(items: &[Item]) -> Result<(), LoadError> {
    let mut seen = std::collections::HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(LoadError::Invalid(format!("duplicate item id {}", item.id)));
        }
    }
    Ok(())
}
