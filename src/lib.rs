//! searchable - in-memory list search with scopes, debouncing and
//! short-query suggestions.
//!
//! The crate is split along the data flow:
//! [`catalog`] supplies items, [`search`] filters them behind a debounced
//! engine task, [`suggestions`] builds short-query hints, and [`view`]
//! adapts the engine's snapshots for a UI. [`cli`] is a terminal front-end
//! over the same pieces.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod suggestions;
pub mod test_utils;
pub mod view;

pub use error::{Result, SearchableError};
