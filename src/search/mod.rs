//! Search engine: scopes, text filtering, debouncing and the engine actor.
//!
//! Inputs (query text and scope) flow into a single engine task. After the
//! input stream has been quiet for the configured period the task recomputes
//! the filtered results and suggestions and publishes an immutable
//! [`Snapshot`].

pub mod debounce;
pub mod engine;
pub mod filter;
pub mod scope;

pub use debounce::Debouncer;
pub use engine::{EngineSettings, SearchEngine, Snapshot};
pub use filter::filter_items;
pub use scope::{SearchScope, available_scopes};
