//! Item catalog: the data model and the stores that supply it.
//!
//! The catalog is small and fully materialized in memory. A store hands the
//! whole collection over in one asynchronous call.

pub mod model;
pub mod store;

pub use model::{Category, Item, capitalize_words};
pub use store::{ItemStore, LoadError, StaticCatalog};
