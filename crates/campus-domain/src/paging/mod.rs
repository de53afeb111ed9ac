//! Paged list state over a remote collection.
//!
//! [`PagingCollection`] exposes one-indexed pages regardless of how the
//! backend numbers them, keeps the sort and filter selection, and reports
//! page changes through a broadcast channel.

pub mod collection;
pub mod events;
pub mod fields;
pub mod query;
pub mod sort;

pub use collection::PagingCollection;
pub use events::PagingEvent;
pub use fields::{FieldMetadata, FieldRegistry};
pub use query::QueryOptions;
pub use sort::SortDirection;
