//! wiregraph-catalog: read-only access to graph snapshots on disk.
//!
//! Every snapshot read goes through this crate. It lists the snapshot
//! directory, turns a user-typed graph selector ("graph 1", "Graph_1", 2,
//! "gasolio.json") into exactly one file, and parses that file as JSON.

pub mod catalog;
pub mod selector;

pub use catalog::{CatalogError, GraphCatalog, GraphEntry, Result};
