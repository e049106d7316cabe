//! wiregraph-core: Shared types, configuration, and error handling for wiregraph.
//!
//! This crate provides the foundational types used across all wiregraph crates:
//! - Component and connection records of a piping/wiring graph
//! - Component references and graph selectors as typed by users
//! - Configuration management
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{SelectorStrategy, WiregraphConfig};
pub use error::WiregraphError;
pub use types::{
    Component, ComponentId, ComponentRef, Connection, GraphSelector, ReferenceInput, SessionId,
    WireId,
};
