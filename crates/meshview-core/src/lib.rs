//! Meshview Core - Vocabulary data model
//!
//! This crate defines the records that flow through Meshview: the
//! descriptive metadata attached to each vocabulary identifier, the
//! enriched [`Entry`] handed to clients, and the [`RelationshipView`]
//! returned for a single lookup.
//!
//! It also knows how to read the three backing JSON files (children,
//! parents, node metadata) from disk.
//!
//! # Example
//!
//! ```no_run
//! use meshview_core::{load_all, DataPaths};
//!
//! let data = load_all(&DataPaths::in_dir("data")).unwrap();
//! println!("{} descriptors", data.metadata.len());
//! ```

mod error;
mod loader;
mod node;

pub use error::{LoadError, Result};
pub use loader::{
    load_all, load_hierarchy, load_metadata, DataPaths, VocabularyData, CHILDREN_FILE,
    METADATA_FILE, PARENTS_FILE,
};
pub use node::{Entry, Hierarchy, Identifier, MetadataTable, NodeMetadata, RelationshipView};
