//! Meshview Graph - Vocabulary relationship lookup
//!
//! This crate holds the vocabulary hierarchy in memory and answers the
//! one question Meshview exists for: given an identifier, what are its
//! immediate parents and children, with labels attached?
//!
//! # Architecture
//!
//! A [`Vocabulary`] owns three read-only maps:
//! - children-of: identifier to ordered child identifiers
//! - parents-of: identifier to ordered parent identifiers
//! - metadata: identifier to descriptor name and scope note
//!
//! There is no mutation API once a vocabulary is built, so it can be
//! shared across request handlers behind a plain `Arc`.
//!
//! # Example
//!
//! ```
//! use meshview_core::NodeMetadata;
//! use meshview_graph::VocabularyBuilder;
//!
//! let mut builder = VocabularyBuilder::new();
//! builder.add_node("D1", NodeMetadata::new("Root", "Top node"));
//! builder.add_node("D2", NodeMetadata::new("Child", "Leaf node"));
//! builder.link("D1", "D2");
//! let vocab = builder.build();
//!
//! let view = vocab.resolve("D1").unwrap();
//! assert_eq!(view.children[0].id, "D2");
//! ```

mod builder;
mod error;
mod vocabulary;

pub use builder::VocabularyBuilder;
pub use error::LookupError;
pub use vocabulary::{Vocabulary, VocabularyStats};
