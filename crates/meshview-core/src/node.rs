//! Vocabulary records.
//!
//! `NodeMetadata` is what the data files store for each identifier.
//! `Entry` is what clients see: the identifier plus its label and
//! scope note, under the key names the HTTP contract fixes.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// An opaque vocabulary identifier, e.g. a MeSH descriptor ID like "D009369".
pub type Identifier = String;

/// Identifier to ordered list of related identifiers (children or parents).
pub type Hierarchy = HashMap<Identifier, Vec<Identifier>>;

/// Identifier to its descriptive metadata.
pub type MetadataTable = HashMap<Identifier, NodeMetadata>;

/// Descriptive metadata for a single identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMetadata {
    /// Human-readable descriptor name.
    pub descriptor_name: String,

    /// Free-text note describing the descriptor's scope.
    /// Absent or null in the source data reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub scope_note: String,
}

impl NodeMetadata {
    pub fn new(descriptor_name: impl Into<String>, scope_note: impl Into<String>) -> Self {
        Self {
            descriptor_name: descriptor_name.into(),
            scope_note: scope_note.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// An identifier enriched with its label and scope note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Identifier,
    pub label: String,
    pub scopenote: String,
}

impl Entry {
    /// Builds an entry from an identifier and its metadata.
    pub fn from_metadata(id: impl Into<Identifier>, metadata: &NodeMetadata) -> Self {
        Self {
            id: id.into(),
            label: metadata.descriptor_name.clone(),
            scopenote: metadata.scope_note.clone(),
        }
    }
}

/// The response for one lookup: the entry itself plus its
/// immediate children and parents.
///
/// `central` is always a single-element list; it stays a list because
/// that is the shape clients consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipView {
    pub central: Vec<Entry>,
    pub children: Vec<Entry>,
    pub parents: Vec<Entry>,
}
