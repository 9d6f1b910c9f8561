//! Core vocabulary structure.
//!
//! The Vocabulary holds the hierarchy and metadata maps and performs
//! relationship lookups against them. It's the structure every request
//! handler reads from.

use crate::error::LookupError;
use meshview_core::{
    Entry, Hierarchy, Identifier, MetadataTable, NodeMetadata, RelationshipView, VocabularyData,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// An immutable controlled vocabulary.
#[derive(Debug, Default, Clone)]
pub struct Vocabulary {
    /// Identifier to ordered child identifiers.
    children: Hierarchy,

    /// Identifier to ordered parent identifiers.
    parents: Hierarchy,

    /// Identifier to descriptor name and scope note.
    metadata: MetadataTable,
}

impl Vocabulary {
    pub fn new(children: Hierarchy, parents: Hierarchy, metadata: MetadataTable) -> Self {
        Self {
            children,
            parents,
            metadata,
        }
    }

    /// Builds a vocabulary from freshly loaded data files.
    pub fn from_data(data: VocabularyData) -> Self {
        Self::new(data.children, data.parents, data.metadata)
    }

    /// Child identifiers of `id`, in source order. Empty when unknown.
    pub fn children_of(&self, id: &str) -> &[Identifier] {
        self.children.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Parent identifiers of `id`, in source order. Empty when unknown.
    pub fn parents_of(&self, id: &str) -> &[Identifier] {
        self.parents.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Metadata for `id`, if the vocabulary describes it.
    pub fn metadata(&self, id: &str) -> Option<&NodeMetadata> {
        self.metadata.get(id)
    }

    /// Whether `id` has descriptor metadata.
    pub fn contains(&self, id: &str) -> bool {
        self.metadata.contains_key(id)
    }

    /// The enriched entry for `id`, if it has metadata.
    pub fn entry(&self, id: &str) -> Option<Entry> {
        self.metadata(id).map(|meta| Entry::from_metadata(id, meta))
    }

    /// Resolves `key` into its central entry plus immediate children and parents.
    ///
    /// Relatives without metadata are skipped. Order and duplicates from the
    /// hierarchy are kept as-is. If nothing on either side resolves, the key
    /// is reported as not found, even when it has metadata of its own.
    pub fn resolve(&self, key: &str) -> Result<RelationshipView, LookupError> {
        let children = self.enrich(self.children_of(key));
        let parents = self.enrich(self.parents_of(key));

        debug!(
            "Resolved {}: {} children, {} parents",
            key,
            children.len(),
            parents.len()
        );

        if children.is_empty() && parents.is_empty() {
            return Err(LookupError::NotFound {
                key: key.to_string(),
            });
        }

        let central = self
            .entry(key)
            .ok_or_else(|| LookupError::MissingMetadata {
                key: key.to_string(),
            })?;

        Ok(RelationshipView {
            central: vec![central],
            children,
            parents,
        })
    }

    fn enrich(&self, ids: &[Identifier]) -> Vec<Entry> {
        ids.iter().filter_map(|id| self.entry(id)).collect()
    }

    /// Returns the number of described identifiers.
    pub fn node_count(&self) -> usize {
        self.metadata.len()
    }
}

/// Vocabulary statistics for the status command and stats endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyStats {
    /// Identifiers with metadata.
    pub nodes: usize,
    /// Total entries across all children-of lists.
    pub child_links: usize,
    /// Total entries across all parents-of lists.
    pub parent_links: usize,
    /// Distinct identifiers referenced by either hierarchy but lacking metadata.
    pub dangling_ids: usize,
}

impl Vocabulary {
    /// Returns vocabulary statistics.
    pub fn stats(&self) -> VocabularyStats {
        let referenced: HashSet<&str> = self
            .children
            .iter()
            .chain(self.parents.iter())
            .flat_map(|(key, related)| {
                std::iter::once(key.as_str()).chain(related.iter().map(String::as_str))
            })
            .collect();

        VocabularyStats {
            nodes: self.node_count(),
            child_links: self.children.values().map(Vec::len).sum(),
            parent_links: self.parents.values().map(Vec::len).sum(),
            dangling_ids: referenced
                .into_iter()
                .filter(|id| !self.contains(id))
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn meta(name: &str, note: &str) -> NodeMetadata {
        NodeMetadata::new(name, note)
    }

    fn hierarchy(rows: &[(&str, &[&str])]) -> Hierarchy {
        rows.iter()
            .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
            .collect()
    }

    fn root_and_child() -> Vocabulary {
        let mut metadata = HashMap::new();
        metadata.insert("D1".to_string(), meta("Root", "Top node"));
        metadata.insert("D2".to_string(), meta("Child", "Leaf node"));
        Vocabulary::new(hierarchy(&[("D1", &["D2"])]), Hierarchy::new(), metadata)
    }

    #[test]
    fn test_resolve_root_with_child() {
        let vocab = root_and_child();
        let view = vocab.resolve("D1").unwrap();

        assert_eq!(
            view.central,
            vec![Entry {
                id: "D1".into(),
                label: "Root".into(),
                scopenote: "Top node".into()
            }]
        );
        assert_eq!(
            view.children,
            vec![Entry {
                id: "D2".into(),
                label: "Child".into(),
                scopenote: "Leaf node".into()
            }]
        );
        assert!(view.parents.is_empty());
    }

    #[test]
    fn test_unknown_key_is_not_found() {
        let vocab = root_and_child();
        assert_eq!(
            vocab.resolve("UNKNOWN").unwrap_err(),
            LookupError::NotFound {
                key: "UNKNOWN".into()
            }
        );
    }

    #[test]
    fn test_leaf_without_parents_entry_is_not_found() {
        // D2 has metadata but appears as a key in neither hierarchy.
        let vocab = root_and_child();
        assert!(matches!(
            vocab.resolve("D2"),
            Err(LookupError::NotFound { .. })
        ));
    }

    #[test]
    fn test_children_keep_source_order() {
        let mut metadata = HashMap::new();
        metadata.insert("P".to_string(), meta("Parent", ""));
        for id in ["C3", "C1", "C2"] {
            metadata.insert(id.to_string(), meta(id, ""));
        }
        let vocab = Vocabulary::new(
            hierarchy(&[("P", &["C3", "C1", "C2"])]),
            Hierarchy::new(),
            metadata,
        );

        let ids: Vec<_> = vocab
            .resolve("P")
            .unwrap()
            .children
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["C3", "C1", "C2"]);
    }

    #[test]
    fn test_unresolvable_relatives_are_skipped() {
        let mut metadata = HashMap::new();
        metadata.insert("P".to_string(), meta("Parent", ""));
        metadata.insert("C1".to_string(), meta("One", ""));
        let vocab = Vocabulary::new(
            hierarchy(&[("P", &["C1", "C2"])]),
            Hierarchy::new(),
            metadata,
        );

        let view = vocab.resolve("P").unwrap();
        assert_eq!(view.children.len(), 1);
        assert_eq!(view.children[0].id, "C1");
    }

    #[test]
    fn test_fully_unresolvable_relatives_is_not_found() {
        let mut metadata = HashMap::new();
        metadata.insert("P".to_string(), meta("Parent", ""));
        let vocab = Vocabulary::new(
            hierarchy(&[("P", &["GONE1", "GONE2"])]),
            hierarchy(&[("P", &["GONE3"])]),
            metadata,
        );

        assert!(matches!(
            vocab.resolve("P"),
            Err(LookupError::NotFound { .. })
        ));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut metadata = HashMap::new();
        metadata.insert("P".to_string(), meta("Parent", ""));
        metadata.insert("C".to_string(), meta("Child", ""));
        let vocab = Vocabulary::new(
            hierarchy(&[("P", &["C", "C"])]),
            Hierarchy::new(),
            metadata,
        );

        assert_eq!(vocab.resolve("P").unwrap().children.len(), 2);
    }

    #[test]
    fn test_missing_central_metadata() {
        let mut metadata = HashMap::new();
        metadata.insert("C".to_string(), meta("Child", ""));
        let vocab = Vocabulary::new(hierarchy(&[("P", &["C"])]), Hierarchy::new(), metadata);

        assert_eq!(
            vocab.resolve("P").unwrap_err(),
            LookupError::MissingMetadata { key: "P".into() }
        );
    }

    #[test]
    fn test_parents_only() {
        let mut metadata = HashMap::new();
        metadata.insert("C".to_string(), meta("Child", ""));
        metadata.insert("P".to_string(), meta("Parent", "Above"));
        let vocab = Vocabulary::new(Hierarchy::new(), hierarchy(&[("C", &["P"])]), metadata);

        let view = vocab.resolve("C").unwrap();
        assert_eq!(view.central[0].id, "C");
        assert!(view.children.is_empty());
        assert_eq!(view.parents[0].label, "Parent");
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let vocab = root_and_child();
        let first = serde_json::to_string(&vocab.resolve("D1").unwrap()).unwrap();
        let second = serde_json::to_string(&vocab.resolve("D1").unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_typed_lookups() {
        let vocab = root_and_child();
        assert_eq!(vocab.children_of("D1"), ["D2".to_string()]);
        assert!(vocab.children_of("D2").is_empty());
        assert!(vocab.parents_of("D1").is_empty());
        assert!(vocab.metadata("nope").is_none());
        assert!(vocab.contains("D2"));
    }

    #[test]
    fn test_stats_counts_dangling_ids() {
        let mut metadata = HashMap::new();
        metadata.insert("A".to_string(), meta("A", ""));
        metadata.insert("B".to_string(), meta("B", ""));
        let vocab = Vocabulary::new(
            hierarchy(&[("A", &["B", "X"]), ("Y", &["A"])]),
            hierarchy(&[("B", &["A"]), ("X", &["A"])]),
            metadata,
        );

        let stats = vocab.stats();
        assert_eq!(stats.nodes, 2);
        assert_eq!(stats.child_links, 3);
        assert_eq!(stats.parent_links, 2);
        assert_eq!(stats.dangling_ids, 2);
    }
}
