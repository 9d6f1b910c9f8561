//! Vocabulary builder for assembling a vocabulary piece by piece.
//!
//! Loading from data files goes through `Vocabulary::from_data`; the
//! builder covers embedders and tests that construct a hierarchy in code.

use crate::vocabulary::Vocabulary;
use meshview_core::{Hierarchy, Identifier, MetadataTable, NodeMetadata};

/// Builds a Vocabulary from individual nodes and links.
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    children: Hierarchy,
    parents: Hierarchy,
    metadata: MetadataTable,
}

impl VocabularyBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Describes an identifier. A later call for the same id replaces it.
    pub fn add_node(&mut self, id: impl Into<Identifier>, metadata: NodeMetadata) -> &mut Self {
        self.metadata.insert(id.into(), metadata);
        self
    }

    /// Appends `child` to the children-of list of `id` only.
    pub fn add_child(
        &mut self,
        id: impl Into<Identifier>,
        child: impl Into<Identifier>,
    ) -> &mut Self {
        self.children.entry(id.into()).or_default().push(child.into());
        self
    }

    /// Appends `parent` to the parents-of list of `id` only.
    pub fn add_parent(
        &mut self,
        id: impl Into<Identifier>,
        parent: impl Into<Identifier>,
    ) -> &mut Self {
        self.parents.entry(id.into()).or_default().push(parent.into());
        self
    }

    /// Records a parent/child link in both directions.
    pub fn link(
        &mut self,
        parent: impl Into<Identifier>,
        child: impl Into<Identifier>,
    ) -> &mut Self {
        let parent = parent.into();
        let child = child.into();
        self.add_child(parent.clone(), child.clone());
        self.add_parent(child, parent)
    }

    /// Finishes the build.
    pub fn build(self) -> Vocabulary {
        Vocabulary::new(self.children, self.parents, self.metadata)
    }
}
