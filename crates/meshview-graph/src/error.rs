use meshview_core::Identifier;
use thiserror::Error;

/// Why a lookup produced no relationship view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No child or parent of the key resolves to a known descriptor.
    #[error("MeSH ID not found: {key}")]
    NotFound { key: Identifier },

    /// The key has resolvable relatives but no metadata of its own.
    #[error("MeSH ID {key} has relatives but no descriptor metadata")]
    MissingMetadata { key: Identifier },
}

