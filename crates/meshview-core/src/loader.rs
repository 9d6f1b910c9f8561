//! Loading the backing data files.
//!
//! Three JSON objects make up a vocabulary: children-of, parents-of and
//! node metadata. They are read once at startup and never touched again.

use crate::error::{LoadError, Result};
use crate::node::{Hierarchy, MetadataTable};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Default file name for the children-of mapping.
pub const CHILDREN_FILE: &str = "children.json";

/// Default file name for the parents-of mapping.
pub const PARENTS_FILE: &str = "parents.json";

/// Default file name for the node metadata mapping.
pub const METADATA_FILE: &str = "node_data.json";

/// Locations of the three data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub children: PathBuf,
    pub parents: PathBuf,
    pub metadata: PathBuf,
}

impl DataPaths {
    /// Uses the default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            children: dir.join(CHILDREN_FILE),
            parents: dir.join(PARENTS_FILE),
            metadata: dir.join(METADATA_FILE),
        }
    }

    pub fn with_children(mut self, path: impl Into<PathBuf>) -> Self {
        self.children = path.into();
        self
    }

    pub fn with_parents(mut self, path: impl Into<PathBuf>) -> Self {
        self.parents = path.into();
        self
    }

    pub fn with_metadata(mut self, path: impl Into<PathBuf>) -> Self {
        self.metadata = path.into();
        self
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

/// The raw contents of the three data files.
#[derive(Debug, Default)]
pub struct VocabularyData {
    pub children: Hierarchy,
    pub parents: Hierarchy,
    pub metadata: MetadataTable,
}

/// Reads a children-of or parents-of mapping.
pub fn load_hierarchy(path: &Path) -> Result<Hierarchy> {
    let start = Instant::now();
    let hierarchy: Hierarchy = read_json(path)?;
    info!(
        "Loaded {} hierarchy rows from {} in {}ms",
        hierarchy.len(),
        path.display(),
        start.elapsed().as_millis()
    );
    Ok(hierarchy)
}

/// Reads the node metadata mapping.
pub fn load_metadata(path: &Path) -> Result<MetadataTable> {
    let start = Instant::now();
    let metadata: MetadataTable = read_json(path)?;
    info!(
        "Loaded {} descriptors from {} in {}ms",
        metadata.len(),
        path.display(),
        start.elapsed().as_millis()
    );
    Ok(metadata)
}

/// Reads all three files. Fails on the first file that cannot be read.
pub fn load_all(paths: &DataPaths) -> Result<VocabularyData> {
    Ok(VocabularyData {
        children: load_hierarchy(&paths.children)?,
        parents: load_hierarchy(&paths.parents)?,
        metadata: load_metadata(&paths.metadata)?,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("Reading {}", path.display());

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
