use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::DocId;

/// Closed, immutable set of loaded documents. Ids are assigned
/// sequentially from 1 in the order documents are handed in; both the
/// id -> path and path -> id directions are bijective for the lifetime
/// of the store.
#[derive(Debug, Default)]
pub struct DocumentStore {
    texts: HashMap<DocId, String>,
    paths: HashMap<DocId, PathBuf>,
    ids: HashMap<PathBuf, DocId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub num_docs: usize,
    pub total_bytes: u64,
}

impl DocumentStore {
    /// Consume loaded (path, text) pairs and assign document ids.
    /// A path appearing twice keeps its first id; the later text is
    /// dropped so the path <-> id mapping stays bijective.
    pub fn from_documents(documents: Vec<(PathBuf, String)>) -> Self {
        let mut store = Self::default();
        let mut next_id: DocId = 1;
        for (path, text) in documents {
            if store.ids.contains_key(&path) {
                tracing::warn!(path = %path.display(), "duplicate document path, keeping first");
                continue;
            }
            let doc_id = next_id;
            next_id += 1;
            store.ids.insert(path.clone(), doc_id);
            store.paths.insert(doc_id, path);
            store.texts.insert(doc_id, text);
        }
        store
    }

    pub fn doc_id(&self, path: &Path) -> Option<DocId> {
        self.ids.get(path).copied()
    }

    pub fn doc_path(&self, doc_id: DocId) -> Option<&Path> {
        self.paths.get(&doc_id).map(PathBuf::as_path)
    }

    pub fn content(&self, doc_id: DocId) -> Option<&str> {
        self.texts.get(&doc_id).map(String::as_str)
    }

    /// Iterate over (id, text) pairs. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (DocId, &str)> {
        self.texts.iter().map(|(id, text)| (*id, text.as_str()))
    }

    /// The full id universe, the base set for query negation.
    pub fn doc_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.texts.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            num_docs: self.texts.len(),
            total_bytes: self.texts.values().map(|t| t.len() as u64).sum(),
        }
    }
}
