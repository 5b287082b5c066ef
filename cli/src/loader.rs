use anyhow::{bail, Context, Result};
use findex_core::DocumentStore;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Load every regular file directly under `dir` as a UTF-8 document.
/// Subdirectories are skipped. An unreadable or non-UTF-8 file is fatal
/// here, before index construction, never during queries.
pub fn load_documents(dir: &Path) -> Result<DocumentStore> {
    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }
    let mut documents: Vec<(PathBuf, String)> = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("reading directory {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading {} (documents must be valid UTF-8)", path.display()))?;
        documents.push((path, text));
    }
    // sorted so id assignment is stable across runs
    documents.sort_by(|a, b| a.0.cmp(&b.0));
    tracing::info!(num_docs = documents.len(), dir = %dir.display(), "documents extracted");
    Ok(DocumentStore::from_documents(documents))
}
