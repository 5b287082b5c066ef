use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::index::InvertedIndex;

/// Export the index as a flat text file, one line per term:
/// `term : [docId, docId, ...]`. Write-only reporting format, there is
/// no corresponding loader.
pub fn save_index(index: &InvertedIndex, destination: &Path) -> Result<()> {
    let file = File::create(destination)
        .with_context(|| format!("creating index file {}", destination.display()))?;
    let mut writer = BufWriter::new(file);
    for (term, postings) in index.iter() {
        let ids: Vec<String> = postings.iter().map(|id| id.to_string()).collect();
        writeln!(writer, "{} : [{}]", term, ids.join(", "))
            .with_context(|| format!("writing index file {}", destination.display()))?;
    }
    writer.flush().context("flushing index file")?;
    tracing::info!(destination = %destination.display(), num_terms = index.len(), "index saved");
    Ok(())
}
