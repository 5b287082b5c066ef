use serde::Serialize;
use std::collections::HashMap;

use crate::config::TermLimits;
use crate::store::DocumentStore;
use crate::tokenizer::tokenize;
use crate::DocId;

/// Term -> postings mapping. Built once from a [`DocumentStore`]
/// snapshot and read-only afterward; a change to the store requires a
/// full rebuild. Postings lists are duplicate-free, in first-seen
/// order; only set membership is meaningful.
#[derive(Debug)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<DocId>>,
    limits: TermLimits,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    pub num_terms: usize,
    pub avg_postings_len: f64,
    pub avg_term_len: f64,
}

impl InvertedIndex {
    /// Tokenize every document in the store and collect (term, doc id)
    /// pairs into postings lists. Iteration order over the store does
    /// not affect the result sets. Cannot fail: tokenization only
    /// filters.
    pub fn build(store: &DocumentStore, limits: TermLimits) -> Self {
        let mut postings: HashMap<String, Vec<DocId>> = HashMap::new();
        for (doc_id, text) in store.iter() {
            for term in tokenize(text, limits) {
                let list = postings.entry(term).or_default();
                if !list.contains(&doc_id) {
                    list.push(doc_id);
                }
            }
        }
        tracing::info!(num_terms = postings.len(), num_docs = store.len(), "index built");
        Self { postings, limits }
    }

    /// Postings for a term. An unindexed term is a soft miss: it
    /// resolves to an empty list, never an error.
    pub fn postings(&self, term: &str) -> &[DocId] {
        match self.postings.get(term) {
            Some(list) => list,
            None => {
                tracing::debug!(term, "no postings entry");
                &[]
            }
        }
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Iterate over (term, postings) entries. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DocId])> {
        self.postings
            .iter()
            .map(|(term, list)| (term.as_str(), list.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn limits(&self) -> TermLimits {
        self.limits
    }

    pub fn stats(&self) -> IndexStats {
        let num_terms = self.postings.len();
        if num_terms == 0 {
            return IndexStats { num_terms: 0, avg_postings_len: 0.0, avg_term_len: 0.0 };
        }
        let total_postings: usize = self.postings.values().map(Vec::len).sum();
        let total_term_len: usize = self.postings.keys().map(|t| t.chars().count()).sum();
        IndexStats {
            num_terms,
            avg_postings_len: total_postings as f64 / num_terms as f64,
            avg_term_len: total_term_len as f64 / num_terms as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn store() -> DocumentStore {
        DocumentStore::from_documents(vec![
            (PathBuf::from("1.txt"), "cats and dogs".to_string()),
            (PathBuf::from("2.txt"), "dogs and birds".to_string()),
            (PathBuf::from("3.txt"), "birds only".to_string()),
        ])
    }

    fn ids(index: &InvertedIndex, term: &str) -> HashSet<DocId> {
        index.postings(term).iter().copied().collect()
    }

    fn id_of(store: &DocumentStore, name: &str) -> DocId {
        store.doc_id(std::path::Path::new(name)).unwrap()
    }

    #[test]
    fn indexes_every_surviving_term() {
        let s = store();
        let index = InvertedIndex::build(&s, TermLimits::default());
        assert_eq!(ids(&index, "dogs"), HashSet::from([id_of(&s, "1.txt"), id_of(&s, "2.txt")]));
        assert_eq!(ids(&index, "only"), HashSet::from([id_of(&s, "3.txt")]));
        // "and" survives (len 3, alnum) and lands in docs 1 and 2
        assert_eq!(ids(&index, "and"), HashSet::from([id_of(&s, "1.txt"), id_of(&s, "2.txt")]));
    }

    #[test]
    fn filtered_terms_are_absent() {
        let s = DocumentStore::from_documents(vec![(
            PathBuf::from("1.txt"),
            "ok sat! x".to_string(),
        )]);
        let index = InvertedIndex::build(&s, TermLimits::default());
        assert!(!index.contains_term("sat!"));
        assert!(!index.contains_term("sat"));
        assert!(!index.contains_term("x"));
        assert!(index.contains_term("ok"));
    }

    #[test]
    fn postings_hold_no_duplicates() {
        let s = DocumentStore::from_documents(vec![(
            PathBuf::from("1.txt"),
            "dog dog dog".to_string(),
        )]);
        let index = InvertedIndex::build(&s, TermLimits::default());
        assert_eq!(index.postings("dog").len(), 1);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let s = store();
        let a = InvertedIndex::build(&s, TermLimits::default());
        let b = InvertedIndex::build(&s, TermLimits::default());
        assert_eq!(a.len(), b.len());
        for (term, _) in a.iter() {
            assert_eq!(ids(&a, term), ids(&b, term), "postings differ for {term}");
        }
    }

    #[test]
    fn unknown_term_resolves_to_empty_slice() {
        let index = InvertedIndex::build(&store(), TermLimits::default());
        assert!(index.postings("zebra").is_empty());
    }

    #[test]
    fn stats_reflect_index_shape() {
        let s = DocumentStore::from_documents(vec![(
            PathBuf::from("1.txt"),
            "aa bbbb".to_string(),
        )]);
        let index = InvertedIndex::build(&s, TermLimits::default());
        let stats = index.stats();
        assert_eq!(stats.num_terms, 2);
        assert_eq!(stats.avg_postings_len, 1.0);
        assert_eq!(stats.avg_term_len, 3.0);
    }
}
