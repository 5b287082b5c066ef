use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::index::InvertedIndex;
use crate::store::DocumentStore;
use crate::DocId;

/// Structural query failures. Unknown terms are deliberately not here:
/// they resolve to empty (or, negated, full-universe) sets so a valid
/// query over unindexed words still evaluates to a result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("malformed query: specify a set operation between every pair of terms")]
    MalformedQuery,
    #[error("unknown operator `{0}`, expected AND or OR")]
    UnknownOperator(String),
}

/// Binary set operation between two postings sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOp {
    And,
    Or,
}

impl BoolOp {
    fn apply(self, left: &HashSet<DocId>, right: &HashSet<DocId>) -> HashSet<DocId> {
        match self {
            BoolOp::And => left.intersection(right).copied().collect(),
            BoolOp::Or => left.union(right).copied().collect(),
        }
    }
}

impl FromStr for BoolOp {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AND" => Ok(BoolOp::And),
            "OR" => Ok(BoolOp::Or),
            other => Err(QueryError::UnknownOperator(other.to_string())),
        }
    }
}

/// A parsed query: the leading postings set followed by (operator, set)
/// pairs, i.e. the validated odd-length alternating sequence.
#[derive(Debug)]
pub struct QueryPlan {
    first: HashSet<DocId>,
    rest: Vec<(BoolOp, HashSet<DocId>)>,
}

impl QueryPlan {
    /// Reduce the sequence strictly left to right. There is no operator
    /// precedence: `a AND b OR c` is `(a AND b) OR c`, which is the
    /// contract, not an accident.
    pub fn evaluate(self) -> HashSet<DocId> {
        self.rest
            .into_iter()
            .fold(self.first, |acc, (op, set)| op.apply(&acc, &set))
    }
}

/// Evaluates boolean queries against a built index and its store.
/// Borrows both read-only; queries never mutate.
pub struct QueryEngine<'a> {
    index: &'a InvertedIndex,
    store: &'a DocumentStore,
}

const NEGATION_MARKER: char = '!';

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a InvertedIndex, store: &'a DocumentStore) -> Self {
        Self { index, store }
    }

    /// Parse a raw query string into an evaluable plan.
    ///
    /// Tokens at even positions are terms (optionally `!`-negated),
    /// tokens at odd positions must be operators; an even token count
    /// (including the empty query) is malformed.
    pub fn parse(&self, query: &str) -> Result<QueryPlan, QueryError> {
        let tokens: Vec<&str> = query.split_whitespace().collect();
        if tokens.len() % 2 == 0 {
            return Err(QueryError::MalformedQuery);
        }
        let (head, tail) = match tokens.split_first() {
            Some(parts) => parts,
            None => return Err(QueryError::MalformedQuery),
        };
        let first = self.resolve(head);
        let mut rest = Vec::with_capacity(tail.len() / 2);
        for pair in tail.chunks(2) {
            match pair {
                [op, term] => rest.push((op.parse()?, self.resolve(term))),
                // unreachable after the parity check
                _ => return Err(QueryError::MalformedQuery),
            }
        }
        Ok(QueryPlan { first, rest })
    }

    /// Parse and evaluate, surfacing structural errors so callers can
    /// tell a bad query from a valid query with no matches.
    pub fn run(&self, query: &str) -> Result<HashSet<DocId>, QueryError> {
        Ok(self.parse(query)?.evaluate())
    }

    /// Best-effort search: a structurally invalid query is logged and
    /// yields an empty sequence. The returned iterator is finite and
    /// consumed once; re-running the query re-executes the pipeline.
    pub fn search(&self, query: &str) -> impl Iterator<Item = &'a Path> + 'a {
        let ids = match self.run(query) {
            Ok(ids) => ids,
            Err(err) => {
                tracing::warn!(%err, query, "query rejected");
                HashSet::new()
            }
        };
        let store = self.store;
        ids.into_iter().filter_map(move |id| store.doc_path(id))
    }

    /// Resolve one query term to a postings set. `!term` complements
    /// against the store's id universe; a term missing from the index
    /// is a soft miss resolving to the empty set (or, negated, to the
    /// full universe).
    fn resolve(&self, token: &str) -> HashSet<DocId> {
        match token.strip_prefix(NEGATION_MARKER) {
            Some(term) => {
                let matched: HashSet<DocId> = self.index.postings(term).iter().copied().collect();
                self.store
                    .doc_ids()
                    .filter(|id| !matched.contains(id))
                    .collect()
            }
            None => self.index.postings(token).iter().copied().collect(),
        }
    }
}
