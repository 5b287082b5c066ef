pub mod config;
pub mod index;
pub mod persist;
pub mod query;
pub mod store;
pub mod tokenizer;

pub use config::TermLimits;
pub use index::{IndexStats, InvertedIndex};
pub use query::{BoolOp, QueryEngine, QueryError};
pub use store::{DocumentStore, StoreStats};

pub type DocId = u32;
