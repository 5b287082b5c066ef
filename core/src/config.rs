/// Term length bounds applied by the tokenizer. Terms outside the bounds
/// are never indexed, so out-of-bounds query terms can never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermLimits {
    pub min: usize,
    pub max: usize,
}

pub const DEFAULT_MIN_TERM_LEN: usize = 2;
pub const DEFAULT_MAX_TERM_LEN: usize = 20;

impl Default for TermLimits {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_TERM_LEN,
            max: DEFAULT_MAX_TERM_LEN,
        }
    }
}

impl TermLimits {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}
