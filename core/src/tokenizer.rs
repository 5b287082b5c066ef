use crate::config::TermLimits;

/// Tokenize text into a lazy sequence of normalized terms: split on
/// whitespace, keep only fragments that are entirely alphanumeric and
/// within the configured length bounds, lower-case the survivors.
///
/// A fragment containing any punctuation or symbol is dropped whole;
/// nothing is stripped. Repeated terms are emitted repeatedly, the
/// indexer deduplicates per document.
pub fn tokenize(text: &str, limits: TermLimits) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(move |fragment| {
        if !fragment.chars().all(char::is_alphanumeric) {
            return None;
        }
        let len = fragment.chars().count();
        if len < limits.min || len > limits.max {
            return None;
        }
        Some(fragment.to_lowercase())
    })
}
