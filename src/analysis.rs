//! Query text analysis.
//!
//! Satchel's matching is substring based, so the only analysis step is
//! turning the raw query string into lowercase whitespace-delimited tokens.
//! There is no stemming, stop-word removal, or deduplication; a duplicated
//! token simply produces a redundant predicate clause.

/// Split a raw query string into normalized search tokens.
///
/// The input is trimmed and split on runs of whitespace; each piece is
/// lowercased. Token order follows input order. An empty or whitespace-only
/// input yields an empty vector, which downstream components treat as
/// "match everything".
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_lowercase).collect()
}
