//! Core trait definition for candidate-producing replacers.

/// A replacer proposes candidate strings for a search.
///
/// Given the full content and the caller's search text, a replacer
/// returns the substrings of `content` (in priority order) that it
/// believes the search text refers to. Candidates are values, not
/// positions: the resolver locates and validates each one with a plain
/// substring scan before any replacement happens.
///
/// Implementations must be pure: same inputs, same candidates, every
/// call. The returned list is finite and built fresh per invocation, so
/// no state survives between calls.
pub trait Replacer: Send + Sync {
    /// Returns the name of this replacer, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Produce candidate strings for `search` within `content`.
    ///
    /// An empty vec means this replacer has nothing to offer; the
    /// resolver moves on to the next one in the chain.
    fn candidates(&self, content: &str, search: &str) -> Vec<String>;
}
