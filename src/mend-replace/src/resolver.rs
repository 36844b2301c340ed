//! Resolver that orchestrates the replacer chain.
//!
//! The resolver walks the nine replacers in fixed priority order, asks
//! each for candidates, and validates every candidate with a plain
//! substring scan: present at all, and (without replace-all) present
//! exactly once. The first candidate that survives validation wins and
//! no later replacer is consulted.

use tracing::debug;

use crate::error::ReplaceError;
use crate::helpers::truncate_for_log;
use crate::replacers::{
    BlockAnchorReplacer, ContextAwareReplacer, EscapeNormalizedReplacer,
    IndentationFlexibleReplacer, LineTrimmedReplacer, MultiOccurrenceReplacer, SimpleReplacer,
    TrimmedBoundaryReplacer, WhitespaceNormalizedReplacer,
};
use crate::traits::Replacer;

/// Display length for search text quoted in errors and logs.
const SEARCH_DISPLAY_LEN: usize = 100;

/// A successful resolution: the rewritten content plus which replacer
/// produced the winning candidate, for callers that log the heuristic.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The content after the substitution.
    pub content: String,
    /// Name of the replacer whose candidate won.
    pub replacer: &'static str,
}

/// The fixed-order chain of candidate-producing replacers.
///
/// Holding the replacers in a plain list keeps the ordering guarantee
/// trivial: same inputs, same replacers, same candidate order, same
/// outcome, every call.
pub struct ReplacerChain {
    replacers: Vec<Box<dyn Replacer>>,
}

impl ReplacerChain {
    /// Build the standard chain with all nine replacers in priority
    /// order, most precise first.
    pub fn new() -> Self {
        Self {
            replacers: vec![
                Box::new(SimpleReplacer),
                Box::new(LineTrimmedReplacer),
                Box::new(BlockAnchorReplacer),
                Box::new(WhitespaceNormalizedReplacer),
                Box::new(IndentationFlexibleReplacer),
                Box::new(EscapeNormalizedReplacer),
                Box::new(TrimmedBoundaryReplacer),
                Box::new(ContextAwareReplacer),
                Box::new(MultiOccurrenceReplacer),
            ],
        }
    }

    /// Build a chain over a custom replacer list. Order is preserved.
    pub fn with_replacers(replacers: Vec<Box<dyn Replacer>>) -> Self {
        Self { replacers }
    }

    /// Names of the replacers in the order they are consulted.
    pub fn replacer_names(&self) -> Vec<&'static str> {
        self.replacers.iter().map(|r| r.name()).collect()
    }

    /// Replace `old` with `new` in `content`.
    ///
    /// Without `replace_all`, a candidate must occur exactly once in the
    /// content; candidates occurring more than once are skipped in favor
    /// of later candidates and replacers. With `replace_all`, the first
    /// candidate present at all has every exact occurrence replaced.
    pub fn resolve(
        &self,
        content: &str,
        old: &str,
        new: &str,
        replace_all: bool,
    ) -> Result<Resolution, ReplaceError> {
        if old == new {
            return Err(ReplaceError::Validation(
                "oldString and newString must be different".to_owned(),
            ));
        }

        let mut found_ambiguous = false;

        for replacer in &self.replacers {
            for candidate in replacer.candidates(content, old) {
                let Some(index) = content.find(candidate.as_str()) else {
                    continue;
                };

                if replace_all {
                    debug!(
                        "{}: replacing all occurrences of '{}'",
                        replacer.name(),
                        truncate_for_log(&candidate, 30)
                    );
                    return Ok(Resolution {
                        content: content.replace(candidate.as_str(), new),
                        replacer: replacer.name(),
                    });
                }

                // Unique means first and last occurrence coincide.
                if content.rfind(candidate.as_str()) != Some(index) {
                    debug!(
                        "{}: candidate '{}' occurs more than once, skipping",
                        replacer.name(),
                        truncate_for_log(&candidate, 30)
                    );
                    found_ambiguous = true;
                    continue;
                }

                debug!(
                    "{}: unique match at byte {}",
                    replacer.name(),
                    index
                );
                let mut result = String::with_capacity(content.len() + new.len());
                result.push_str(&content[..index]);
                result.push_str(new);
                result.push_str(&content[index + candidate.len()..]);
                return Ok(Resolution {
                    content: result,
                    replacer: replacer.name(),
                });
            }
        }

        if found_ambiguous {
            Err(ReplaceError::AmbiguousMatch {
                search: truncate_for_log(old, SEARCH_DISPLAY_LEN),
            })
        } else {
            Err(ReplaceError::NotFound {
                search: truncate_for_log(old, SEARCH_DISPLAY_LEN),
                tried: self.replacer_names(),
            })
        }
    }
}

impl Default for ReplacerChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace `old` with `new` in `content` using the standard chain.
///
/// Convenience wrapper over [`ReplacerChain::resolve`] for callers that
/// do not care which replacer fired.
pub fn replace(
    content: &str,
    old: &str,
    new: &str,
    replace_all: bool,
) -> Result<String, ReplaceError> {
    ReplacerChain::new()
        .resolve(content, old, new, replace_all)
        .map(|resolution| resolution.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_uses_simple_replacer() {
        let chain = ReplacerChain::new();
        let resolution = chain
            .resolve("let x = 1;", "let x = 1;", "let y = 2;", false)
            .unwrap();
        assert_eq!(resolution.content, "let y = 2;");
        assert_eq!(resolution.replacer, "SimpleReplacer");
    }

    #[test]
    fn test_identical_strings_rejected_before_matching() {
        let chain = ReplacerChain::new();
        let err = chain.resolve("anything", "same", "same", false).unwrap_err();
        assert!(matches!(err, ReplaceError::Validation(_)));
        // Even with replace_all set.
        let err = chain.resolve("anything", "same", "same", true).unwrap_err();
        assert!(matches!(err, ReplaceError::Validation(_)));
    }

    #[test]
    fn test_not_found_reports_all_replacers() {
        let chain = ReplacerChain::new();
        let err = chain
            .resolve("fn main() {}", "nonexistent()", "other()", false)
            .unwrap_err();
        match err {
            ReplaceError::NotFound { tried, .. } => assert_eq!(tried.len(), 9),
            other => panic!("expected NotFound, got: {other}"),
        }
    }

    #[test]
    fn test_duplicate_occurrences_are_ambiguous() {
        let err = replace("foo bar foo", "foo", "baz", false).unwrap_err();
        assert!(matches!(err, ReplaceError::AmbiguousMatch { .. }));
    }

    #[test]
    fn test_replace_all_short_circuits_ambiguity() {
        assert_eq!(replace("foo bar foo", "foo", "baz", true).unwrap(), "baz bar baz");
    }

    #[test]
    fn test_falls_back_past_exact_match() {
        // Indentation differs, so SimpleReplacer yields nothing usable
        // and a later replacer resolves it.
        let content = "    fn test() {\n        let x = 1;\n    }";
        let search = "fn test() {\n    let x = 1;\n}";
        let resolution = ReplacerChain::new()
            .resolve(content, search, "fn test() {}", false)
            .unwrap();
        assert_ne!(resolution.replacer, "SimpleReplacer");
        assert!(resolution.content.contains("fn test() {}"));
    }

    #[test]
    fn test_custom_chain_order_is_respected() {
        use crate::replacers::{MultiOccurrenceReplacer, SimpleReplacer};

        let chain = ReplacerChain::with_replacers(vec![
            Box::new(MultiOccurrenceReplacer),
            Box::new(SimpleReplacer),
        ]);
        assert_eq!(
            chain.replacer_names(),
            vec!["MultiOccurrenceReplacer", "SimpleReplacer"]
        );
    }

    #[test]
    fn test_error_messages_truncate_search_text() {
        let long_search = "x".repeat(300);
        let err = replace("short content", &long_search, "y", false).unwrap_err();
        match err {
            ReplaceError::NotFound { search, .. } => {
                assert!(search.len() < 120);
                assert!(search.ends_with("..."));
            }
            other => panic!("expected NotFound, got: {other}"),
        }
    }
}
