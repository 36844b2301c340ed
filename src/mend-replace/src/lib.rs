//! Resilient text-replacement engine for Mend editing tools.
//!
//! Given a document's full text, a search string, and a replacement
//! string, this crate locates the search string even when the caller's
//! copy differs in whitespace, indentation, escaping, or exact
//! boundaries, and performs exactly one (or all) substitutions.
//!
//! Nine replacers are consulted in a fixed priority order. Each proposes
//! candidate strings — the actual text in the content that the search
//! may refer to — and the resolver validates every candidate with a
//! plain substring scan before splicing in the replacement:
//!
//! 1. `SimpleReplacer` — exact string match
//! 2. `LineTrimmedReplacer` — ignore whitespace at each line's ends
//! 3. `BlockAnchorReplacer` — first/last line anchors + edit distance
//! 4. `WhitespaceNormalizedReplacer` — collapse whitespace runs
//! 5. `IndentationFlexibleReplacer` — ignore common indentation
//! 6. `EscapeNormalizedReplacer` — resolve escape sequences
//! 7. `TrimmedBoundaryReplacer` — shed surrounding whitespace
//! 8. `ContextAwareReplacer` — anchors + exact interior-line quorum
//! 9. `MultiOccurrenceReplacer` — every exact occurrence (replace-all)
//!
//! The engine is pure and stateless: no I/O, no shared mutable state,
//! and deterministic output for identical inputs. Content is expected to
//! be LF-normalized by the caller. The anchor-scanning replacers are
//! O(lines^2) and the per-line edit distance is O(len^2); both are
//! acceptable for interactively sized edits.
//!
//! ```
//! let content = "  hello world  ";
//! let updated = mend_replace::replace(content, "hello world", "goodbye world", false).unwrap();
//! assert_eq!(updated, "  goodbye world  ");
//! ```

mod error;
mod helpers;
mod levenshtein;
mod replacers;
mod resolver;
mod traits;

pub use error::ReplaceError;
pub use levenshtein::distance;
pub use replacers::{
    BlockAnchorReplacer, ContextAwareReplacer, EscapeNormalizedReplacer,
    IndentationFlexibleReplacer, LineTrimmedReplacer, MultiOccurrenceReplacer, SimpleReplacer,
    TrimmedBoundaryReplacer, WhitespaceNormalizedReplacer,
};
pub use resolver::{Resolution, ReplacerChain, replace};
pub use traits::Replacer;
