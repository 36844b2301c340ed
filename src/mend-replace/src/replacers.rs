//! The nine candidate-producing replacer implementations.
//!
//! Each replacer proposes substrings of the content that the search text
//! may refer to. The resolver in `resolver.rs` owns candidate
//! validation and the actual splice; nothing here mutates anything.

use tracing::debug;

use crate::helpers::{dedent, normalize_whitespace, slice_lines, unescape_sequences};
use crate::levenshtein;
use crate::traits::Replacer;

/// Minimum mean interior-line similarity accepted when block anchors
/// match at exactly one position. Zero: a lone anchor pair is trusted.
pub const SINGLE_CANDIDATE_SIMILARITY: f64 = 0.0;

/// Minimum mean interior-line similarity the best of several anchor
/// pairs must reach before it is proposed as a candidate.
pub const MULTI_CANDIDATE_SIMILARITY: f64 = 0.3;

// =============================================================================
// 1: SimpleReplacer - exact match
// =============================================================================

/// The most precise layer: proposes the search text itself, verbatim.
pub struct SimpleReplacer;

impl Replacer for SimpleReplacer {
    fn name(&self) -> &'static str {
        "SimpleReplacer"
    }

    fn candidates(&self, _content: &str, search: &str) -> Vec<String> {
        vec![search.to_owned()]
    }
}

// =============================================================================
// 2: LineTrimmedReplacer - per-line trimmed comparison
// =============================================================================

/// Matches blocks whose lines trim equal to the search lines, proposing
/// the original (untrimmed) window text so indentation is preserved.
pub struct LineTrimmedReplacer;

impl Replacer for LineTrimmedReplacer {
    fn name(&self) -> &'static str {
        "LineTrimmedReplacer"
    }

    fn candidates(&self, content: &str, search: &str) -> Vec<String> {
        let content_lines: Vec<&str> = content.split('\n').collect();
        let mut search_lines: Vec<&str> = search.split('\n').collect();

        // A search ending in '\n' splits into a trailing empty line that
        // would never match; drop it.
        if search_lines.last() == Some(&"") {
            search_lines.pop();
        }
        if search_lines.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        for start in 0..=content_lines.len().saturating_sub(search_lines.len()) {
            let window_matches = search_lines
                .iter()
                .enumerate()
                .all(|(j, search_line)| content_lines[start + j].trim() == search_line.trim());

            if window_matches {
                let end = start + search_lines.len() - 1;
                results.push(slice_lines(content, &content_lines, start, end));
            }
        }

        results
    }
}

// =============================================================================
// 3: BlockAnchorReplacer - first/last line anchors + similarity
// =============================================================================

/// Anchors on the trimmed first and last search lines and scores the
/// interior lines with Levenshtein similarity. Handles blocks whose
/// middle drifted from what the caller remembers.
pub struct BlockAnchorReplacer;

impl Replacer for BlockAnchorReplacer {
    fn name(&self) -> &'static str {
        "BlockAnchorReplacer"
    }

    fn candidates(&self, content: &str, search: &str) -> Vec<String> {
        let mut search_lines: Vec<&str> = search.split('\n').collect();
        if search_lines.len() < 3 {
            return Vec::new();
        }
        if search_lines.last() == Some(&"") {
            search_lines.pop();
        }

        let content_lines: Vec<&str> = content.split('\n').collect();
        let first_anchor = search_lines[0].trim();
        let last_anchor = search_lines[search_lines.len() - 1].trim();

        // One (start, end) pair per matching start line: the scan stops
        // at the first end-anchor at least two lines below it.
        let mut pairs: Vec<(usize, usize)> = Vec::new();
        for i in 0..content_lines.len() {
            if content_lines[i].trim() != first_anchor {
                continue;
            }
            for j in (i + 2)..content_lines.len() {
                if content_lines[j].trim() == last_anchor {
                    pairs.push((i, j));
                    break;
                }
            }
        }

        match pairs.len() {
            0 => Vec::new(),
            1 => {
                let (start, end) = pairs[0];
                let similarity = interior_similarity(&content_lines, &search_lines, start, end);
                if similarity >= SINGLE_CANDIDATE_SIMILARITY {
                    vec![slice_lines(content, &content_lines, start, end)]
                } else {
                    Vec::new()
                }
            }
            _ => {
                let mut best: Option<(usize, usize)> = None;
                let mut best_similarity = -1.0f64;
                for &(start, end) in &pairs {
                    let similarity =
                        interior_similarity(&content_lines, &search_lines, start, end);
                    if similarity > best_similarity {
                        best_similarity = similarity;
                        best = Some((start, end));
                    }
                }

                if best_similarity >= MULTI_CANDIDATE_SIMILARITY {
                    let (start, end) = best.unwrap_or(pairs[0]);
                    debug!(
                        "BlockAnchorReplacer: picked lines {}-{} among {} anchor pairs (similarity {:.2})",
                        start + 1,
                        end + 1,
                        pairs.len(),
                        best_similarity
                    );
                    vec![slice_lines(content, &content_lines, start, end)]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

/// Mean per-line similarity (`1 - distance / max_len`) over the interior
/// lines shared by the search block and a candidate content block.
/// Blocks with no interior to compare score a full 1.0 on the strength
/// of their anchors alone.
fn interior_similarity(
    content_lines: &[&str],
    search_lines: &[&str],
    start: usize,
    end: usize,
) -> f64 {
    let actual_size = end - start + 1;
    let lines_to_check = (search_lines.len() - 2).min(actual_size.saturating_sub(2));
    if lines_to_check == 0 {
        return 1.0;
    }

    let mut sum = 0.0;
    for j in 1..search_lines.len().min(actual_size) - 1 {
        let content_line = content_lines[start + j].trim();
        let search_line = search_lines[j].trim();
        let max_len = content_line.len().max(search_line.len());
        if max_len == 0 {
            continue;
        }
        let dist = levenshtein::distance(content_line, search_line);
        sum += 1.0 - dist as f64 / max_len as f64;
    }
    sum / lines_to_check as f64
}

// =============================================================================
// 4: WhitespaceNormalizedReplacer - collapse whitespace runs
// =============================================================================

/// Matches after collapsing whitespace runs to single spaces. Falls back
/// to a word-joining regex to recover the exact span inside a line when
/// the normalized line merely contains the normalized search.
pub struct WhitespaceNormalizedReplacer;

impl Replacer for WhitespaceNormalizedReplacer {
    fn name(&self) -> &'static str {
        "WhitespaceNormalizedReplacer"
    }

    fn candidates(&self, content: &str, search: &str) -> Vec<String> {
        let normalized_search = normalize_whitespace(search);
        let content_lines: Vec<&str> = content.split('\n').collect();
        let mut results = Vec::new();

        // Escaped search words joined by \s+ recover the original span.
        // A pattern that fails to compile is silently dropped; the line
        // candidates and later replacers still get their chance.
        let span_regex = {
            let words: Vec<&str> = search.split_whitespace().collect();
            if words.is_empty() {
                None
            } else {
                let pattern = words
                    .iter()
                    .map(|w| regex::escape(w))
                    .collect::<Vec<_>>()
                    .join(r"\s+");
                regex::Regex::new(&pattern).ok()
            }
        };

        for line in &content_lines {
            let normalized_line = normalize_whitespace(line);
            if normalized_line == normalized_search {
                results.push((*line).to_owned());
            } else if normalized_line.contains(&normalized_search) {
                if let Some(ref re) = span_regex {
                    if let Some(m) = re.find(line) {
                        results.push(m.as_str().to_owned());
                    }
                }
            }
        }

        let search_line_count = search.split('\n').count();
        if search_line_count > 1 {
            for start in 0..=content_lines.len().saturating_sub(search_line_count) {
                let block = content_lines[start..start + search_line_count].join("\n");
                if normalize_whitespace(&block) == normalized_search {
                    results.push(block);
                }
            }
        }

        results
    }
}

// =============================================================================
// 5: IndentationFlexibleReplacer - ignore common indentation
// =============================================================================

/// Matches blocks that agree with the search once both have their common
/// leading whitespace removed. Tabs vs. spaces, shifted nesting levels.
pub struct IndentationFlexibleReplacer;

impl Replacer for IndentationFlexibleReplacer {
    fn name(&self) -> &'static str {
        "IndentationFlexibleReplacer"
    }

    fn candidates(&self, content: &str, search: &str) -> Vec<String> {
        let dedented_search = dedent(search);
        let content_lines: Vec<&str> = content.split('\n').collect();
        let search_line_count = search.split('\n').count();
        let mut results = Vec::new();

        for start in 0..=content_lines.len().saturating_sub(search_line_count) {
            let block = content_lines[start..start + search_line_count].join("\n");
            if dedent(&block) == dedented_search {
                results.push(block);
            }
        }

        results
    }
}

// =============================================================================
// 6: EscapeNormalizedReplacer - resolve escape sequences
// =============================================================================

/// Matches searches that arrive with literal escape sequences (`\n`,
/// `\t`, ...) where the content has the real characters, and vice versa.
pub struct EscapeNormalizedReplacer;

impl Replacer for EscapeNormalizedReplacer {
    fn name(&self) -> &'static str {
        "EscapeNormalizedReplacer"
    }

    fn candidates(&self, content: &str, search: &str) -> Vec<String> {
        let unescaped_search = unescape_sequences(search);
        let mut results = Vec::new();

        if content.contains(&unescaped_search) {
            results.push(unescaped_search.clone());
        }

        // Content may itself carry escaped text that unescapes to the
        // same thing; compare window by window.
        let content_lines: Vec<&str> = content.split('\n').collect();
        let search_line_count = unescaped_search.split('\n').count();

        if search_line_count <= content_lines.len() {
            for start in 0..=content_lines.len() - search_line_count {
                let block = content_lines[start..start + search_line_count].join("\n");
                if unescape_sequences(&block) == unescaped_search && !results.contains(&block) {
                    results.push(block);
                }
            }
        }

        results
    }
}

// =============================================================================
// 7: TrimmedBoundaryReplacer - shed leading/trailing whitespace
// =============================================================================

/// Fires only when the search carries surrounding whitespace; proposes
/// the trimmed search and any block whose trimmed text equals it.
pub struct TrimmedBoundaryReplacer;

impl Replacer for TrimmedBoundaryReplacer {
    fn name(&self) -> &'static str {
        "TrimmedBoundaryReplacer"
    }

    fn candidates(&self, content: &str, search: &str) -> Vec<String> {
        let trimmed_search = search.trim();
        if trimmed_search == search {
            return Vec::new();
        }

        let mut results = Vec::new();
        if content.contains(trimmed_search) {
            results.push(trimmed_search.to_owned());
        }

        let content_lines: Vec<&str> = content.split('\n').collect();
        let search_line_count = search.split('\n').count();

        if search_line_count <= content_lines.len() {
            for start in 0..=content_lines.len() - search_line_count {
                let block = content_lines[start..start + search_line_count].join("\n");
                if block.trim() == trimmed_search && !results.contains(&block) {
                    results.push(block);
                }
            }
        }

        results
    }
}

// =============================================================================
// 8: ContextAwareReplacer - anchors + exact interior-line quorum
// =============================================================================

/// Like `BlockAnchorReplacer` but stricter: the block length must equal
/// the search length, and at least half of the interior lines (among
/// pairs that are not both empty) must match exactly.
pub struct ContextAwareReplacer;

impl Replacer for ContextAwareReplacer {
    fn name(&self) -> &'static str {
        "ContextAwareReplacer"
    }

    fn candidates(&self, content: &str, search: &str) -> Vec<String> {
        let mut search_lines: Vec<&str> = search.split('\n').collect();
        if search_lines.len() < 3 {
            return Vec::new();
        }
        if search_lines.last() == Some(&"") {
            search_lines.pop();
        }

        let content_lines: Vec<&str> = content.split('\n').collect();
        let first_anchor = search_lines[0].trim();
        let last_anchor = search_lines[search_lines.len() - 1].trim();

        for i in 0..content_lines.len() {
            if content_lines[i].trim() != first_anchor {
                continue;
            }

            // Only the first end-anchor below each start is considered.
            for j in (i + 2)..content_lines.len() {
                if content_lines[j].trim() != last_anchor {
                    continue;
                }

                let block_lines = &content_lines[i..=j];
                if block_lines.len() != search_lines.len() {
                    break;
                }

                let mut matching = 0usize;
                let mut comparable = 0usize;
                for k in 1..block_lines.len() - 1 {
                    let block_line = block_lines[k].trim();
                    let search_line = search_lines[k].trim();
                    if !block_line.is_empty() || !search_line.is_empty() {
                        comparable += 1;
                        if block_line == search_line {
                            matching += 1;
                        }
                    }
                }

                if comparable == 0 || matching as f64 / comparable as f64 >= 0.5 {
                    return vec![slice_lines(content, &content_lines, i, j)];
                }

                break;
            }
        }

        Vec::new()
    }
}

// =============================================================================
// 9: MultiOccurrenceReplacer - every exact occurrence
// =============================================================================

/// Proposes the search text once per exact occurrence, scanning forward
/// past each hit so overlaps are not double-counted. In replace-all mode
/// this is the layer that catches plain repeated text.
pub struct MultiOccurrenceReplacer;

impl Replacer for MultiOccurrenceReplacer {
    fn name(&self) -> &'static str {
        "MultiOccurrenceReplacer"
    }

    fn candidates(&self, content: &str, search: &str) -> Vec<String> {
        if search.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        let mut from = 0;
        while let Some(idx) = content[from..].find(search) {
            results.push(search.to_owned());
            from += idx + search.len();
        }
        results
    }
}
