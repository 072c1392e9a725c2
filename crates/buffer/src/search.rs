//! Case-insensitive regex search over logical lines, with wraparound.
//!
//! Searching is wrap-width independent: positions are logical line
//! indices and character offsets, and the caller translates hits back
//! into display coordinates.

use regex::Regex;

/// A compiled, case-insensitive search pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

/// Location of a match: logical line and character offset of its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub line: usize,
    pub offset: usize,
}

impl Pattern {
    /// Compile a pattern with the `(?i)` flag applied.
    ///
    /// Returns `None` for an empty or unparsable pattern; callers treat
    /// that as a no-op search rather than an error.
    pub fn compile(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){text}"))
            .ok()
            .map(|regex| Self { regex })
    }

    /// Char offsets of all match starts in a line, ascending.
    fn match_starts(&self, text: &str) -> Vec<usize> {
        self.regex
            .find_iter(text)
            .map(|m| text[..m.start()].chars().count())
            .collect()
    }

    fn first_in(&self, text: &str) -> Option<usize> {
        self.match_starts(text).into_iter().next()
    }

    fn first_after(&self, text: &str, offset: usize) -> Option<usize> {
        self.match_starts(text).into_iter().find(|&c| c > offset)
    }

    fn last_in(&self, text: &str) -> Option<usize> {
        self.match_starts(text).into_iter().last()
    }

    fn last_before(&self, text: &str, offset: usize) -> Option<usize> {
        self.match_starts(text)
            .into_iter()
            .take_while(|&c| c < offset)
            .last()
    }
}

/// Find the next match after `(line, offset)`, scanning forward.
///
/// Priority: the remainder of the current line strictly after `offset`,
/// then subsequent lines in order, then wraparound from line 0 through
/// the current line inclusive. The first hit in that order wins.
pub fn find_forward(
    lines: &[String],
    pattern: &Pattern,
    line: usize,
    offset: usize,
) -> Option<SearchHit> {
    if lines.is_empty() {
        return None;
    }
    let line = line.min(lines.len() - 1);

    if let Some(col) = pattern.first_after(&lines[line], offset) {
        return Some(SearchHit { line, offset: col });
    }
    for idx in line + 1..lines.len() {
        if let Some(col) = pattern.first_in(&lines[idx]) {
            return Some(SearchHit { line: idx, offset: col });
        }
    }
    for idx in 0..=line {
        if let Some(col) = pattern.first_in(&lines[idx]) {
            return Some(SearchHit { line: idx, offset: col });
        }
    }
    None
}

/// Find the previous match before `(line, offset)`, scanning backward.
///
/// Mirror of [`find_forward`]: the rightmost match strictly before
/// `offset` on the current line, then preceding lines in reverse
/// (rightmost match per line), then wraparound from the end of the
/// buffer down through the current line inclusive.
pub fn find_backward(
    lines: &[String],
    pattern: &Pattern,
    line: usize,
    offset: usize,
) -> Option<SearchHit> {
    if lines.is_empty() {
        return None;
    }
    let line = line.min(lines.len() - 1);

    if let Some(col) = pattern.last_before(&lines[line], offset) {
        return Some(SearchHit { line, offset: col });
    }
    for idx in (0..line).rev() {
        if let Some(col) = pattern.last_in(&lines[idx]) {
            return Some(SearchHit { line: idx, offset: col });
        }
    }
    for idx in (line..lines.len()).rev() {
        if let Some(col) = pattern.last_in(&lines[idx]) {
            return Some(SearchHit { line: idx, offset: col });
        }
    }
    None
}
