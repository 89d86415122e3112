//! Search-match highlighting
//!
//! Splits a display string into spans on case-insensitive occurrences of
//! the search query, left to right. The iterator is lazy and restartable;
//! matching is char-wise, so case folds that change byte length (e.g.
//! `İ` -> `i̇`) cannot misalign span boundaries.

/// One slice of a highlighted display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// The slice text
    pub text: &'a str,
    /// True if this slice is an occurrence of the query
    pub matched: bool,
}

/// Returns the span iterator for `text` highlighted against `query`.
///
/// An empty query yields a single unmatched span equal to `text`; an
/// empty text yields nothing.
pub fn highlight<'a>(text: &'a str, query: &str) -> Highlight<'a> {
    Highlight {
        text,
        needle: query.chars().flat_map(char::to_lowercase).collect(),
        pos: 0,
    }
}

/// Returns true if `haystack` contains `needle` case-insensitively.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    let folded: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    folded.is_empty() || find_ci_from(haystack, 0, &folded).is_some()
}

/// Lazy span iterator produced by [`highlight`].
#[derive(Debug, Clone)]
pub struct Highlight<'a> {
    text: &'a str,
    needle: Vec<char>,
    pos: usize,
}

impl<'a> Iterator for Highlight<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        if self.pos >= self.text.len() {
            return None;
        }
        if self.needle.is_empty() {
            let span = Span {
                text: &self.text[self.pos..],
                matched: false,
            };
            self.pos = self.text.len();
            return Some(span);
        }
        match find_ci_from(self.text, self.pos, &self.needle) {
            Some((start, end)) if start == self.pos => {
                self.pos = end;
                Some(Span {
                    text: &self.text[start..end],
                    matched: true,
                })
            }
            Some((start, _)) => {
                let span = Span {
                    text: &self.text[self.pos..start],
                    matched: false,
                };
                self.pos = start;
                Some(span)
            }
            None => {
                let span = Span {
                    text: &self.text[self.pos..],
                    matched: false,
                };
                self.pos = self.text.len();
                Some(span)
            }
        }
    }
}

/// Finds the first case-insensitive occurrence of `needle` (already case
/// folded) in `haystack` at or after byte `from`.
///
/// Returns the byte range of the occurrence. Occurrences must cover whole
/// haystack chars; a needle ending inside one char's case fold is not a
/// match at that position.
fn find_ci_from(haystack: &str, from: usize, needle: &[char]) -> Option<(usize, usize)> {
    for (offset, _) in haystack[from..].char_indices() {
        let start = from + offset;
        if let Some(end) = match_at(haystack, start, needle) {
            return Some((start, end));
        }
    }
    None
}

/// Tries to match the folded needle starting exactly at byte `start`.
fn match_at(haystack: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut consumed = 0;
    for (offset, ch) in haystack[start..].char_indices() {
        for folded in ch.to_lowercase() {
            if consumed >= needle.len() || folded != needle[consumed] {
                return None;
            }
            consumed += 1;
        }
        if consumed == needle.len() {
            return Some(start + offset + ch.len_utf8());
        }
    }
    None
}
