//! Placeholder scanning
//!
//! Finds `${...}` spans and classifies their content.

use crate::config::consts::{PROPERTY_CLOSE_TAG, PROPERTY_SEPARATOR, PROPERTY_START_TAG};

/// Classified placeholder content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind<'a> {
    /// `${name}`: the whole content names a binding
    Direct { name: &'a str },

    /// `${root.continuation}`: a binding followed by a member path,
    /// split at the first dot
    Dotted {
        root: &'a str,
        continuation: &'a str,
    },
}

/// A placeholder located in the template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub kind: SpanKind<'a>,
    /// Byte position of `${`
    pub open: usize,
    /// Byte position of the closing `}`
    pub close: usize,
}

impl<'a> Span<'a> {
    /// Byte position just past the closing `}`
    pub fn end(&self) -> usize {
        self.close + PROPERTY_CLOSE_TAG.len()
    }

    /// The span as written, delimiters included
    pub fn raw<'t>(&self, text: &'t str) -> &'t str {
        &text[self.open..self.end()]
    }
}

/// Iterator over the placeholder spans of a template
///
/// For every `${` it pairs the first `}` that follows. Degenerate content is
/// skipped and stays literal:
///
/// ```text
/// ${}        empty
/// ${.a}      dot next to the open marker
/// ${a.}      dot next to the close marker
/// ${a        no close marker at all
/// ```
///
/// After each open marker, with or without a span, scanning resumes one byte
/// past it. Spans may therefore overlap (`${a${b}` yields `a${b` and `b`);
/// the consumer decides which to keep.
///
/// The positions of the next `}` and the next `.` are remembered between
/// open markers, so scanning stays linear even when many `${` share one `}`.
///
/// # Example
///
/// ```rust
/// use tplfmt_core::template::{Scanner, SpanKind};
///
/// let spans: Vec<_> = Scanner::new("${size.width}x${unit}").collect();
/// assert_eq!(
///     spans[0].kind,
///     SpanKind::Dotted { root: "size", continuation: "width" }
/// );
/// assert_eq!(spans[1].kind, SpanKind::Direct { name: "unit" });
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    /// First `}` at or after the last close search
    next_close: Option<usize>,
    /// First `.` at or after the last dot search, or the `}` that ended the
    /// search when there was none
    next_dot: Option<usize>,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::from_offset(text, 0)
    }

    /// Restart scanning at `offset`
    ///
    /// An offset past the end or inside a multi-byte character yields nothing.
    pub fn from_offset(text: &'a str, offset: usize) -> Self {
        Self {
            text,
            pos: offset,
            next_close: None,
            next_dot: None,
        }
    }

    /// Split placeholder content at the offset of its first dot
    fn classify(content: &'a str, dot: Option<usize>) -> Option<SpanKind<'a>> {
        if content.is_empty() {
            return None;
        }
        match dot {
            None => Some(SpanKind::Direct { name: content }),
            Some(dot) if dot > 0 && dot + 1 < content.len() => Some(SpanKind::Dotted {
                root: &content[..dot],
                continuation: &content[dot + 1..],
            }),
            Some(_) => None,
        }
    }

    /// The `}` closing content that starts at `content_start`
    fn close_for(&mut self, content_start: usize) -> Option<usize> {
        if let Some(close) = self.next_close.filter(|&close| close >= content_start) {
            return Some(close);
        }
        let rest = &self.text[content_start..];
        let close = content_start + counted(rest, rest.find(PROPERTY_CLOSE_TAG))?;
        self.next_close = Some(close);
        Some(close)
    }

    /// First dot in `content_start..close`, or `close` if there is none
    fn dot_for(&mut self, content_start: usize, close: usize) -> usize {
        if let Some(dot) = self.next_dot.filter(|&dot| dot >= content_start) {
            return dot;
        }
        let content = &self.text[content_start..close];
        let dot = counted(content, content.find(PROPERTY_SEPARATOR))
            .map_or(close, |offset| content_start + offset);
        self.next_dot = Some(dot);
        dot
    }
}

/// Pass a search result through, recording how far the search looked
#[cfg_attr(not(test), allow(unused_variables))]
fn counted(haystack: &str, found: Option<usize>) -> Option<usize> {
    #[cfg(test)]
    test_counter::add(found.map_or(haystack.len(), |offset| offset + 1));
    found
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        loop {
            let rest = self.text.get(self.pos..)?;
            let open = self.pos + counted(rest, rest.find(PROPERTY_START_TAG))?;
            // `$` is one byte, so this stays on a char boundary
            self.pos = open + 1;

            let content_start = open + PROPERTY_START_TAG.len();
            let Some(close) = self.close_for(content_start) else {
                // No later open marker can be closed either
                self.pos = self.text.len();
                return None;
            };
            let dot = self.dot_for(content_start, close);

            let content = &self.text[content_start..close];
            let dot = (dot < close).then(|| dot - content_start);
            if let Some(kind) = Self::classify(content, dot) {
                return Some(Span { kind, open, close });
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

#[cfg(test)]
pub(crate) mod test_counter {
    use std::cell::Cell;

    thread_local! {
        static SCAN_STEPS: Cell<usize> = const { Cell::new(0) };
    }

    pub(crate) fn reset() {
        SCAN_STEPS.with(|c| c.set(0));
    }

    pub(crate) fn get() -> usize {
        SCAN_STEPS.with(|c| c.get())
    }

    pub(crate) fn add(steps: usize) {
        SCAN_STEPS.with(|c| c.set(c.get() + steps));
    }
}
