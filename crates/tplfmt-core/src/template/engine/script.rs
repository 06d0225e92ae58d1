//! Script section extraction

/// A script section located in the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSpan<'a> {
    /// Byte position of the start delimiter
    pub start: usize,
    /// Byte position just past the end delimiter
    pub end: usize,
    /// Text between the delimiters, unmodified
    pub source: &'a str,
}

/// Iterator over script sections, left to right
///
/// Each section runs from a start delimiter to the first end delimiter after
/// it. A start delimiter without an end delimiter ends the iteration; the
/// caller keeps the rest of the text as is.
#[derive(Debug, Clone)]
pub struct ScriptBlocks<'a> {
    text: &'a str,
    start_tag: &'a str,
    end_tag: &'a str,
    pos: usize,
}

impl<'a> ScriptBlocks<'a> {
    pub fn new(text: &'a str, start_tag: &'a str, end_tag: &'a str) -> Self {
        Self {
            text,
            start_tag,
            end_tag,
            pos: 0,
        }
    }
}

impl<'a> Iterator for ScriptBlocks<'a> {
    type Item = ScriptSpan<'a>;

    fn next(&mut self) -> Option<ScriptSpan<'a>> {
        // Empty delimiters would never advance
        if self.start_tag.is_empty() || self.end_tag.is_empty() {
            return None;
        }

        let start = self.pos + self.text.get(self.pos..)?.find(self.start_tag)?;
        let source_start = start + self.start_tag.len();
        let Some(len) = self.text[source_start..].find(self.end_tag) else {
            self.pos = self.text.len();
            return None;
        };
        let source_end = source_start + len;
        let end = source_end + self.end_tag.len();
        self.pos = end;

        Some(ScriptSpan {
            start,
            end,
            source: &self.text[source_start..source_end],
        })
    }
}

impl std::iter::FusedIterator for ScriptBlocks<'_> {}
