//! Byte ranges into the source document.

use std::ops::Range;

/// A half-open byte range `start..end` into the XML source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    pub(crate) fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Byte offset of the first covered byte.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Tokenizer positions are empty spans.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Converts a 1-based row/column pair (columns counted in characters)
    /// into a zero-length span at the matching byte offset of `source`.
    ///
    /// Positions past the end of the source clamp to `source.len()`.
    pub(crate) fn at_text_pos(source: &str, row: u32, col: u32) -> Self {
        let line_start = source
            .split_inclusive('\n')
            .take(row.saturating_sub(1) as usize)
            .map(str::len)
            .sum::<usize>()
            .min(source.len());

        let offset = source[line_start..]
            .char_indices()
            .nth(col.saturating_sub(1) as usize)
            .map(|(idx, _)| line_start + idx)
            .unwrap_or(source.len());

        Self::new(offset..offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_accessors() {
        let span = Span::new(10..20);
        assert_eq!(span.start(), 10);
        assert_eq!(span.end(), 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
        assert!(Span::default().is_empty());
    }

    #[test]
    fn test_at_text_pos_first_line() {
        let span = Span::at_text_pos("<diagram>", 1, 1);
        assert_eq!(span.start(), 0);
        assert!(span.is_empty());
    }

    #[test]
    fn test_at_text_pos_later_line() {
        let source = "<a>\n  <b>\n</a>";
        let span = Span::at_text_pos(source, 2, 3);
        assert_eq!(span.start(), 6);
        assert_eq!(&source[span.start()..], "<b>\n</a>");
    }

    #[test]
    fn test_at_text_pos_multibyte_columns() {
        let source = "é<x";
        let span = Span::at_text_pos(source, 1, 2);
        assert_eq!(span.start(), 2);
    }

    #[test]
    fn test_at_text_pos_clamps() {
        let span = Span::at_text_pos("ab", 9, 9);
        assert_eq!(span.start(), 2);
    }
}
