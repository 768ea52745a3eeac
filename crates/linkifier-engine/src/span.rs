use serde::Serialize;

/// A byte range `[start, end)` into the tokenized text.
///
/// Segments carry spans alongside their text so callers can map results back
/// to the source without searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Moves a span relative to a fragment into the coordinates of the
    /// enclosing text.
    #[must_use]
    pub fn offset(self, by: usize) -> Self {
        Self {
            start: self.start + by,
            end: self.end + by,
        }
    }

    /// Slices `text` with this span. Both ends must be on char boundaries.
    pub fn slice(self, text: &str) -> &str {
        &text[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(3, 8).len(), 5);
        assert!(Span::new(4, 4).is_empty());
        // inverted spans saturate instead of underflowing
        assert!(Span::new(9, 2).is_empty());
    }

    #[test]
    fn offset_shifts_both_ends() {
        assert_eq!(Span::new(1, 4).offset(10), Span::new(11, 14));
    }

    #[test]
    fn slice_multibyte() {
        let text = "«a.org»";
        // « is two bytes
        assert_eq!(Span::new(2, 7).slice(text), "a.org");
    }
}
