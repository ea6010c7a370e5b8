use serde::Serialize;

/// A byte range `[start, end)` into the report source.
///
/// Spans never include the line terminator, so slicing the source with a
/// single-line span yields exactly the line as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
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

    /// Smallest span covering both `self` and `other`.
    #[must_use]
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Slices `source` with this span, or `None` if it is out of bounds
    /// or not on a char boundary.
    pub fn slice(self, source: &str) -> Option<&str> {
        source.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_saturates_on_inverted_span() {
        let sp = Span { start: 5, end: 2 };
        assert_eq!(sp.len(), 0);
        assert!(sp.is_empty());
    }

    #[test]
    fn cover_joins_two_lines() {
        let title = Span { start: 0, end: 5 };
        let underline = Span { start: 6, end: 11 };
        assert_eq!(title.cover(underline), Span { start: 0, end: 11 });
    }

    #[test]
    fn slice_rejects_out_of_bounds() {
        assert_eq!(Span { start: 0, end: 3 }.slice("abc"), Some("abc"));
        assert_eq!(Span { start: 2, end: 9 }.slice("abc"), None);
    }
}
