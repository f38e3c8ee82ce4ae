#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod symbols;
pub mod types;

/// A position range within a source document, measured in linear character
/// offsets. Every syntax node and diagnostic carries one.
///
/// A span only ever grows: merging and [`Span::add`] widen the range to bound
/// the inputs, and both endpoints are inclusive for containment tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    begin: u32,
    end: u32,
}

impl Span {
    /// Creates a span over `[begin, end]`. Callers are expected to pass
    /// `begin <= end`; the constructor does not reorder the endpoints.
    pub fn new(begin: u32, end: u32) -> Self {
        Span { begin, end }
    }

    /// Creates the bounding span of one or more spans: the minimum of all
    /// begins to the maximum of all ends.
    ///
    /// Panics if `spans` is empty, since there is no aggregate to bound.
    pub fn from_spans(spans: &[Span]) -> Self {
        let Some((first, rest)) = spans.split_first() else {
            panic!("Attempted to build a span from zero spans");
        };
        let mut span = first.clone();
        span.add_all(rest);
        span
    }

    pub fn begin(&self) -> u32 {
        self.begin
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Widens this span to include `other`. A no-op when `other` is already
    /// contained.
    pub fn add(&mut self, other: &Span) {
        self.begin = self.begin.min(other.begin);
        self.end = self.end.max(other.end);
    }

    /// Performs [`Span::add`] for each of the given spans.
    pub fn add_all(&mut self, spans: &[Span]) {
        for span in spans {
            self.add(span);
        }
    }

    /// Whether `offset` falls within this span, inclusive on both ends.
    pub fn contains(&self, offset: u32) -> bool {
        (self.begin..=self.end).contains(&offset)
    }
}

/// Finds the line containing `offset` in `source`, for slicing a [`Span`]'s
/// surroundings out of the original text when a diagnostic is displayed.
///
/// Returns the 1-based line number, the line text (terminator included), and
/// the offset's column within that line. Panics when `offset` is past the end
/// of `source`.
pub fn line_at_offset(source: &str, offset: usize) -> (usize, &str, usize) {
    if offset >= source.len() {
        panic!("Offset exceeds source length");
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&offset) {
            return (line_number, line, offset - start);
        }

        start = end;
        line_number += 1;
    }

    panic!("Failed to find line containing offset");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_from_spans_bounds_inputs() {
        let merged = Span::from_spans(&[Span::new(10, 14), Span::new(3, 7), Span::new(5, 20)]);

        assert_eq!(merged.begin(), 3);
        assert_eq!(merged.end(), 20);
    }

    #[test]
    fn test_span_merge_preserves_containment() {
        let a = Span::new(2, 6);
        let b = Span::new(11, 15);
        let merged = Span::from_spans(&[a.clone(), b.clone()]);

        for offset in 0..20 {
            if a.contains(offset) || b.contains(offset) {
                assert!(merged.contains(offset));
            }
        }
    }

    #[test]
    fn test_span_add_widens_monotonically() {
        let mut span = Span::new(5, 9);
        span.add(&Span::new(1, 3));
        assert_eq!((span.begin(), span.end()), (1, 9));

        // Already contained, nothing changes.
        span.add(&Span::new(2, 8));
        assert_eq!((span.begin(), span.end()), (1, 9));
    }

    #[test]
    fn test_span_add_order_does_not_matter() {
        let parts = [Span::new(7, 9), Span::new(0, 2), Span::new(4, 12)];

        let mut forward = parts[0].clone();
        forward.add_all(&parts[1..]);
        let mut backward = parts[2].clone();
        backward.add(&parts[1]);
        backward.add(&parts[0]);

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_span_contains_is_inclusive() {
        let span = Span::new(3, 5);

        assert!(!span.contains(2));
        assert!(span.contains(3));
        assert!(span.contains(5));
        assert!(!span.contains(6));
    }

    #[test]
    #[should_panic]
    fn test_span_from_zero_spans_panics() {
        Span::from_spans(&[]);
    }

    #[test]
    fn test_line_at_offset() {
        let source = "first line\nsecond line\nthird\n";

        let (line_number, line, column) = line_at_offset(source, 3);
        assert_eq!(line_number, 1);
        assert_eq!(line, "first line\n");
        assert_eq!(column, 3);

        let (line_number, line, column) = line_at_offset(source, 11);
        assert_eq!(line_number, 2);
        assert_eq!(line, "second line\n");
        assert_eq!(column, 0);
    }
}
