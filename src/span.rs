use crate::Input;

/// A consumed range of input.
///
/// A [`Span`] is bounded by two cursors over the same stream: where a parser
/// started and where it stopped. Iterating a [`Span`] yields the symbols in
/// between. Spans over `&str`, `&[T]` and `&AsciiStr` convert back into the
/// underlying slice with [`From`].
#[derive(Debug, Clone)]
pub struct Span<I: Input> {
    start: I,
    end: I,
}

impl<I: Input + Copy> Copy for Span<I> {}

impl<I: Input> Span<I> {
    /// Creates the span of input consumed between `start` and `end`.
    ///
    /// `end` must be `start` advanced by zero or more symbols.
    pub const fn new(start: I, end: I) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &I {
        &self.start
    }

    pub fn end(&self) -> &I {
        &self.end
    }

    /// Returns `true` if no symbols lie between start and end.
    pub fn is_empty(&self) -> bool {
        self.start.pos_eq(&self.end)
    }
}

impl<I: Input> Iterator for Span<I> {
    type Item = I::Symbol;

    fn next(&mut self) -> Option<I::Symbol> {
        if self.start.pos_eq(&self.end) {
            None
        } else {
            self.start.next()
        }
    }
}

impl<'a> From<Span<&'a str>> for &'a str {
    fn from(span: Span<&'a str>) -> &'a str {
        let consumed = span.start.len() - span.end.len();
        &span.start[..consumed]
    }
}

impl<'a, T: Copy> From<Span<&'a [T]>> for &'a [T] {
    fn from(span: Span<&'a [T]>) -> &'a [T] {
        let consumed = span.start.len() - span.end.len();
        &span.start[..consumed]
    }
}

#[cfg(feature = "ascii")]
impl<'a> From<Span<&'a ascii::AsciiStr>> for &'a ascii::AsciiStr {
    fn from(span: Span<&'a ascii::AsciiStr>) -> &'a ascii::AsciiStr {
        let consumed = span.start.len() - span.end.len();
        &span.start[..consumed]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn str_span_converts_to_consumed_prefix() {
        let input = "  |7";
        let span = Span::new(input, &input[3..]);
        assert!(!span.is_empty());
        assert_eq!(<&str>::from(span), "  |");
        assert_eq!(span.count(), 3);
    }

    #[test]
    fn empty_span() {
        let input = "abc";
        let span = Span::new(input, input);
        assert!(span.is_empty());
        assert_eq!(<&str>::from(span), "");
        assert_eq!(span.count(), 0);
    }
}
