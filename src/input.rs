/// A parsable view over a sequence of symbols.
///
/// [`Input`] is the "remaining input" cursor that every parser receives and
/// returns. It behaves like an [`Iterator`] that can be cloned cheaply: a
/// parser advances its own copy and hands the advanced copy back as the
/// remainder, while the caller still holds the original position. Cloning
/// and advancing must never copy the underlying data.
///
/// Two views compare equal with `==` when their *contents* are equal. Use
/// [`pos_eq`](Input::pos_eq) to ask whether they sit at the same position of
/// the same stream.
///
/// [`Input`] is implemented for `&str` (symbols are [`char`]), for slices
/// `&[T]` and, with the `ascii` feature, for [`&AsciiStr`](ascii::AsciiStr).
pub trait Input: Clone {
    /// The symbol type this input yields.
    type Symbol;

    /// Takes the next symbol off the front of the view.
    ///
    /// [`None`] means the end of input has been reached.
    fn next(&mut self) -> Option<Self::Symbol>;

    /// Tests whether two views are at the same position of the same stream.
    fn pos_eq(&self, other: &Self) -> bool;

    /// Advances the view by up to `count` symbols, returning how many were
    /// skipped. A return value smaller than `count` means the view is now at
    /// the end of input.
    fn advance_by(&mut self, count: usize) -> usize {
        for idx in 0..count {
            if self.next().is_none() {
                return idx;
            }
        }
        count
    }

    /// Returns the number of remaining symbols, if it is cheap to know.
    fn size_hint(&self) -> Option<usize> {
        None
    }

    /// Returns `true` if there is no input left.
    fn is_empty(&self) -> bool {
        self.clone().next().is_none()
    }
}

/// Types that convert directly into an [`Input`].
///
/// [`Parse::parse`](crate::Parse::parse) accepts any [`IntoInput`], so
/// `parser.parse(&my_string)` works without spelling out `my_string.as_str()`.
pub trait IntoInput {
    /// The [`Input`] this type converts to.
    type Input: Input;

    /// Converts to the [`Input`] view.
    fn into_input(self) -> Self::Input;
}

impl<T: Copy> Input for &[T] {
    type Symbol = T;

    fn next(&mut self) -> Option<T> {
        let (head, tail) = self.split_first()?;
        *self = tail;
        Some(*head)
    }

    fn pos_eq(&self, other: &Self) -> bool {
        self.as_ptr() == other.as_ptr()
    }

    fn advance_by(&mut self, count: usize) -> usize {
        let count = core::cmp::min(self.len(), count);
        *self = &self[count..];
        count
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.len())
    }

    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl Input for &str {
    type Symbol = char;

    fn next(&mut self) -> Option<char> {
        let mut chars = self.chars();
        let ch = chars.next()?;
        *self = chars.as_str();
        Some(ch)
    }

    fn pos_eq(&self, other: &Self) -> bool {
        self.as_ptr() == other.as_ptr()
    }

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

#[cfg(feature = "ascii")]
impl Input for &ascii::AsciiStr {
    type Symbol = ascii::AsciiChar;

    fn next(&mut self) -> Option<ascii::AsciiChar> {
        let (head, tail) = self.as_slice().split_first()?;
        *self = tail.into();
        Some(*head)
    }

    fn pos_eq(&self, other: &Self) -> bool {
        self.as_ptr() == other.as_ptr()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.len())
    }

    fn is_empty(&self) -> bool {
        ascii::AsciiStr::is_empty(self)
    }
}

impl<I: Input> IntoInput for I {
    type Input = I;

    fn into_input(self) -> I {
        self
    }
}

impl<'a, T: Copy, const LEN: usize> IntoInput for &'a [T; LEN] {
    type Input = &'a [T];

    fn into_input(self) -> &'a [T] {
        self
    }
}

#[cfg(feature = "alloc")]
impl<'a> IntoInput for &'a alloc::string::String {
    type Input = &'a str;

    fn into_input(self) -> &'a str {
        self
    }
}

#[cfg(feature = "alloc")]
impl<'a> IntoInput for &'a alloc::boxed::Box<str> {
    type Input = &'a str;

    fn into_input(self) -> &'a str {
        self
    }
}

#[cfg(feature = "alloc")]
impl<'a, T: Copy> IntoInput for &'a alloc::vec::Vec<T> {
    type Input = &'a [T];

    fn into_input(self) -> &'a [T] {
        self
    }
}

#[cfg(all(feature = "alloc", feature = "ascii"))]
impl<'a> IntoInput for &'a ascii::AsciiString {
    type Input = &'a ascii::AsciiStr;

    fn into_input(self) -> &'a ascii::AsciiStr {
        self
    }
}
