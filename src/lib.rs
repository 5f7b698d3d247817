#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # A small parser-combinator core.
//! `ptcore` defines one thing carefully: what a parser *is*, and how a few
//! combinators compose parsers into bigger ones. A parser is a function from
//! the remaining input to an optional pair of the parsed value and the input
//! left over. Everything else is built on that shape.
//!
//! # Contents
//! * [Example](#example) - A digit-list parser built from the core combinators
//! * [Parsers](#parsers) - The calling convention every parser follows
//! * [Repetition](#repetition) - `match_n`, `match_n_count` and friends
//! * [Features](#features) - Available crate features
//!
//! # Example
//! ```
//! use ptcore::prelude::*;
//! use ptcore::ascii::{digit, run_of, AsciiStr};
//!
//! let bars = AsciiStr::from_ascii(" |").unwrap();
//!
//! // Exactly three digits separated by spaces or bars, and nothing else.
//! let triple = digit.match_n::<3, _>(run_of(bars)).match_entirety();
//!
//! assert_eq!(triple.parse("1|2 | 3"), Some(Success([1, 2, 3], "")));
//! assert_eq!(triple.parse("1|2"), None);
//! assert_eq!(triple.parse("1|2|3|"), None);
//!
//! // How many digits are there, and do they make up the whole input?
//! assert_eq!(
//!     digit.match_n_count(run_of(bars), "4|5|6"),
//!     MatchNCount { count: 3, full_match: true },
//! );
//! ```
//!
//! # Parsers
//! A parser is anything implementing [`Parse`]. Parsing never panics and
//! never reports *why* it failed: a failed parse is simply [`None`]. A
//! successful parse is [`Some`] of a [`Success`], which carries the parsed
//! value and the input that was not consumed. The remaining input is always
//! a suffix of the input the parser was given.
//!
//! Any function or closure with the signature `Fn(I) -> PResult<T, I>`, where
//! `I` implements [`Input`], is a parser:
//!
//! ```
//! use ptcore::{Parse, PResult, Success};
//!
//! fn digit(input: &str) -> PResult<u32, &str> {
//!     let ch = input.chars().next()?;
//!     let value = ch.to_digit(10)?;
//!     Some(Success(value, &input[1..]))
//! }
//!
//! assert_eq!(digit.parse("7up"), Some(Success(7, "up")));
//! assert_eq!(digit.parse("up"), None);
//! ```
//!
//! Parsers are expected to be pure: given the same input they return the same
//! result. The repetition combinators rely on this, since they may apply the
//! same parser many times over overlapping input.
//!
//! # Repetition
//! [`basic::match_n_count`] greedily counts repetitions of a parser separated
//! by a separator and reports whether the repetitions covered the whole input.
//! [`basic::match_n`] requires *exactly* `N` repetitions and collects them into
//! an array `[T; N]`. Neither requires the input to be fully consumed on its
//! own; wrap a parser with [`basic::match_entirety`] for that.
//!
//! # Features
//! * `alloc` - Enables [`basic::match_n_vec`] and [`IntoInput`] impls for
//!   owned containers such as [`&String`](alloc::string::String). Enabled by
//!   default.
//! * `ascii` - Enables the [`ascii`](./ascii) module of ASCII leaf parsers.
//!   Enabled by default.
//! * `unicode` - Enables the [`unicode`](./unicode) module of leaf parsers
//!   driven by Unicode character properties. Enabled by default.

#[cfg(any(doc, feature = "alloc"))]
extern crate alloc;

mod input;
mod span;

pub mod basic;

#[cfg(feature = "ascii")]
pub mod ascii;
#[cfg(feature = "unicode")]
pub mod unicode;

pub use basic::MatchNCount;
pub use input::*;
pub use span::*;

/// The `ptcore` prelude.
pub mod prelude {
    pub use super::basic::{eof, match_entirety, match_n, match_n_count, pop, take_while1};
    pub use super::{Input, IntoInput, MatchNCount, PResult, Parse, Span, Success};
}

/// A successful parse: the parsed value and the remaining, unparsed input.
///
/// Equality is structural: two [`Success`] values are equal when both the
/// values and the *contents* of the remaining input are equal. Ordering
/// compares the values first and the remaining input second.
///
/// The default [`Success`] holds a default value and an empty remaining
/// input.
///
/// ```
/// # use ptcore::Success;
/// let done: Success<i32, &str> = Success::default();
/// assert_eq!(done.0, 0);
/// assert!(done.input_done());
/// assert!(!Success(12, "remaining").input_done());
/// ```
#[derive(Debug, Clone, Copy, Default, Hash, PartialOrd, Ord)]
pub struct Success<T, I>(
    /// The parsed value
    pub T,
    /// The remaining unparsed input
    pub I,
);

/// The value returned by every parser.
///
/// [`None`] means the parser did not match. There are no error kinds or
/// messages; callers treat [`None`] as "try something else".
pub type PResult<T, I> = Option<Success<T, I>>;

/// The value type produced by the parser `P` over input `I`.
pub type ParsedOf<P, I> = <P as Parse<I>>::Parsed;

/// The full result type returned by the parser `P` over input `I`.
pub type PResultOf<P, I> = PResult<ParsedOf<P, I>, I>;

/// Trait implemented by all parsers.
///
/// Most parsers never implement [`Parse`] by hand: every
/// `Fn(I) -> PResult<T, I>` is a parser through a blanket implementation. A
/// function with any other return type is not a parser:
///
/// ```compile_fail
/// use ptcore::Parse;
///
/// fn not_a_parser(_input: &str) -> i32 {
///     12
/// }
///
/// let _ = not_a_parser.parse("12");
/// ```
pub trait Parse<I: Input> {
    /// The value type produced on success.
    type Parsed: Sized;

    /// Parses the provided input.
    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I>
    where
        N: IntoInput<Input = I>;

    /// Creates a parser whose parsed value is transformed by `map_fn`.
    ///
    /// See also [`basic::map`].
    ///
    /// # Example
    /// ```
    /// # use ptcore::prelude::*;
    /// use ptcore::ascii::digit;
    ///
    /// let doubled = digit.map(|d: u8| u32::from(d) * 2);
    /// assert_eq!(doubled.parse("4!"), Some(Success(8, "!")));
    /// ```
    #[inline]
    fn map<F, R>(self, map_fn: F) -> impl Parse<I, Parsed = R>
    where
        Self: Sized,
        F: Fn(Self::Parsed) -> R,
    {
        basic::map(self, map_fn)
    }

    /// Creates a parser that only succeeds when `verify_fn` accepts the
    /// parsed value.
    ///
    /// See also [`basic::verify`].
    #[inline]
    fn verify<F>(self, verify_fn: F) -> impl Parse<I, Parsed = Self::Parsed>
    where
        Self: Sized,
        F: Fn(&Self::Parsed) -> bool,
    {
        basic::verify(self, verify_fn)
    }

    /// Creates a parser that fails unless `self` consumes all of its input.
    ///
    /// See also [`basic::match_entirety`].
    ///
    /// # Example
    /// ```
    /// # use ptcore::prelude::*;
    /// use ptcore::ascii::digit;
    ///
    /// let whole = digit.match_entirety();
    /// assert_eq!(whole.parse("0"), Some(Success(0, "")));
    /// assert_eq!(whole.parse("0a"), None);
    /// ```
    #[inline]
    fn match_entirety(self) -> impl Parse<I, Parsed = Self::Parsed>
    where
        Self: Sized,
    {
        basic::match_entirety(self)
    }

    /// Creates a parser that matches `self` exactly `N` times, separated by
    /// `separator`.
    ///
    /// See also [`basic::match_n`].
    ///
    /// # Example
    /// ```
    /// # use ptcore::prelude::*;
    /// use ptcore::ascii::{digit, one_of, AsciiStr};
    ///
    /// let pair = digit.match_n::<2, _>(one_of(AsciiStr::from_ascii(",").unwrap()));
    /// assert_eq!(pair.parse("1,2,3"), Some(Success([1, 2], ",3")));
    /// assert_eq!(pair.parse("1,"), None);
    /// ```
    #[inline]
    fn match_n<const N: usize, S>(self, separator: S) -> impl Parse<I, Parsed = [Self::Parsed; N]>
    where
        Self: Sized,
        S: Parse<I>,
    {
        basic::match_n::<N, _, _, _>(self, separator)
    }

    /// Creates a parser that matches `self` exactly `count` times, separated
    /// by `separator`, collecting the values into a [`Vec`](alloc::vec::Vec).
    ///
    /// See also [`basic::match_n_vec`].
    #[cfg(feature = "alloc")]
    #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
    #[inline]
    fn match_n_vec<S>(
        self,
        count: usize,
        separator: S,
    ) -> impl Parse<I, Parsed = alloc::vec::Vec<Self::Parsed>>
    where
        Self: Sized,
        S: Parse<I>,
    {
        basic::match_n_vec(count, self, separator)
    }

    /// Counts how many times `self` repeats at the start of `input`, separated
    /// by `separator`.
    ///
    /// See also [`basic::match_n_count`].
    #[inline]
    fn match_n_count<S, N>(&self, separator: S, input: N) -> MatchNCount
    where
        Self: Sized,
        S: Parse<I>,
        N: IntoInput<Input = I>,
    {
        basic::match_n_count(self, &separator, input)
    }
}

impl<F, T, I> Parse<I> for F
where
    F: Fn(I) -> PResult<T, I>,
    I: Input,
{
    type Parsed = T;

    fn parse<N>(&self, input: N) -> PResult<T, I>
    where
        N: IntoInput<Input = I>,
    {
        (*self)(input.into_input())
    }
}

impl<T, I: Input> Success<T, I> {
    /// Returns `true` if no input remains after this parse.
    pub fn input_done(&self) -> bool {
        self.1.is_empty()
    }

    /// Transforms the parsed value, keeping the remaining input.
    pub fn map<F, R>(self, map_fn: F) -> Success<R, I>
    where
        F: FnOnce(T) -> R,
    {
        let Success(val, rem) = self;
        Success(map_fn(val), rem)
    }
}

impl<T, I> From<Success<T, I>> for (T, I) {
    fn from(Success(val, rem): Success<T, I>) -> (T, I) {
        (val, rem)
    }
}

impl<T, I> From<(T, I)> for Success<T, I> {
    fn from((val, rem): (T, I)) -> Self {
        Self(val, rem)
    }
}

impl<LT, LI, RT, RI> PartialEq<Success<RT, RI>> for Success<LT, LI>
where
    LT: PartialEq<RT>,
    LI: PartialEq<RI>,
{
    fn eq(&self, other: &Success<RT, RI>) -> bool {
        PartialEq::eq(&self.0, &other.0) && PartialEq::eq(&self.1, &other.1)
    }
}

impl<T, I> Eq for Success<T, I>
where
    T: Eq,
    I: Eq,
{
}

#[cfg(test)]
mod test {
    use super::*;

    fn digit(input: &str) -> PResult<i32, &str> {
        let ch = input.chars().next()?;
        let value = ch.to_digit(10)?;
        Some(Success(value as i32, &input[1..]))
    }

    fn nothing(_input: &str) -> PResult<i32, &str> {
        None
    }

    fn assert_parser<I: Input, P: Parse<I>>(_parser: &P) {}

    #[test]
    fn functions_and_closures_are_parsers() {
        assert_parser::<&str, _>(&nothing);
        assert_parser::<&str, _>(&digit);
        assert_parser::<&'static str, _>(&|input: &'static str| Some(Success((), input)));
        assert_eq!(nothing.parse("1"), None);
    }

    #[test]
    fn type_projections() {
        type Digit = fn(&'static str) -> PResult<i32, &'static str>;

        let value: ParsedOf<Digit, &'static str> = 5;
        let res: PResultOf<Digit, &'static str> = (digit as Digit).parse("5");
        assert_eq!(res, Some(Success(value, "")));
    }

    #[test]
    fn default_success_is_done() {
        let done: Success<i32, &str> = Success::default();
        assert_eq!(done.0, 0);
        assert!(done.input_done());

        let mut pending = done;
        pending.1 = "Hi";
        assert!(!pending.input_done());
    }

    #[test]
    fn success_equality_is_structural() {
        let base = Success(12, "remaining");
        let diff = Success(13, "remaining2");

        let owned = std::string::String::from("remaining");
        assert_eq!(base, Success(12, owned.as_str()));
        assert_ne!(base, Success(diff.0, base.1));
        assert_ne!(base, Success(base.0, diff.1));
    }

    #[test]
    fn success_ordering_is_lexicographic() {
        assert!(Success(1, "b") < Success(2, "a"));
        assert!(Success(1, "a") < Success(1, "b"));
        assert_eq!(Success(1, "a").cmp(&Success(1, "a")), core::cmp::Ordering::Equal);
    }

    #[test]
    fn success_tuple_conversions() {
        let pair: (i32, &str) = Success(3, "x").into();
        assert_eq!(pair, (3, "x"));
        assert_eq!(Success::from(pair), Success(3, "x"));
        assert_eq!(Success(3, "x").map(|v| v + 1), Success(4, "x"));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn parse_accepts_owned_containers() {
        let text = std::string::String::from("9z");
        assert_eq!(digit.parse(&text), Some(Success(9, "z")));
    }
}
