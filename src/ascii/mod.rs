//! Leaf parsers for ASCII text.
//!
//! Any input whose symbols are [`char`], [`u8`] or [`AsciiChar`] is an
//! [`AsciiInput`]. The parsers here fail on symbols outside the ASCII range,
//! so the same digit parser works over `&str`, `&[u8]` and `&AsciiStr`.

use crate::{basic::take_while1, Input, IntoInput, PResult, Parse, Span, Success};
use ascii::ToAsciiChar;
use core::marker::PhantomData;

#[doc(inline)]
pub use ascii::{AsciiChar, AsciiStr};

#[cfg(feature = "alloc")]
pub use ascii::AsciiString;

/// A symbol that may be an ASCII character.
pub trait AsciiSymbol: Copy {
    /// Returns the symbol as an [`AsciiChar`], or [`None`] if it is not ASCII.
    fn to_ascii(self) -> Option<AsciiChar>;
}

/// Input that can be read one ASCII character at a time.
pub trait AsciiInput: Input {
    /// Takes one ASCII character off the front of the input.
    fn parse_char(self) -> PResult<AsciiChar, Self>;
}

impl AsciiSymbol for core::primitive::char {
    fn to_ascii(self) -> Option<AsciiChar> {
        self.to_ascii_char().ok()
    }
}

impl AsciiSymbol for u8 {
    fn to_ascii(self) -> Option<AsciiChar> {
        self.to_ascii_char().ok()
    }
}

impl AsciiSymbol for AsciiChar {
    fn to_ascii(self) -> Option<AsciiChar> {
        Some(self)
    }
}

impl<I> AsciiInput for I
where
    I: Input,
    I::Symbol: AsciiSymbol,
{
    fn parse_char(mut self) -> PResult<AsciiChar, Self> {
        let ch = self.next()?.to_ascii()?;
        Some(Success(ch, self))
    }
}

/// Parses one ASCII character.
pub fn char<I: AsciiInput>(input: I) -> PResult<AsciiChar, I> {
    input.parse_char()
}

/// Parses one ASCII decimal digit, yielding its value.
///
/// # Example
/// ```
/// # use ptcore::prelude::*;
/// use ptcore::ascii::digit;
///
/// assert_eq!(digit.parse("7x"), Some(Success(7, "x")));
/// assert_eq!(digit.parse(b"9".as_slice()), Some(Success(9, b"".as_slice())));
/// assert_eq!(digit.parse("x7"), None);
/// ```
pub fn digit<I: AsciiInput>(input: I) -> PResult<u8, I> {
    let Success(ch, rem) = input.parse_char()?;
    if ch.is_ascii_digit() {
        Some(Success(ch.as_byte() - b'0', rem))
    } else {
        None
    }
}

#[derive(Debug, Clone)]
struct OneOfParser<S, I>(S, PhantomData<fn() -> I>)
where
    S: AsRef<AsciiStr>,
    I: AsciiInput;

impl<S, I> Parse<I> for OneOfParser<S, I>
where
    S: AsRef<AsciiStr>,
    I: AsciiInput,
{
    type Parsed = AsciiChar;

    fn parse<N>(&self, input: N) -> PResult<AsciiChar, I>
    where
        N: IntoInput<Input = I>,
    {
        input
            .into_input()
            .parse_char()
            .filter(|Success(ch, _)| self.0.as_ref().as_slice().contains(ch))
    }
}

/// Creates a parser of one ASCII character contained in `set`.
#[inline]
pub const fn one_of<S, I>(set: S) -> impl Parse<I, Parsed = AsciiChar>
where
    S: AsRef<AsciiStr>,
    I: AsciiInput,
{
    OneOfParser(set, PhantomData)
}

/// Creates a parser of a non-empty run of ASCII characters contained in `set`.
///
/// The parsed value is the consumed [`Span`]. This is the usual shape of a
/// separator: any mix of, say, spaces and bars between two elements.
///
/// # Example
/// ```
/// # use ptcore::prelude::*;
/// use ptcore::ascii::{run_of, AsciiStr};
///
/// let sep = run_of(AsciiStr::from_ascii(" |").unwrap());
/// let Success(span, rem) = sep.parse(" | 2").unwrap();
/// assert_eq!(<&str>::from(span), " | ");
/// assert_eq!(rem, "2");
/// assert!(sep.parse("2").is_none());
/// ```
pub fn run_of<S, I>(set: S) -> impl Parse<I, Parsed = Span<I>>
where
    S: AsRef<AsciiStr>,
    I: Input,
    I::Symbol: AsciiSymbol,
{
    take_while1(move |symbol: &I::Symbol| {
        symbol
            .to_ascii()
            .is_some_and(|ch| set.as_ref().as_slice().contains(&ch))
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::MatchNCount;

    fn bars() -> &'static AsciiStr {
        AsciiStr::from_ascii(" |").unwrap()
    }

    #[test]
    fn char_rejects_non_ascii() {
        assert_eq!(char.parse("a"), Some(Success(AsciiChar::a, "")));
        assert_eq!(char.parse("é"), None);
        assert_eq!(char.parse(&[0x80u8][..]), None);
        assert_eq!(char::<&str>.parse(""), None);
    }

    #[test]
    fn digit_over_every_ascii_input() {
        assert_eq!(digit.parse("0a"), Some(Success(0, "a")));
        assert_eq!(digit.parse(&b"35"[..]), Some(Success(3, &b"5"[..])));

        let text = AsciiStr::from_ascii("8!").unwrap();
        let Success(value, rem) = digit.parse(text).unwrap();
        assert_eq!(value, 8);
        assert_eq!(rem.as_str(), "!");

        for ch in ['a', 'C', ' ', '|', '/', ':'] {
            let text = ch.to_string();
            assert_eq!(digit.parse(text.as_str()), None, "{ch:?}");
        }
    }

    #[test]
    fn one_of_set() {
        let p = one_of(AsciiStr::from_ascii("+-").unwrap());
        assert_eq!(p.parse("-1"), Some(Success(AsciiChar::Minus, "1")));
        assert_eq!(p.parse("*1"), None);
    }

    #[test]
    fn run_of_consumes_longest_run() {
        let p = run_of(bars());
        let Success(span, rem) = p.parse(" || 3").unwrap();
        assert_eq!(<&str>::from(span), " || ");
        assert_eq!(rem, "3");

        let Success(span, rem) = p.parse("| |").unwrap();
        assert_eq!(<&str>::from(span), "| |");
        assert_eq!(rem, "");

        assert!(p.parse("").is_none());
        assert!(p.parse("C").is_none());
    }

    #[test]
    fn digit_lists() {
        let sep = run_of(bars());
        let count = |text: &str| digit.match_n_count(run_of(bars()), text);

        assert_eq!(count("1|2"), MatchNCount { count: 2, full_match: true });
        assert_eq!(count("1|2|"), MatchNCount { count: 2, full_match: false });
        assert_eq!(count(""), MatchNCount { count: 0, full_match: false });
        assert_eq!(count("C"), MatchNCount { count: 0, full_match: false });

        let one = digit.match_n::<1, _>(run_of(bars()));
        assert_eq!(one.parse("1"), Some(Success([1], "")));
        assert_eq!(one.parse(""), None);

        let two = digit.match_n::<2, _>(sep);
        assert_eq!(two.parse("1|2"), Some(Success([1, 2], "")));
        assert_eq!(two.parse("1|C"), None);

        let whole = digit.match_entirety();
        assert_eq!(whole.parse("0"), Some(Success(0, "")));
        assert_eq!(whole.parse("0a"), None);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn owned_ascii_string_input() {
        let text = AsciiString::from_ascii("4 5 6").unwrap();
        let p = digit.match_n_vec(3, run_of(bars()));
        let Success(values, rem) = p.parse(&text).unwrap();
        assert_eq!(values, vec![4, 5, 6]);
        assert!(rem.is_empty());
    }
}
