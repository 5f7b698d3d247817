//! Generic parser and combinator building blocks.
//!
//! Everything in this module works for any [`Input`] type. The repetition
//! combinators ([`match_n`], [`match_n_vec`] and [`match_n_count`]) share a
//! single repetition algorithm: apply the element parser once, then keep
//! alternating separator and element, where each element is parsed from what
//! the preceding separator left over. They only differ in when they stop and
//! what they report.
//!
//! Most combinators that produce a new parser are also available as methods on
//! the [`Parse`] trait.

use crate::{Input, IntoInput, PResult, Parse, Span, Success};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem::MaybeUninit;

/// Summary returned by [`match_n_count`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MatchNCount {
    /// Number of successful applications of the element parser.
    pub count: usize,
    /// `true` if the last successful application consumed all remaining input.
    pub full_match: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    First,
    Separator,
    Done,
}

/// Alternating element/separator applications, yielding each element parse.
///
/// The iterator is fused: once an application fails, it yields nothing more.
#[derive(Debug)]
struct Repetitions<'a, P, S, I> {
    parser: &'a P,
    separator: &'a S,
    rem: I,
    step: Step,
}

impl<'a, P, S, I> Repetitions<'a, P, S, I>
where
    P: Parse<I>,
    S: Parse<I>,
    I: Input,
{
    fn new(parser: &'a P, separator: &'a S, input: I) -> Self {
        Self {
            parser,
            separator,
            rem: input,
            step: Step::First,
        }
    }
}

impl<P, S, I> Iterator for Repetitions<'_, P, S, I>
where
    P: Parse<I>,
    S: Parse<I>,
    I: Input,
{
    type Item = Success<P::Parsed, I>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = match core::mem::replace(&mut self.step, Step::Done) {
            Step::First => self.rem.clone(),
            Step::Separator => self.separator.parse(self.rem.clone())?.1,
            Step::Done => return None,
        };
        let found = self.parser.parse(start)?;
        self.rem = found.1.clone();
        self.step = Step::Separator;
        Some(found)
    }
}

impl<P, S, I> FusedIterator for Repetitions<'_, P, S, I>
where
    P: Parse<I>,
    S: Parse<I>,
    I: Input,
{
}

/// Parses a single symbol.
///
/// Fails only at the end of input.
///
/// # Example
/// ```
/// # use ptcore::prelude::*;
/// assert_eq!(pop.parse("ab"), Some(Success('a', "b")));
/// assert_eq!(pop::<&str>.parse(""), None);
/// ```
pub fn pop<I: Input>(mut input: I) -> PResult<I::Symbol, I> {
    let symbol = input.next()?;
    Some(Success(symbol, input))
}

/// Succeeds, consuming nothing, only at the end of input.
pub fn eof<I: Input>(input: I) -> PResult<(), I> {
    if input.is_empty() {
        Some(Success((), input))
    } else {
        None
    }
}

#[derive(Debug, Clone)]
struct MapParser<P, F, R, I>(P, F, PhantomData<fn() -> (R, I)>)
where
    P: Parse<I>,
    F: Fn(P::Parsed) -> R,
    I: Input;

impl<P, F, R, I> Parse<I> for MapParser<P, F, R, I>
where
    P: Parse<I>,
    F: Fn(P::Parsed) -> R,
    I: Input,
{
    type Parsed = R;

    fn parse<N>(&self, input: N) -> PResult<R, I>
    where
        N: IntoInput<Input = I>,
    {
        self.0.parse(input).map(|res| res.map(&self.1))
    }
}

/// Creates a parser whose parsed value is transformed by `map_fn`.
#[inline]
pub const fn map<P, F, R, I>(parser: P, map_fn: F) -> impl Parse<I, Parsed = R>
where
    P: Parse<I>,
    F: Fn(P::Parsed) -> R,
    I: Input,
{
    MapParser(parser, map_fn, PhantomData)
}

#[derive(Debug, Clone)]
struct VerifyParser<P, F, I>(P, F, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    F: Fn(&P::Parsed) -> bool,
    I: Input;

impl<P, F, I> Parse<I> for VerifyParser<P, F, I>
where
    P: Parse<I>,
    F: Fn(&P::Parsed) -> bool,
    I: Input,
{
    type Parsed = P::Parsed;

    fn parse<N>(&self, input: N) -> PResult<P::Parsed, I>
    where
        N: IntoInput<Input = I>,
    {
        self.0.parse(input).filter(|res| (self.1)(&res.0))
    }
}

/// Creates a parser that fails when `verify_fn` rejects the parsed value.
///
/// # Example
/// ```
/// # use ptcore::prelude::*;
/// use ptcore::basic::verify;
///
/// let vowel = verify(pop, |ch: &char| "aeiou".contains(*ch));
/// assert_eq!(vowel.parse("ox"), Some(Success('o', "x")));
/// assert_eq!(vowel.parse("xo"), None);
/// ```
#[inline]
pub const fn verify<P, F, I>(parser: P, verify_fn: F) -> impl Parse<I, Parsed = P::Parsed>
where
    P: Parse<I>,
    F: Fn(&P::Parsed) -> bool,
    I: Input,
{
    VerifyParser(parser, verify_fn, PhantomData)
}

#[derive(Debug, Clone)]
struct TakeWhile1Parser<F, I>(F, PhantomData<fn() -> I>)
where
    F: Fn(&I::Symbol) -> bool,
    I: Input;

impl<F, I> Parse<I> for TakeWhile1Parser<F, I>
where
    F: Fn(&I::Symbol) -> bool,
    I: Input,
{
    type Parsed = Span<I>;

    fn parse<N>(&self, input: N) -> PResult<Span<I>, I>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let mut rem = input.clone();
        let mut taken = false;
        loop {
            let mut ahead = rem.clone();
            match ahead.next() {
                Some(symbol) if (self.0)(&symbol) => {
                    rem = ahead;
                    taken = true;
                }
                _ => break,
            }
        }
        if taken {
            Some(Success(Span::new(input, rem.clone()), rem))
        } else {
            None
        }
    }
}

/// Creates a parser that consumes the longest non-empty run of symbols
/// satisfying `pred`.
///
/// The parsed value is the [`Span`] of consumed input.
///
/// # Example
/// ```
/// # use ptcore::prelude::*;
/// let spaces = take_while1(|ch: &char| *ch == ' ');
/// let Success(span, rem) = spaces.parse("   x").unwrap();
/// assert_eq!(<&str>::from(span), "   ");
/// assert_eq!(rem, "x");
/// assert!(spaces.parse("x").is_none());
/// ```
#[inline]
pub const fn take_while1<F, I>(pred: F) -> impl Parse<I, Parsed = Span<I>>
where
    F: Fn(&I::Symbol) -> bool,
    I: Input,
{
    TakeWhile1Parser(pred, PhantomData)
}

#[derive(Debug, Clone)]
struct MatchEntiretyParser<P, I>(P, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    I: Input;

impl<P, I> Parse<I> for MatchEntiretyParser<P, I>
where
    P: Parse<I>,
    I: Input,
{
    type Parsed = P::Parsed;

    fn parse<N>(&self, input: N) -> PResult<P::Parsed, I>
    where
        N: IntoInput<Input = I>,
    {
        self.0.parse(input).filter(Success::input_done)
    }
}

/// Creates a parser that only succeeds if `parser` consumes all of its input.
///
/// A partial match of `parser` is a failure. A full match is returned
/// unchanged. Empty input is handed to `parser` like any other input.
///
/// # Example
/// ```
/// # use ptcore::prelude::*;
/// let any = match_entirety(pop);
/// assert_eq!(any.parse("a"), Some(Success('a', "")));
/// assert_eq!(any.parse("ab"), None);
/// assert_eq!(any.parse(""), None);
/// ```
#[inline]
pub const fn match_entirety<P, I>(parser: P) -> impl Parse<I, Parsed = P::Parsed>
where
    P: Parse<I>,
    I: Input,
{
    MatchEntiretyParser(parser, PhantomData)
}

/// Counts the repetitions of `parser`, separated by `separator`, at the start
/// of `input`.
///
/// Matching is greedy and never backtracks over a consumed separator. The
/// first application of `parser` is made directly on `input`; after that,
/// `separator` is applied and `parser` runs on whatever the separator left.
/// Counting stops as soon as either fails, or as soon as an element consumes
/// all remaining input, in which case [`MatchNCount::full_match`] is set.
///
/// Separators are never counted. A separator that is not followed by an
/// element leaves the count unchanged and the match not full.
///
/// # Example
/// ```
/// # use ptcore::prelude::*;
/// use ptcore::ascii::{digit, run_of, AsciiStr};
///
/// let sep = run_of(AsciiStr::from_ascii(" |").unwrap());
/// assert_eq!(
///     match_n_count(&digit, &sep, "1|2"),
///     MatchNCount { count: 2, full_match: true },
/// );
/// assert_eq!(
///     match_n_count(&digit, &sep, "1|2|"),
///     MatchNCount { count: 2, full_match: false },
/// );
/// assert_eq!(match_n_count(&digit, &sep, "C"), MatchNCount::default());
/// ```
pub fn match_n_count<P, S, I, N>(parser: &P, separator: &S, input: N) -> MatchNCount
where
    P: Parse<I>,
    S: Parse<I>,
    I: Input,
    N: IntoInput<Input = I>,
{
    let mut counted = MatchNCount::default();
    for Success(_, rem) in Repetitions::new(parser, separator, input.into_input()) {
        counted.count += 1;
        if rem.is_empty() {
            counted.full_match = true;
            break;
        }
    }
    counted
}

#[derive(Debug, Clone)]
struct MatchNParser<P, S, I, const N: usize>(P, S, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    S: Parse<I>,
    I: Input;

impl<P, S, I, const N: usize> Parse<I> for MatchNParser<P, S, I, N>
where
    P: Parse<I>,
    S: Parse<I>,
    I: Input,
{
    type Parsed = [P::Parsed; N];

    fn parse<M>(&self, input: M) -> PResult<Self::Parsed, I>
    where
        M: IntoInput<Input = I>,
    {
        let mut reps = Repetitions::new(&self.0, &self.1, input.into_input());
        let mut values: [MaybeUninit<P::Parsed>; N] = [const { MaybeUninit::uninit() }; N];
        let mut rem = None;
        for idx in 0..N {
            match reps.next() {
                Some(Success(val, new_rem)) => {
                    values[idx].write(val);
                    rem = Some(new_rem);
                }
                None => {
                    for val in &mut values[..idx] {
                        // SAFETY: every slot before `idx` was written above.
                        unsafe { val.assume_init_drop() };
                    }
                    return None;
                }
            }
        }
        let rem = rem?;
        // SAFETY: all `N` slots were written, and `MaybeUninit<T>` has the
        // same layout as `T`.
        let values = unsafe { core::ptr::read(values.as_ptr().cast::<[P::Parsed; N]>()) };
        Some(Success(values, rem))
    }
}

/// Creates a parser that matches `parser` exactly `N` times, separated by
/// `separator`.
///
/// The values are returned in input order as `[P::Parsed; N]`. Any missing
/// separator or element before the `N`th element fails the whole parser;
/// there is no partial result. The input after the `N`th element is returned
/// as the remainder and need not be empty; combine with [`match_entirety`]
/// to require that.
///
/// `N` must be at least 1, which is checked at compile time.
///
/// # Example
/// ```
/// # use ptcore::prelude::*;
/// use ptcore::ascii::{digit, run_of, AsciiStr};
///
/// let sep = run_of(AsciiStr::from_ascii(" |").unwrap());
/// let two = match_n::<2, _, _, &str>(digit, sep);
/// assert_eq!(two.parse("1|2|C"), Some(Success([1, 2], "|C")));
/// assert_eq!(two.parse("1|C"), None);
/// ```
#[inline]
pub const fn match_n<const N: usize, P, S, I>(
    parser: P,
    separator: S,
) -> impl Parse<I, Parsed = [P::Parsed; N]>
where
    P: Parse<I>,
    S: Parse<I>,
    I: Input,
{
    const { assert!(N > 0, "match_n requires at least one repetition") };
    MatchNParser(parser, separator, PhantomData)
}

#[cfg(feature = "alloc")]
#[derive(Debug, Clone)]
struct MatchNVecParser<P, S, I>(usize, P, S, PhantomData<fn() -> I>)
where
    P: Parse<I>,
    S: Parse<I>,
    I: Input;

#[cfg(feature = "alloc")]
impl<P, S, I> Parse<I> for MatchNVecParser<P, S, I>
where
    P: Parse<I>,
    S: Parse<I>,
    I: Input,
{
    type Parsed = alloc::vec::Vec<P::Parsed>;

    fn parse<N>(&self, input: N) -> PResult<Self::Parsed, I>
    where
        N: IntoInput<Input = I>,
    {
        let input = input.into_input();
        let mut reps = Repetitions::new(&self.1, &self.2, input.clone());
        let mut values = alloc::vec::Vec::with_capacity(self.0);
        let mut rem = input;
        for _ in 0..self.0 {
            let Success(val, new_rem) = reps.next()?;
            values.push(val);
            rem = new_rem;
        }
        Some(Success(values, rem))
    }
}

/// Creates a parser that matches `parser` exactly `count` times, separated by
/// `separator`, collecting the values into a [`Vec`](alloc::vec::Vec).
///
/// This is [`match_n`] with the count chosen at runtime. A `count` of zero
/// always succeeds with an empty vector and consumes nothing.
///
/// # Example
/// ```
/// # use ptcore::prelude::*;
/// use ptcore::basic::match_n_vec;
/// use ptcore::ascii::{digit, one_of, AsciiStr};
///
/// let three = match_n_vec(3, digit, one_of(AsciiStr::from_ascii(",").unwrap()));
/// assert_eq!(three.parse("1,2,3,4"), Some(Success(vec![1, 2, 3], ",4")));
/// assert_eq!(three.parse("1,2"), None);
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[inline]
pub const fn match_n_vec<P, S, I>(
    count: usize,
    parser: P,
    separator: S,
) -> impl Parse<I, Parsed = alloc::vec::Vec<P::Parsed>>
where
    P: Parse<I>,
    S: Parse<I>,
    I: Input,
{
    MatchNVecParser(count, parser, separator, PhantomData)
}
