//! Leaf parsers driven by Unicode character properties.
//!
//! These parsers work over any input of [`char`] symbols, such as `&str`.
//! Character classes come from the Unicode Character Database through
//! [`icu_properties`].

use crate::{
    basic::{pop, take_while1, verify},
    Input, PResult, Parse, Span,
};
use icu_properties::props::{self as icup, BinaryProperty, EnumeratedProperty};

/// A Unicode character class.
pub trait Property: core::fmt::Debug + Copy {
    /// Returns `true` if `ch` belongs to this class.
    fn contains(self, ch: core::primitive::char) -> bool;
}

macro_rules! def_bool_prop {
    ($(#[$attr:meta])* $ty:ident => $prop:ty) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $ty;

        impl Property for $ty {
            fn contains(self, ch: core::primitive::char) -> bool {
                <$prop as BinaryProperty>::for_char(ch)
            }
        }
    };
}

def_bool_prop!(
    /// The `White_Space` property.
    WhiteSpace => icup::WhiteSpace
);
def_bool_prop!(
    /// The `Alphabetic` property.
    Alphabetic => icup::Alphabetic
);
def_bool_prop!(
    /// The `XID_Start` property: characters that may begin an identifier.
    XidStart => icup::XidStart
);
def_bool_prop!(
    /// The `XID_Continue` property: characters that may continue an identifier.
    XidContinue => icup::XidContinue
);

/// Characters of general category `Nd` (decimal digits in any script).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalNumber;

impl Property for DecimalNumber {
    fn contains(self, ch: core::primitive::char) -> bool {
        <icup::GeneralCategory as EnumeratedProperty>::for_char(ch)
            == icup::GeneralCategory::DecimalNumber
    }
}

/// Parses any one character.
pub fn char<I>(input: I) -> PResult<core::primitive::char, I>
where
    I: Input<Symbol = core::primitive::char>,
{
    pop(input)
}

/// Creates a parser of one character having `prop`.
///
/// # Example
/// ```
/// # use ptcore::prelude::*;
/// use ptcore::unicode::{char_with_prop, DecimalNumber};
///
/// let digit = char_with_prop(DecimalNumber);
/// assert_eq!(digit.parse("٣!"), Some(Success('٣', "!")));
/// assert_eq!(digit.parse("x"), None);
/// ```
pub fn char_with_prop<P, I>(prop: P) -> impl Parse<I, Parsed = core::primitive::char>
where
    P: Property,
    I: Input<Symbol = core::primitive::char>,
{
    verify(pop::<I>, move |ch: &core::primitive::char| prop.contains(*ch))
}

/// Creates a parser of a non-empty run of characters having `prop`.
pub fn run_with_prop<P, I>(prop: P) -> impl Parse<I, Parsed = Span<I>>
where
    P: Property,
    I: Input<Symbol = core::primitive::char>,
{
    take_while1(move |ch: &core::primitive::char| prop.contains(*ch))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{MatchNCount, Success};

    #[test]
    fn properties() {
        assert!(WhiteSpace.contains('\u{3000}'));
        assert!(!WhiteSpace.contains('x'));
        assert!(Alphabetic.contains('é'));
        assert!(!Alphabetic.contains('1'));
        assert!(XidStart.contains('a'));
        assert!(!XidStart.contains('1'));
        assert!(XidContinue.contains('1'));
        assert!(DecimalNumber.contains('7'));
        assert!(DecimalNumber.contains('\u{0663}'));
        assert!(!DecimalNumber.contains('x'));
    }

    #[test]
    fn char_parsers() {
        assert_eq!(char.parse("éa"), Some(Success('é', "a")));
        assert_eq!(char::<&str>.parse(""), None);

        let space = char_with_prop(WhiteSpace);
        assert_eq!(space.parse("\u{3000}x"), Some(Success('\u{3000}', "x")));
        assert_eq!(space.parse("x"), None);
    }

    #[test]
    fn runs_of_a_property() {
        let Success(span, rem) = run_with_prop(WhiteSpace).parse(" \t\n x").unwrap();
        assert_eq!(<&str>::from(span), " \t\n ");
        assert_eq!(rem, "x");
        assert!(run_with_prop(WhiteSpace).parse("x").is_none());
    }

    #[test]
    fn word_lists() {
        let word = run_with_prop(Alphabetic);
        let gap = run_with_prop(WhiteSpace);
        assert_eq!(
            word.match_n_count(gap, "héllo  wörld"),
            MatchNCount {
                count: 2,
                full_match: true
            },
        );

        let pair = run_with_prop(Alphabetic)
            .map(<&str>::from)
            .match_n::<2, _>(run_with_prop(WhiteSpace));
        assert_eq!(
            pair.parse("grüße an alle"),
            Some(Success(["grüße", "an"], " alle"))
        );
    }
}
