//! Numeral repertoire index for a locale's numbering system.
//!
//! CLDR numbering systems are positional: ten digit characters with values
//! 0 through 9. The index is derived by rendering a reference integer whose
//! decimal digits run 9 down to 0, so the reversed rendering lists the
//! locale's digit characters in value order.

use fixed_decimal::Decimal;
use icu_decimal::DecimalFormatter;

/// Reference integer whose digits are 9..=0 in descending order.
const DIGIT_PROBE: u64 = 9_876_543_210;

/// Maps each numeral character of a locale to its value 0-9.
///
/// Holds exactly ten characters. Numbering systems that spell a digit with
/// more than one code point are out of scope and rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitIndex {
    /// Digit characters indexed by numeric value.
    digits: [char; 10],
}

impl DigitIndex {
    /// Derive the index from a formatter configured without grouping.
    ///
    /// Returns `None` if the rendered probe is not exactly ten characters,
    /// which happens for numbering systems outside the single-code-point
    /// scope of this crate.
    pub(crate) fn from_formatter(formatter: &DecimalFormatter) -> Option<Self> {
        let rendered = formatter.format_to_string(&Decimal::from(DIGIT_PROBE));
        let reversed: Vec<char> = rendered.chars().rev().collect();
        let digits: [char; 10] = reversed.try_into().ok()?;
        Some(Self { digits })
    }

    /// The numeric value of `c`, if `c` is one of the locale's digits.
    pub fn value_of(&self, c: char) -> Option<u8> {
        self.digits.iter().position(|&d| d == c).map(|i| i as u8)
    }

    /// Whether `c` belongs to the locale's numeral repertoire.
    pub fn contains(&self, c: char) -> bool {
        self.digits.contains(&c)
    }
}
