//! Locale-aware numeral string parsing.
//!
//! [`NumberParser`] queries the locale service (ICU4X decimal formatting)
//! twice at construction, once for the digit repertoire and once for the
//! separator characters. Parsing then normalizes input to plain ASCII and
//! applies a strict lexical grammar.

use std::str::FromStr;

use icu_decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use icu_decimal::{DecimalFormatter, DecimalFormatterPreferences};
use icu_locale_core::Locale;
use winnow::ascii::digit0;
use winnow::combinator::opt;
use winnow::prelude::*;
use winnow::token::one_of;

use crate::digits::DigitIndex;
use crate::error::BuildError;
use crate::separators::SeparatorSet;
use crate::system::system_locale;

/// Parses locale-formatted numeral strings into `f64` values.
///
/// A parser is immutable after construction and holds only derived character
/// tables, so it can be shared and invoked from any number of threads.
///
/// # Example
///
/// ```
/// use locnum::NumberParser;
///
/// let parser = NumberParser::try_from_tag("en-IN").unwrap();
/// assert_eq!(parser.parse("1,23,45,678.9"), 12_345_678.9);
/// ```
#[derive(Debug, Clone)]
pub struct NumberParser {
    digits: DigitIndex,
    separators: SeparatorSet,
}

impl NumberParser {
    /// Build a parser for `locale`.
    ///
    /// Fails if the locale service has no decimal data for the locale or if
    /// its numbering system falls outside the single-code-point digit scope.
    pub fn try_new(locale: &Locale) -> Result<Self, BuildError> {
        let data_error = |source| BuildError::Data {
            locale: locale.to_string(),
            source,
        };

        // Digit probe: grouping disabled so the rendering is digits only.
        let digit_probe = DecimalFormatter::try_new(
            DecimalFormatterPreferences::from(locale),
            GroupingStrategy::Never.into(),
        )
        .map_err(data_error)?;

        // Separator probe: default options keep the locale's grouping.
        let part_probe = DecimalFormatter::try_new(
            DecimalFormatterPreferences::from(locale),
            DecimalFormatterOptions::default(),
        )
        .map_err(data_error)?;

        let digits = DigitIndex::from_formatter(&digit_probe).ok_or_else(|| {
            BuildError::UnsupportedNumberingSystem {
                locale: locale.to_string(),
            }
        })?;
        let separators = SeparatorSet::from_formatter(&part_probe);

        Ok(Self { digits, separators })
    }

    /// Build a parser from a BCP-47 tag, e.g. `"de"` or
    /// `"zh-Hans-CN-u-nu-hanidec"`.
    pub fn try_from_tag(tag: &str) -> Result<Self, BuildError> {
        let locale = Locale::try_from_str(tag).map_err(|source| BuildError::InvalidTag {
            tag: tag.to_string(),
            source,
        })?;
        Self::try_new(&locale)
    }

    /// Parse a localized numeral string.
    ///
    /// Grouping separators are removed, the decimal separator becomes `.`,
    /// and locale digits become ASCII digits; the result must then match
    /// `sign? digits ('.' digits?)?` with at least one digit. Anything else
    /// yields `f64::NAN`. Characters the locale tables do not know pass
    /// through unchanged and are rejected by the grammar instead of being
    /// rewritten.
    pub fn parse(&self, input: &str) -> f64 {
        let mut normalized = String::with_capacity(input.len());
        for c in input.trim().chars() {
            if self.separators.is_group(c) {
                continue;
            }
            if self.separators.is_decimal(c) {
                normalized.push('.');
            } else if let Some(value) = self.digits.value_of(c) {
                normalized.push(char::from(b'0' + value));
            } else {
                normalized.push(c);
            }
        }

        if normalized.is_empty() {
            return f64::NAN;
        }
        ascii_number.parse(normalized.as_str()).unwrap_or(f64::NAN)
    }
}

/// Parse a localized numeral string in one call.
///
/// With `Some(locale)` this is construction followed by a single
/// [`NumberParser::parse`]. With `None` the environment's active locale is
/// resolved once at this boundary and used for the call.
///
/// # Example
///
/// ```
/// use locnum::{Locale, parse_number};
///
/// let locale: Locale = "de".parse().unwrap();
/// assert_eq!(parse_number("12.345.678,9", Some(&locale)).unwrap(), 12_345_678.9);
/// ```
pub fn parse_number(input: &str, locale: Option<&Locale>) -> Result<f64, BuildError> {
    let parser = match locale {
        Some(locale) => NumberParser::try_new(locale)?,
        None => NumberParser::try_new(&system_locale())?,
    };
    Ok(parser.parse(input))
}

/// Lexical grammar for normalized input: optional sign, ASCII digits, at
/// most one decimal point, at least one digit overall.
fn ascii_number(input: &mut &str) -> ModalResult<f64> {
    (opt(one_of(['+', '-'])), digit0, opt(('.', digit0)))
        .take()
        .try_map(f64::from_str)
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accept(input: &str) -> Option<f64> {
        ascii_number.parse(input).ok()
    }

    #[test]
    fn test_grammar_accepts_plain_forms() {
        assert_eq!(accept("12"), Some(12.0));
        assert_eq!(accept("12.5"), Some(12.5));
        assert_eq!(accept(".5"), Some(0.5));
        assert_eq!(accept("12."), Some(12.0));
        assert_eq!(accept("-3.25"), Some(-3.25));
        assert_eq!(accept("+7"), Some(7.0));
    }

    #[test]
    fn test_grammar_rejects_malformed_forms() {
        assert_eq!(accept(""), None);
        assert_eq!(accept("-"), None);
        assert_eq!(accept("."), None);
        assert_eq!(accept("1.2.3"), None);
        assert_eq!(accept("12a"), None);
        assert_eq!(accept("1e5"), None);
        assert_eq!(accept("inf"), None);
    }
}
