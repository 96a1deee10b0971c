//! Grouping and decimal separator classes for a locale.
//!
//! Separator characters are discovered from the locale service rather than
//! hardcoded: a reference fraction is formatted and the part-attributed runs
//! of the output are inspected for the group and decimal separator literals.

use std::fmt;

use fixed_decimal::Decimal;
use icu_decimal::{DecimalFormatter, parts};
use writeable::{Part, PartsWrite, Writeable};

/// Character classes for a locale's grouping and decimal separators.
///
/// Either class may be empty and then matches nothing; some numbering
/// systems group nothing and some locales have no fractional separator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeparatorSet {
    group: String,
    decimal: String,
}

impl SeparatorSet {
    /// Discover separators from a formatter with default grouping options.
    pub(crate) fn from_formatter(formatter: &DecimalFormatter) -> Self {
        // 12345.6: enough integer digits to trigger a group separator under
        // every grouping strategy, and a fraction to force the decimal
        // separator into the output.
        let mut probe = Decimal::from(123_456);
        probe.multiply_pow10(-1);
        let mut sink = PartRuns::default();
        formatter
            .format(&probe)
            .write_to_parts(&mut sink)
            .expect("string sink does not fail");

        let mut group = String::new();
        let mut decimal = String::new();
        for (part, text) in sink.runs {
            if part == parts::GROUP && group.is_empty() {
                group = text;
            } else if part == parts::DECIMAL && decimal.is_empty() {
                decimal = text;
            }
        }
        Self { group, decimal }
    }

    /// Whether `c` is one of the locale's grouping separator characters.
    pub fn is_group(&self, c: char) -> bool {
        self.group.contains(c)
    }

    /// Whether `c` is one of the locale's decimal separator characters.
    pub fn is_decimal(&self, c: char) -> bool {
        self.decimal.contains(c)
    }
}

/// `PartsWrite` sink that records each part-attributed run of output.
///
/// Only the first group and decimal run are consumed by the caller, so text
/// written outside any part is dropped.
#[derive(Default)]
struct PartRuns {
    stack: Vec<Part>,
    runs: Vec<(Part, String)>,
}

impl fmt::Write for PartRuns {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if let Some(&part) = self.stack.last() {
            match self.runs.last_mut() {
                Some((last, text)) if *last == part => text.push_str(s),
                _ => self.runs.push((part, s.to_string())),
            }
        }
        Ok(())
    }
}

impl PartsWrite for PartRuns {
    type SubPartsWrite = Self;

    fn with_part(
        &mut self,
        part: Part,
        mut f: impl FnMut(&mut Self) -> fmt::Result,
    ) -> fmt::Result {
        self.stack.push(part);
        let result = f(self);
        self.stack.pop();
        result
    }
}
