//! Locale-aware parsing of human-formatted numeral strings.
//!
//! A [`NumberParser`] is built once per locale from ICU4X decimal formatting
//! data and then converts strings like `"12.345.678,9"` (de) or `"١٬٢٣٤٫٥٦"`
//! (ar-EG) into `f64` values. Construction can fail; `parse` itself never
//! does and reports unparseable input as `f64::NAN`.
//!
//! # Example
//!
//! ```
//! use locnum::NumberParser;
//!
//! let parser = NumberParser::try_from_tag("de").unwrap();
//! assert_eq!(parser.parse("12.345.678,9"), 12_345_678.9);
//! assert!(parser.parse("not a number").is_nan());
//! ```

pub mod digits;
pub mod error;
pub mod parser;
pub mod separators;
pub mod system;

pub use digits::DigitIndex;
pub use error::BuildError;
pub use parser::{NumberParser, parse_number};
pub use separators::SeparatorSet;
pub use system::{posix_to_bcp47, system_locale};

// Re-exported so callers can build locales without naming ICU4X directly.
pub use icu_locale_core::Locale;
