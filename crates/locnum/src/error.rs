//! Error types for parser construction.

use thiserror::Error;

/// Errors that occur while building a [`NumberParser`](crate::NumberParser).
///
/// Construction is the only fallible step: locale tags are validated by the
/// locale service, and the service may lack decimal data for a tag. `parse`
/// itself never fails; it reports unparseable input as `f64::NAN`.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The locale tag is not valid BCP-47.
    #[error("invalid locale tag '{tag}': {source}")]
    InvalidTag {
        tag: String,
        #[source]
        source: icu_locale_core::ParseError,
    },

    /// No decimal formatting data is available for the locale.
    #[error("no decimal data for locale '{locale}': {source}")]
    Data {
        locale: String,
        #[source]
        source: icu_provider::DataError,
    },

    /// The locale's numbering system does not render ten single-code-point
    /// digit characters.
    #[error("numbering system of locale '{locale}' does not use ten single-code-point digits")]
    UnsupportedNumberingSystem { locale: String },
}
