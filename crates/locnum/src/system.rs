//! Environment default-locale resolution.
//!
//! The active locale is process-wide ambient state. It is consulted only at
//! explicit call boundaries (the `parse_number` convenience function and the
//! CLI), never from inside the parser itself.

use std::env;

use icu_locale_core::{Locale, locale};

/// Environment variables consulted for the active locale, in POSIX
/// precedence order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

/// Resolve the environment's active locale.
///
/// Reads `LC_ALL`, `LC_NUMERIC`, and `LANG` in that order, taking the first
/// value that normalizes to a parseable BCP-47 tag. Falls back to `en` when
/// nothing usable is set.
pub fn system_locale() -> Locale {
    LOCALE_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find_map(|value| posix_to_bcp47(&value))
        .unwrap_or_else(|| locale!("en"))
}

/// Convert a POSIX locale string such as `en_US.UTF-8` or `de_DE@euro` into
/// a BCP-47 [`Locale`].
///
/// Returns `None` for the `C` and `POSIX` locales, empty strings, and values
/// that do not parse as a language tag. Codeset and modifier suffixes are
/// dropped; plain BCP-47 tags (including `-u-` extensions) pass through.
pub fn posix_to_bcp47(value: &str) -> Option<Locale> {
    let base = value.split(['.', '@']).next().unwrap_or("");
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Locale::try_from_str(&base.replace('_', "-")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_with_codeset() {
        let locale = posix_to_bcp47("en_US.UTF-8").unwrap();
        assert_eq!(locale.to_string(), "en-US");
    }

    #[test]
    fn test_posix_with_modifier() {
        let locale = posix_to_bcp47("de_DE@euro").unwrap();
        assert_eq!(locale.to_string(), "de-DE");
    }

    #[test]
    fn test_c_and_posix_are_skipped() {
        assert!(posix_to_bcp47("C").is_none());
        assert!(posix_to_bcp47("C.UTF-8").is_none());
        assert!(posix_to_bcp47("POSIX").is_none());
        assert!(posix_to_bcp47("").is_none());
    }

    #[test]
    fn test_bcp47_passthrough() {
        let locale = posix_to_bcp47("zh-Hans-CN-u-nu-hanidec").unwrap();
        assert_eq!(locale.to_string(), "zh-Hans-CN-u-nu-hanidec");
    }

    #[test]
    fn test_garbage_is_none() {
        assert!(posix_to_bcp47("!!").is_none());
    }
}
