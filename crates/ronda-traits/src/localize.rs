//! Localization seam.

use crate::Language;

/// Looks up display strings by identifier and language.
///
/// Implementations must never fail: an unknown identifier is returned
/// unchanged so that displays degrade gracefully.
pub trait Localizer: Send + Sync {
    /// Returns the display string for `key` in `language`, or `key` itself
    /// if no translation exists.
    fn localize(&self, key: &str, language: Language) -> String;
}

impl<T: Localizer + ?Sized> Localizer for &T {
    fn localize(&self, key: &str, language: Language) -> String {
        (**self).localize(key, language)
    }
}

impl<T: Localizer + ?Sized> Localizer for Box<T> {
    fn localize(&self, key: &str, language: Language) -> String {
        (**self).localize(key, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Localizer for Upper {
        fn localize(&self, key: &str, language: Language) -> String {
            match language {
                Language::En => key.to_uppercase(),
                Language::Zh => key.to_string(),
            }
        }
    }

    #[test]
    fn test_localizer_through_references() {
        let boxed: Box<dyn Localizer> = Box::new(Upper);
        assert_eq!(boxed.localize("roe", Language::En), "ROE");
        assert_eq!((&Upper).localize("roe", Language::Zh), "roe");
    }

    #[test]
    fn test_localizer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn Localizer>>();
    }
}
