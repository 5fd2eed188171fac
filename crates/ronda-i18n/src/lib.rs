//! Display string tables for Ronda.
//!
//! Every supported [`Language`] has an explicit key→string table. Lookups
//! never fail: an unknown key is returned unchanged, so displays degrade to
//! the raw identifier instead of erroring.
//!
//! # Example
//!
//! ```
//! use ronda_i18n::{StringTable, get_string};
//! use ronda_traits::{Language, Localizer};
//!
//! assert_eq!(get_string("pe_ratio", Language::En), "P/E Ratio");
//! assert_eq!(get_string("pe_ratio", Language::Zh), "市盈率");
//! assert_eq!(get_string("no_such_key", Language::Zh), "no_such_key");
//!
//! assert_eq!(StringTable.localize("na", Language::En), "N/A");
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod tables;

use std::{collections::HashMap, sync::LazyLock};

use ronda_traits::{Language, Localizer};

type Table = HashMap<&'static str, &'static str>;

static EN: LazyLock<Table> = LazyLock::new(|| tables::EN_STRINGS.iter().copied().collect());
static ZH: LazyLock<Table> = LazyLock::new(|| tables::ZH_STRINGS.iter().copied().collect());

fn table(language: Language) -> &'static Table {
    match language {
        Language::En => &EN,
        Language::Zh => &ZH,
    }
}

/// Look up a display string, falling back to `key` when it is unknown.
#[must_use]
pub fn get_string(key: &str, language: Language) -> &str {
    table(language).get(key).copied().unwrap_or(key)
}

/// Whether `language` has a translation for `key`.
#[must_use]
pub fn has_key(key: &str, language: Language) -> bool {
    table(language).contains_key(key)
}

/// All `(key, string)` pairs for a language, in table order.
#[must_use]
pub const fn entries(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::En => tables::EN_STRINGS,
        Language::Zh => tables::ZH_STRINGS,
    }
}

/// [`Localizer`] backed by the built-in string tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringTable;

impl StringTable {
    /// Look up a display string without allocating.
    #[must_use]
    pub fn get(key: &str, language: Language) -> &str {
        get_string(key, language)
    }
}

impl Localizer for StringTable {
    fn localize(&self, key: &str, language: Language) -> String {
        get_string(key, language).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        assert_eq!(get_string("roe", Language::En), "ROE");
        assert_eq!(get_string("roe", Language::Zh), "净资产收益率");
        assert_eq!(get_string("bullish", Language::En), "BULLISH");
        assert_eq!(get_string("bearish", Language::Zh), "看跌");
    }

    #[test]
    fn test_not_available_marker() {
        assert_eq!(get_string("na", Language::En), "N/A");
        assert_eq!(get_string("na", Language::Zh), "无数据");
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(get_string("unknown_metric", Language::En), "unknown_metric");
        assert_eq!(StringTable.localize("", Language::Zh), "");
        assert!(!has_key("unknown_metric", Language::En));
        assert_eq!(StringTable::get("pe_ratio", Language::Zh), "市盈率");
    }

    #[test]
    fn test_tables_have_same_keys() {
        let en: Vec<_> = entries(Language::En).iter().map(|(k, _)| *k).collect();
        let zh: Vec<_> = entries(Language::Zh).iter().map(|(k, _)| *k).collect();
        assert_eq!(en, zh);
    }

    #[test]
    fn test_no_duplicate_keys() {
        for language in Language::ALL {
            assert_eq!(table(language).len(), entries(language).len());
        }
    }

    #[test]
    fn test_rule_metric_labels_present() {
        let keys = [
            "roe",
            "net_margin",
            "op_margin",
            "revenue_growth",
            "earnings_growth",
            "book_value_growth",
            "current_ratio",
            "debt_to_equity",
            "fcf_per_share",
            "eps",
            "pe_ratio",
            "pb_ratio",
            "ps_ratio",
        ];
        for language in Language::ALL {
            for key in keys {
                assert!(has_key(key, language), "{key} missing for {language}");
            }
        }
    }
}
