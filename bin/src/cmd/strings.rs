//! String table command implementation.

use ronda_i18n::entries;
use ronda_traits::Language;

/// Print every display string for a language as `key  value`.
pub(crate) fn print_strings(language: Language) {
    for line in table_lines(language) {
        println!("{line}");
    }
}

fn table_lines(language: Language) -> Vec<String> {
    let width = entries(language)
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0);
    entries(language)
        .iter()
        .map(|(key, value)| format!("{key:<width$}  {value}"))
        .collect()
}
