//! Human-readable metric details attached to rule-group results.

use ronda_traits::{Language, Localizer};

/// How a metric value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricFormat {
    /// Fraction rendered as a percentage with two decimals (`0.2` → `20.00%`).
    Percent,
    /// Plain number with two decimals (`1.5` → `1.50`).
    Fixed,
}

impl MetricFormat {
    /// Render a present value.
    #[must_use]
    pub fn render(&self, value: f64) -> String {
        match self {
            Self::Percent => format!("{:.2}%", value * 100.0),
            Self::Fixed => format!("{value:.2}"),
        }
    }
}

/// One `label: value` entry of a details string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDetail {
    /// Localization key of the label.
    pub key: &'static str,
    /// The metric value, if present.
    pub value: Option<f64>,
    /// Rendering style.
    pub format: MetricFormat,
}

impl MetricDetail {
    /// Entry rendered as a percentage.
    #[must_use]
    pub const fn percent(key: &'static str, value: Option<f64>) -> Self {
        Self {
            key,
            value,
            format: MetricFormat::Percent,
        }
    }

    /// Entry rendered as a fixed-point number.
    #[must_use]
    pub const fn fixed(key: &'static str, value: Option<f64>) -> Self {
        Self {
            key,
            value,
            format: MetricFormat::Fixed,
        }
    }

    /// Render as `label: value`, using the localized `na` marker when the
    /// value is absent.
    #[must_use]
    pub fn render(&self, localizer: &dyn Localizer, language: Language) -> String {
        let label = localizer.localize(self.key, language);
        let value = match self.value {
            Some(v) => self.format.render(v),
            None => localizer.localize("na", language),
        };
        format!("{label}: {value}")
    }
}

/// Render each entry independently and join them with `", "`.
#[must_use]
pub fn render_details(
    entries: &[MetricDetail],
    localizer: &dyn Localizer,
    language: Language,
) -> String {
    entries
        .iter()
        .map(|entry| entry.render(localizer, language))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ronda_i18n::StringTable;

    #[test]
    fn test_percent_format() {
        assert_eq!(MetricFormat::Percent.render(0.2), "20.00%");
        assert_eq!(MetricFormat::Percent.render(0.1234), "12.34%");
        assert_eq!(MetricFormat::Percent.render(-0.05), "-5.00%");
        assert_eq!(MetricFormat::Percent.render(0.0), "0.00%");
    }

    #[test]
    fn test_fixed_format() {
        assert_eq!(MetricFormat::Fixed.render(2.0), "2.00");
        assert_eq!(MetricFormat::Fixed.render(15.456), "15.46");
        assert_eq!(MetricFormat::Fixed.render(0.0), "0.00");
    }

    #[test]
    fn test_missing_value_is_localized() {
        let entry = MetricDetail::fixed("pe_ratio", None);
        assert_eq!(entry.render(&StringTable, Language::En), "P/E Ratio: N/A");
        assert_eq!(entry.render(&StringTable, Language::Zh), "市盈率: 无数据");
    }

    #[test]
    fn test_each_entry_falls_back_independently() {
        let entries = [
            MetricDetail::percent("roe", Some(0.2)),
            MetricDetail::percent("net_margin", None),
            MetricDetail::percent("op_margin", Some(0.18)),
        ];
        assert_eq!(
            render_details(&entries, &StringTable, Language::En),
            "ROE: 20.00%, Net Margin: N/A, Operating Margin: 18.00%"
        );
    }

    #[test]
    fn test_unknown_label_key_passes_through() {
        let entry = MetricDetail::fixed("gross_margin_custom", Some(1.0));
        assert_eq!(
            entry.render(&StringTable, Language::En),
            "gross_margin_custom: 1.00"
        );
    }

    #[test]
    fn test_empty_entries() {
        assert_eq!(render_details(&[], &StringTable, Language::En), "");
    }
}
