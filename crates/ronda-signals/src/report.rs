//! Evaluation output: per-symbol signals and the report that collects them.

use polars::prelude::*;
use ronda_traits::{Result, RuleGroupResult, SignalVote, Symbol};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::analyst::COMPONENT;

/// Overall verdict for one symbol.
///
/// `reasoning` keeps rule groups in evaluation order and serializes as a
/// JSON object keyed by rule-group name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundamentalSignal {
    /// Combined vote.
    pub signal: SignalVote,
    /// Share of the winning side, 0-100.
    pub confidence: u8,
    /// Rule-group results keyed by group name.
    #[serde(
        serialize_with = "serialize_ordered",
        deserialize_with = "deserialize_ordered"
    )]
    pub reasoning: Vec<(String, RuleGroupResult)>,
}

impl FundamentalSignal {
    /// Look up one rule group's result.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&RuleGroupResult> {
        self.reasoning
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, result)| result)
    }
}

fn serialize_ordered<S: Serializer>(
    entries: &[(String, RuleGroupResult)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

fn deserialize_ordered<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<(String, RuleGroupResult)>, D::Error> {
    struct OrderedVisitor;

    impl<'de> Visitor<'de> for OrderedVisitor {
        type Value = Vec<(String, RuleGroupResult)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of rule-group results")
        }

        fn visit_map<A: MapAccess<'de>>(
            self,
            mut access: A,
        ) -> std::result::Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(entry) = access.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedVisitor)
}

/// Named payload handed to downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalystMessage {
    /// Producer name, always `fundamentals_agent`.
    pub name: String,
    /// The report as a JSON string.
    pub content: String,
}

/// Signals for every analyzed symbol, in the order symbols were requested.
///
/// Symbols without data are absent. Serializes as a JSON object keyed by
/// symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalystReport {
    entries: Vec<(Symbol, FundamentalSignal)>,
}

impl AnalystReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the signal for a symbol. Replacing keeps the original
    /// position.
    pub fn insert(&mut self, symbol: impl Into<Symbol>, signal: FundamentalSignal) {
        let symbol = symbol.into();
        match self.entries.iter_mut().find(|(s, _)| *s == symbol) {
            Some((_, existing)) => *existing = signal,
            None => self.entries.push((symbol, signal)),
        }
    }

    /// Signal for a symbol, if it was analyzed.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&FundamentalSignal> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, signal)| signal)
    }

    /// Number of symbols in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no symbol produced a signal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(symbol, signal)` pairs in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FundamentalSignal)> {
        self.entries.iter().map(|(s, signal)| (s.as_str(), signal))
    }

    /// Symbols in request order.
    #[must_use]
    pub fn symbols(&self) -> Vec<&str> {
        self.entries.iter().map(|(s, _)| s.as_str()).collect()
    }

    /// Pretty-printed JSON, non-ASCII characters preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Wrap the report in a named message for downstream consumers.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_message(&self) -> Result<AnalystMessage> {
        Ok(AnalystMessage {
            name: COMPONENT.to_string(),
            content: serde_json::to_string(self)?,
        })
    }

    /// Tabular view with one row per symbol and one vote column per rule
    /// group.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be constructed.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let vote = |signal: &FundamentalSignal, name: &str| {
            signal
                .rule(name)
                .map_or_else(String::new, |r| r.signal.to_string())
        };

        let symbols: Vec<&str> = self.symbols();
        let signals: Vec<String> = self
            .entries
            .iter()
            .map(|(_, s)| s.signal.to_string())
            .collect();
        let confidence: Vec<u32> = self
            .entries
            .iter()
            .map(|(_, s)| u32::from(s.confidence))
            .collect();
        let column = |name: &str| -> Vec<String> {
            self.entries.iter().map(|(_, s)| vote(s, name)).collect()
        };

        Ok(df! {
            "symbol" => symbols,
            "signal" => signals,
            "confidence" => confidence,
            "profitability" => column("profitability_signal"),
            "growth" => column("growth_signal"),
            "financial_health" => column("financial_health_signal"),
            "price_ratios" => column("price_ratios_signal"),
        }?)
    }
}

impl Serialize for AnalystReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (symbol, signal) in &self.entries {
            map.serialize_entry(symbol, signal)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a AnalystReport {
    type Item = &'a (Symbol, FundamentalSignal);
    type IntoIter = std::slice::Iter<'a, (Symbol, FundamentalSignal)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(signal: SignalVote, score: u8, details: &str) -> RuleGroupResult {
        RuleGroupResult {
            signal,
            score,
            details: details.to_string(),
        }
    }

    fn sample_signal() -> FundamentalSignal {
        FundamentalSignal {
            signal: SignalVote::Bullish,
            confidence: 75,
            reasoning: vec![
                (
                    "profitability_signal".to_string(),
                    result(SignalVote::Bullish, 3, "净资产收益率: 20.00%"),
                ),
                (
                    "growth_signal".to_string(),
                    result(SignalVote::Bullish, 2, "Revenue Growth: 12.00%"),
                ),
                (
                    "financial_health_signal".to_string(),
                    result(SignalVote::Neutral, 1, "Current Ratio: 2.00"),
                ),
                (
                    "price_ratios_signal".to_string(),
                    result(SignalVote::Bullish, 0, "P/E Ratio: 15.00"),
                ),
            ],
        }
    }

    fn sample_report() -> AnalystReport {
        let mut report = AnalystReport::new();
        report.insert("MSFT", sample_signal());
        report.insert(
            "AAPL",
            FundamentalSignal {
                signal: SignalVote::Neutral,
                confidence: 0,
                reasoning: Vec::new(),
            },
        );
        report
    }

    #[test]
    fn test_report_preserves_insertion_order() {
        let report = sample_report();
        assert_eq!(report.symbols(), vec!["MSFT", "AAPL"]);
        assert_eq!(report.len(), 2);
        assert!(report.get("TSLA").is_none());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut report = sample_report();
        report.insert(
            "MSFT",
            FundamentalSignal {
                signal: SignalVote::Bearish,
                confidence: 100,
                reasoning: Vec::new(),
            },
        );
        assert_eq!(report.symbols(), vec!["MSFT", "AAPL"]);
        assert_eq!(report.get("MSFT").unwrap().signal, SignalVote::Bearish);
    }

    #[test]
    fn test_serializes_as_object_keyed_by_symbol() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["MSFT"]["signal"], "bullish");
        assert_eq!(json["MSFT"]["confidence"], 75);
        assert_eq!(
            json["MSFT"]["reasoning"]["financial_health_signal"]["signal"],
            "neutral"
        );
        assert_eq!(json["AAPL"]["reasoning"], serde_json::json!({}));
    }

    #[test]
    fn test_signal_deserializes_from_object() {
        let signal = sample_signal();
        let json = serde_json::to_string(&signal).unwrap();
        let parsed: FundamentalSignal = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, signal);
    }

    #[test]
    fn test_message_keeps_non_ascii() {
        let message = sample_report().to_message().unwrap();
        assert_eq!(message.name, "fundamentals_agent");
        assert!(message.content.contains("净资产收益率"));
        assert!(!message.content.contains("\\u"));
    }

    #[test]
    fn test_to_frame() {
        let df = sample_report().to_frame().unwrap();
        assert_eq!(df.height(), 2);
        let names: Vec<&str> = df.get_column_names().iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "symbol",
                "signal",
                "confidence",
                "profitability",
                "growth",
                "financial_health",
                "price_ratios"
            ]
        );

        let health = df
            .column("financial_health")
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .clone();
        assert_eq!(health.get(0), Some("neutral"));
        assert_eq!(health.get(1), Some(""));

        let confidence = df
            .column("confidence")
            .unwrap()
            .as_materialized_series()
            .u32()
            .unwrap()
            .get(0);
        assert_eq!(confidence, Some(75));
    }

    #[test]
    fn test_empty_report() {
        let report = AnalystReport::new();
        assert!(report.is_empty());
        assert_eq!(report.to_json_pretty().unwrap(), "{}");
        assert_eq!(report.to_frame().unwrap().height(), 0);
    }
}
