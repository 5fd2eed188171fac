//! Analyze command implementation.

use crate::{OutputFormat, data};
use anyhow::{Result, bail};
use chrono::Utc;
use ronda_fmp::FmpClient;
use ronda_i18n::get_string;
use ronda_signals::{AnalystReport, FundamentalsAnalyst, TracingStatus};
use ronda_traits::{AnalystConfig, Language};
use std::fmt::Write as _;

/// Fetch metrics for the symbols, run the analyst and print the report.
pub(crate) async fn analyze(
    symbols: &[String],
    end_date: Option<&str>,
    config: AnalystConfig,
    format: OutputFormat,
    show_reasoning: bool,
) -> Result<()> {
    let symbols = data::normalize_symbols(symbols);
    if symbols.is_empty() {
        bail!("no symbols given");
    }

    let as_of = match end_date {
        Some(d) => data::parse_date(d)?,
        None => Utc::now().date_naive(),
    };

    let client = FmpClient::from_env()?;
    let store =
        data::load_metrics(&client, &symbols, as_of, config.period, config.limit).await?;

    let language = config.language;
    let analyst = FundamentalsAnalyst::new(config).with_reporter(TracingStatus);
    let report = analyst.analyze(&store, &symbols, as_of)?;

    match format {
        OutputFormat::Text => {
            print!("{}", render_text(&report, &symbols, language, show_reasoning));
        }
        OutputFormat::Json => println!("{}", report.to_json_pretty()?),
        OutputFormat::Table => println!("{}", report.to_frame()?),
    }

    Ok(())
}

/// Render the report as text, one block per requested symbol.
fn render_text(
    report: &AnalystReport,
    symbols: &[String],
    language: Language,
    show_reasoning: bool,
) -> String {
    let t = |key: &str| get_string(key, language).to_string();
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(out, "║                    Fundamental Analysis                      ║");
    let _ = writeln!(out, "╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(out);

    for symbol in symbols {
        let _ = writeln!(out, "{}: {symbol}", t("symbol"));
        let _ = writeln!(out, "{}", "─".repeat(60));

        let Some(signal) = report.get(symbol) else {
            let _ = writeln!(out, "  {}", t("na"));
            let _ = writeln!(out);
            continue;
        };

        let _ = writeln!(out, "  {:<12} {}", t("signal"), t(signal.signal.as_str()));
        let _ = writeln!(out, "  {:<12} {}%", t("confidence"), signal.confidence);

        if show_reasoning {
            let _ = writeln!(out, "  {}:", t("reasoning"));
            for (name, result) in &signal.reasoning {
                let _ = writeln!(
                    out,
                    "    {:<18} {:<8} {}",
                    t(name.as_str()),
                    t(result.signal.as_str()),
                    result.details
                );
            }
        }
        let _ = writeln!(out);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ronda_traits::{Date, FinancialMetrics, InMemoryMetrics};

    fn report(language: Language) -> AnalystReport {
        let store: InMemoryMetrics = [FinancialMetrics {
            return_on_equity: Some(0.20),
            net_margin: Some(0.25),
            operating_margin: Some(0.18),
            ..FinancialMetrics::new("AAPL")
        }]
        .into_iter()
        .collect();
        let as_of = Date::from_ymd_opt(2024, 12, 31).unwrap();
        FundamentalsAnalyst::new(AnalystConfig::default().with_language(language))
            .analyze(&store, &["AAPL"], as_of)
            .unwrap()
    }

    fn symbols() -> Vec<String> {
        vec!["AAPL".to_string(), "ZZZZ".to_string()]
    }

    #[test]
    fn test_render_text_summary() {
        let text = render_text(&report(Language::En), &symbols(), Language::En, false);
        assert!(text.contains("Symbol: AAPL"));
        assert!(text.contains("NEUTRAL"));
        assert!(text.contains("50%"));
        assert!(!text.contains("ROE: 20.00%"));
        // Requested symbol without data
        assert!(text.contains("Symbol: ZZZZ"));
        assert!(text.contains("N/A"));
    }

    #[test]
    fn test_render_text_with_reasoning() {
        let text = render_text(&report(Language::En), &symbols(), Language::En, true);
        assert!(text.contains("Profitability"));
        assert!(text.contains("ROE: 20.00%, Net Margin: 25.00%, Operating Margin: 18.00%"));
        assert!(text.contains("Price Ratios"));
    }

    #[test]
    fn test_render_text_chinese() {
        let text = render_text(&report(Language::Zh), &symbols(), Language::Zh, true);
        assert!(text.contains("中性"));
        assert!(text.contains("净资产收益率: 20.00%"));
        assert!(text.contains("无数据"));
    }
}
