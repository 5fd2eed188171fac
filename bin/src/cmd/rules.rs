//! Rule group listing command implementation.

use ronda_signals::registry::{RuleGroupInfo, available_rule_groups, require_rule_group};
use ronda_traits::Result;

/// Describe one rule group in full.
pub(crate) fn show_rule(name: &str) -> Result<()> {
    let info = require_rule_group(name)?;
    print!("{}", describe(&info, true));
    Ok(())
}

/// List the built-in rule groups in evaluation order.
pub(crate) fn list_rules(verbose: bool) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Available Rule Groups                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    for info in available_rule_groups() {
        print!("{}", describe(&info, verbose));
    }
    println!();

    if !verbose {
        println!("Use --verbose for thresholds and metrics.\n");
    }
}

fn describe(info: &RuleGroupInfo, verbose: bool) -> String {
    if !verbose {
        return format!("  {}\n", info.name);
    }

    let mapping = if info.inverted {
        "0 bullish, 1 neutral, 2+ bearish"
    } else {
        "0 bearish, 1 neutral, 2+ bullish"
    };
    format!(
        "  {:25} - {}\n  {:25}   category: {:?}, votes: {mapping}\n  {:25}   metrics: {}\n",
        info.name,
        info.description,
        "",
        info.category,
        "",
        info.metrics.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ronda_signals::registry::get_rule_group_info;

    #[test]
    fn test_describe_short() {
        let info = get_rule_group_info("growth_signal").unwrap();
        assert_eq!(describe(&info, false), "  growth_signal\n");
    }

    #[test]
    fn test_describe_verbose_shows_inversion() {
        let info = get_rule_group_info("price_ratios_signal").unwrap();
        let text = describe(&info, true);
        assert!(text.contains("2+ bearish"));
        assert!(text.contains("price_to_book_ratio"));
        assert!(text.contains("Valuation"));
    }

    #[test]
    fn test_show_unknown_rule_fails() {
        assert!(show_rule("growth_signal").is_ok());
        assert!(matches!(
            show_rule("momentum_signal"),
            Err(ronda_traits::RondaError::RuleGroupNotFound(_))
        ));
    }
}
