use anyhow::Result;
use colored::Colorize;
use move_landing::config;
use move_landing::pricing::{PricingSelection, Quote, CORE_PLAN_FEATURES};
use std::path::Path;
use tracing::info;

/// Execute the quote command
///
/// Builds a selection the same way the pricing card does: pick a currency,
/// then toggle each requested module.
pub fn execute(
    config_path: &Path,
    currency: Option<String>,
    modules: Vec<String>,
    json: bool,
) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let selection = build_selection(&cfg.pricing.default_currency, currency.as_deref(), &modules)?;
    let quote = selection.quote();

    info!(
        currency = %selection.currency(),
        modules = selection.selected_count(),
        "Computed quote"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        print_quote(&quote);
    }

    Ok(())
}

fn build_selection(
    default_currency: &str,
    currency: Option<&str>,
    modules: &[String],
) -> Result<PricingSelection> {
    let mut selection = PricingSelection::new();
    selection.set_currency_code(currency.unwrap_or(default_currency))?;

    for name in modules {
        selection.toggle_module(name)?;
    }

    Ok(selection)
}

fn print_quote(quote: &Quote) {
    println!(
        "{} ({} - {})",
        "Core Plan".bold(),
        quote.currency.code,
        quote.currency.label
    );
    println!("  {}/year per location", quote.base_price.green());
    for feature in CORE_PLAN_FEATURES {
        println!("    ✓ {}", feature);
    }
    println!();

    println!("{}", "Customizations:".bold());
    for line in &quote.modules {
        let marker = if line.selected {
            "[x]".green()
        } else {
            "[ ]".dimmed()
        };
        println!(
            "  {} {:<16} {}/month  {}/year",
            marker, line.module.name(), line.monthly_price, line.yearly_price
        );
    }
    println!();

    println!(
        "{} {}",
        "Total Yearly:".bold(),
        quote.total_yearly_price.cyan().bold()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use move_landing::pricing::Module;

    #[test]
    fn test_build_selection_defaults_currency() {
        let selection = build_selection("AED", None, &[]).unwrap();
        assert_eq!(selection.base_price(), "AED 2397.95");
    }

    #[test]
    fn test_build_selection_toggles_modules() {
        let modules = vec!["CRM".to_string(), "Helpdesk".to_string(), "CRM".to_string()];
        let selection = build_selection("KWD", Some("KWD"), &modules).unwrap();
        assert_eq!(selection.selected_modules(), vec![Module::Helpdesk]);
    }

    #[test]
    fn test_build_selection_rejects_unknown_input() {
        assert!(build_selection("KWD", Some("EUR"), &[]).is_err());
        assert!(build_selection("KWD", None, &["Pool".to_string()]).is_err());
    }
}
