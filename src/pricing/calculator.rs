use rust_decimal::Decimal;

use crate::pricing::catalog::{base_yearly_price, Module};
use crate::pricing::error::PricingError;
use crate::pricing::models::{CurrencyInfo, Quote, QuoteLine};
use crate::pricing::selection::PricingSelection;

/// Derived prices for a selection
///
/// Everything is computed in KWD and converted once, at format time, into the
/// selection's currency. Nothing is cached: each call reads the current state.
impl PricingSelection {
    /// Convert a KWD amount into the display currency and format it
    pub fn convert(&self, amount_kwd: Decimal) -> String {
        self.currency().format_kwd(amount_kwd)
    }

    /// Core plan price per year
    pub fn base_price(&self) -> String {
        self.convert(base_yearly_price())
    }

    pub fn module_monthly_price(&self, module: Module) -> String {
        self.convert(module.monthly_price_kwd())
    }

    pub fn module_yearly_price(&self, module: Module) -> String {
        self.convert(module.yearly_price_kwd())
    }

    /// Monthly price of a module given by catalog name
    pub fn module_monthly_price_by_name(&self, name: &str) -> Result<String, PricingError> {
        Ok(self.module_monthly_price(name.parse()?))
    }

    /// Yearly price of a module given by catalog name
    pub fn module_yearly_price_by_name(&self, name: &str) -> Result<String, PricingError> {
        Ok(self.module_yearly_price(name.parse()?))
    }

    /// Base plan plus twelve months of every selected module, in KWD
    pub fn total_yearly_price_kwd(&self) -> Decimal {
        self.selected_modules()
            .into_iter()
            .map(Module::yearly_price_kwd)
            .fold(base_yearly_price(), |total, price| total + price)
    }

    pub fn total_yearly_price(&self) -> String {
        self.convert(self.total_yearly_price_kwd())
    }

    /// Snapshot of everything the pricing card shows
    pub fn quote(&self) -> Quote {
        let modules = Module::ALL
            .into_iter()
            .map(|module| QuoteLine {
                module,
                monthly_price: self.module_monthly_price(module),
                yearly_price: self.module_yearly_price(module),
                selected: self.is_selected(module),
            })
            .collect();

        Quote {
            currency: CurrencyInfo::from(self.currency()),
            base_price: self.base_price(),
            modules,
            selected_modules: self.selected_modules(),
            total_yearly_price: self.total_yearly_price(),
            total_yearly_price_kwd: self.total_yearly_price_kwd(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::currency::Currency;

    #[test]
    fn test_base_price_in_kwd() {
        let selection = PricingSelection::new();
        assert_eq!(selection.base_price(), "KWD 199.000");
    }

    #[test]
    fn test_base_price_in_usd() {
        let selection = PricingSelection::with_currency(Currency::Usd);
        assert_eq!(selection.base_price(), "$ 652.72");
    }

    #[test]
    fn test_total_without_modules_equals_base() {
        for currency in Currency::ALL {
            let selection = PricingSelection::with_currency(currency);
            assert_eq!(selection.total_yearly_price(), selection.base_price());
        }
    }

    #[test]
    fn test_total_with_crm() {
        let mut selection = PricingSelection::new();
        selection.toggle_module("CRM").unwrap();
        assert_eq!(selection.total_yearly_price(), "KWD 739.000");
    }

    #[test]
    fn test_total_with_single_module_matches_formula() {
        for module in Module::ALL {
            let mut selection = PricingSelection::with_currency(Currency::Aed);
            selection.toggle(module);
            let yearly = module.monthly_price_kwd() * Decimal::from(12);
            let expected = selection.convert(Decimal::from(199) + yearly);
            assert_eq!(selection.total_yearly_price(), expected);
        }
    }

    #[test]
    fn test_total_with_all_modules() {
        let mut selection = PricingSelection::with_currency(Currency::Inr);
        for module in Module::ALL {
            selection.toggle(module);
        }
        // 199 + (59 + 60 + 45 + 70 + 40) * 12 = 3487
        assert_eq!(selection.total_yearly_price_kwd(), Decimal::from(3487));
        // 3487 * 101.89 = 355290.43
        assert_eq!(selection.total_yearly_price(), "₹ 355290");
    }

    #[test]
    fn test_deselect_restores_base_total() {
        let mut selection = PricingSelection::new();
        selection.toggle_module("CRM").unwrap();
        selection.toggle_module("CRM").unwrap();
        assert!(selection.selected_modules().is_empty());
        assert_eq!(selection.total_yearly_price(), selection.base_price());
    }

    #[test]
    fn test_module_prices() {
        let selection = PricingSelection::with_currency(Currency::Usd);
        // 45 * 3.28 = 147.60, 540 * 3.28 = 1771.20
        assert_eq!(selection.module_monthly_price(Module::Crm), "$ 147.60");
        assert_eq!(selection.module_yearly_price(Module::Crm), "$ 1771.20");
        assert_eq!(
            selection.module_monthly_price_by_name("Helpdesk").unwrap(),
            "$ 131.20"
        );
        assert!(selection.module_yearly_price_by_name("Yoga").is_err());
    }

    #[test]
    fn test_currency_change_recomputes_lazily() {
        let mut selection = PricingSelection::new();
        selection.toggle(Module::Accounting);
        assert_eq!(selection.total_yearly_price(), "KWD 919.000");

        selection.set_currency(Currency::Usd);
        // 919 * 3.28 = 3014.32
        assert_eq!(selection.total_yearly_price(), "$ 3014.32");
    }

    #[test]
    fn test_quote_snapshot() {
        let mut selection = PricingSelection::with_currency(Currency::Kwd);
        selection.toggle(Module::HrPayroll);

        let quote = selection.quote();
        assert_eq!(quote.currency.code, Currency::Kwd);
        assert_eq!(quote.base_price, "KWD 199.000");
        assert_eq!(quote.modules.len(), 5);
        assert_eq!(quote.modules[0].module, Module::GateManagement);
        assert!(quote.modules[3].selected);
        assert_eq!(quote.modules[3].yearly_price, "KWD 840.000");
        assert_eq!(quote.selected_modules, vec![Module::HrPayroll]);
        assert_eq!(quote.total_yearly_price, "KWD 1039.000");
        assert_eq!(quote.total_yearly_price_kwd, Decimal::from(1039));
    }
}
