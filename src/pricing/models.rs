use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::catalog::{Module, CORE_PLAN_FEATURES};
use crate::pricing::currency::Currency;

/// Currency entry for the currency selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub code: Currency,
    pub symbol: String,
    pub label: String,
    pub rate: Decimal,
    pub decimal_places: u32,
}

impl From<Currency> for CurrencyInfo {
    fn from(currency: Currency) -> Self {
        Self {
            code: currency,
            symbol: currency.symbol().to_string(),
            label: currency.label().to_string(),
            rate: currency.rate(),
            decimal_places: currency.decimal_places(),
        }
    }
}

/// Module entry for the customization toggle list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub name: Module,
    pub monthly_price_kwd: Decimal,
}

impl From<Module> for ModuleInfo {
    fn from(module: Module) -> Self {
        Self {
            name: module,
            monthly_price_kwd: module.monthly_price_kwd(),
        }
    }
}

/// Static catalog shown on the pricing card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub base_yearly_price_kwd: Decimal,
    pub core_features: Vec<String>,
    pub modules: Vec<ModuleInfo>,
}

impl Catalog {
    pub fn current() -> Self {
        Self {
            base_yearly_price_kwd: crate::pricing::catalog::base_yearly_price(),
            core_features: CORE_PLAN_FEATURES.iter().map(|f| f.to_string()).collect(),
            modules: Module::ALL.into_iter().map(ModuleInfo::from).collect(),
        }
    }
}

/// One customization row of a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub module: Module,
    pub monthly_price: String,
    pub yearly_price: String,
    pub selected: bool,
}

/// Everything the pricing card renders for a selection, already formatted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub currency: CurrencyInfo,
    pub base_price: String,
    pub modules: Vec<QuoteLine>,
    pub selected_modules: Vec<Module>,
    pub total_yearly_price: String,
    /// Unformatted total in KWD
    pub total_yearly_price_kwd: Decimal,
}
