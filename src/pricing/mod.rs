pub mod calculator;
pub mod catalog;
pub mod currency;
pub mod error;
pub mod models;
pub mod selection;

pub use catalog::{Module, BASE_YEARLY_PRICE_KWD, CORE_PLAN_FEATURES};
pub use currency::Currency;
pub use error::PricingError;
pub use models::{Catalog, CurrencyInfo, ModuleInfo, Quote, QuoteLine};
pub use selection::PricingSelection;
