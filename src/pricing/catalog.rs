use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::pricing::error::PricingError;

/// Yearly price of the core plan, in KWD
pub const BASE_YEARLY_PRICE_KWD: i64 = 199;

/// Features included in the core plan
pub const CORE_PLAN_FEATURES: [&str; 6] = [
    "Class Management",
    "Member Management",
    "Instructor Management",
    "Point of Sale",
    "Inventory Management",
    "Online Booking",
];

/// Optional customization modules that can be added on top of the core plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Module {
    #[serde(rename = "Gate Management")]
    GateManagement,
    #[serde(rename = "Accounting")]
    Accounting,
    #[serde(rename = "CRM")]
    Crm,
    #[serde(rename = "HR & Payroll")]
    HrPayroll,
    #[serde(rename = "Helpdesk")]
    Helpdesk,
}

impl Module {
    /// Catalog in display order
    pub const ALL: [Module; 5] = [
        Module::GateManagement,
        Module::Accounting,
        Module::Crm,
        Module::HrPayroll,
        Module::Helpdesk,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::GateManagement => "Gate Management",
            Self::Accounting => "Accounting",
            Self::Crm => "CRM",
            Self::HrPayroll => "HR & Payroll",
            Self::Helpdesk => "Helpdesk",
        }
    }

    /// Monthly catalog price in KWD
    pub fn monthly_price_kwd(self) -> Decimal {
        let price: i64 = match self {
            Self::GateManagement => 59,
            Self::Accounting => 60,
            Self::Crm => 45,
            Self::HrPayroll => 70,
            Self::Helpdesk => 40,
        };
        Decimal::from(price)
    }

    /// Yearly catalog price in KWD (twelve monthly payments)
    pub fn yearly_price_kwd(self) -> Decimal {
        self.monthly_price_kwd() * Decimal::from(12)
    }

    /// Position in the catalog, used to keep selections in display order
    pub fn catalog_index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Module {
    type Err = PricingError;

    /// Catalog names are display names; matching is exact after trimming
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Module::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| PricingError::UnknownModule(name.to_string()))
    }
}

/// Base plan yearly price as a decimal
pub fn base_yearly_price() -> Decimal {
    Decimal::from(BASE_YEARLY_PRICE_KWD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_prices() {
        let prices: Vec<(String, Decimal)> = Module::ALL
            .iter()
            .map(|m| (m.name().to_string(), m.monthly_price_kwd()))
            .collect();

        assert_eq!(
            prices,
            vec![
                ("Gate Management".to_string(), Decimal::from(59)),
                ("Accounting".to_string(), Decimal::from(60)),
                ("CRM".to_string(), Decimal::from(45)),
                ("HR & Payroll".to_string(), Decimal::from(70)),
                ("Helpdesk".to_string(), Decimal::from(40)),
            ]
        );
    }

    #[test]
    fn test_yearly_price_is_twelve_months() {
        assert_eq!(Module::Crm.yearly_price_kwd(), Decimal::from(540));
        assert_eq!(Module::HrPayroll.yearly_price_kwd(), Decimal::from(840));
    }

    #[test]
    fn test_parse_module_names() {
        assert_eq!("HR & Payroll".parse::<Module>().unwrap(), Module::HrPayroll);
        assert_eq!(" CRM ".parse::<Module>().unwrap(), Module::Crm);
        assert_eq!(
            "crm".parse::<Module>().unwrap_err(),
            PricingError::UnknownModule("crm".to_string())
        );
    }

    #[test]
    fn test_catalog_index_follows_display_order() {
        for (idx, module) in Module::ALL.iter().enumerate() {
            assert_eq!(module.catalog_index(), idx);
        }
    }

    #[test]
    fn test_serde_uses_display_names() {
        assert_eq!(
            serde_json::to_string(&Module::HrPayroll).unwrap(),
            "\"HR & Payroll\""
        );
    }
}
