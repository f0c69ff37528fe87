use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::pricing::error::PricingError;

/// Display currencies offered by the pricing card
///
/// Rates are relative to KWD, the currency every catalog price is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Kwd,
    Aed,
    Inr,
    Usd,
}

impl Currency {
    /// All currencies in the order the selector lists them
    pub const ALL: [Currency; 4] = [Currency::Kwd, Currency::Aed, Currency::Inr, Currency::Usd];

    /// ISO code
    pub fn code(self) -> &'static str {
        match self {
            Self::Kwd => "KWD",
            Self::Aed => "AED",
            Self::Inr => "INR",
            Self::Usd => "USD",
        }
    }

    /// Symbol prepended to formatted amounts
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Kwd => "KWD",
            Self::Aed => "AED",
            Self::Inr => "₹",
            Self::Usd => "$",
        }
    }

    /// Human readable name for selection controls
    pub fn label(self) -> &'static str {
        match self {
            Self::Kwd => "Kuwaiti Dinar",
            Self::Aed => "UAE Dirham",
            Self::Inr => "Indian Rupee",
            Self::Usd => "US Dollar",
        }
    }

    /// Units of this currency per 1 KWD
    pub fn rate(self) -> Decimal {
        match self {
            Self::Kwd => Decimal::ONE,
            Self::Aed => Decimal::new(1205, 2),
            Self::Inr => Decimal::new(10189, 2),
            Self::Usd => Decimal::new(328, 2),
        }
    }

    /// Fixed number of decimal places shown for this currency
    pub fn decimal_places(self) -> u32 {
        match self {
            Self::Kwd => 3,
            Self::Aed | Self::Usd => 2,
            Self::Inr => 0,
        }
    }

    /// Convert a KWD amount into this currency and format it as `"<symbol> <amount>"`
    ///
    /// Rounds half away from zero to the currency's precision and always renders
    /// exactly that many decimals.
    pub fn format_kwd(self, amount_kwd: Decimal) -> String {
        format!("{} {}", self.symbol(), self.format_amount(amount_kwd * self.rate()))
    }

    /// Format an amount already expressed in this currency, without symbol
    pub fn format_amount(self, amount: Decimal) -> String {
        let places = self.decimal_places();
        let mut rounded =
            amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        // round_dp never adds trailing zeros, rescale pads them
        rounded.rescale(places);
        rounded.to_string()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| PricingError::InvalidCurrency(code.to_string()))
    }
}
