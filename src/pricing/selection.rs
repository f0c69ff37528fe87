use std::collections::HashSet;
use tracing::debug;

use crate::pricing::catalog::Module;
use crate::pricing::currency::Currency;
use crate::pricing::error::PricingError;

/// Mutable state behind the pricing card: display currency plus selected add-ons
///
/// Prices are never stored here; every figure is derived on demand from the
/// catalog and the current currency (see `calculator`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingSelection {
    currency: Currency,
    modules: HashSet<Module>,
}

impl PricingSelection {
    /// Create a selection in KWD with no modules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection with the given display currency
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            currency,
            modules: HashSet::new(),
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn set_currency(&mut self, currency: Currency) {
        debug!(from = %self.currency, to = %currency, "Changing display currency");
        self.currency = currency;
    }

    /// Set the currency from a textual code
    ///
    /// Unknown codes are rejected and leave the current currency in place.
    pub fn set_currency_code(&mut self, code: &str) -> Result<(), PricingError> {
        let currency = code.parse::<Currency>()?;
        self.set_currency(currency);
        Ok(())
    }

    /// Flip a module in or out of the selection
    ///
    /// Returns true when the module is selected afterwards.
    pub fn toggle(&mut self, module: Module) -> bool {
        let selected = if self.modules.remove(&module) {
            false
        } else {
            self.modules.insert(module);
            true
        };
        debug!(module = %module, selected, "Toggled customization module");
        selected
    }

    /// Toggle a module by catalog name
    ///
    /// Names outside the catalog are rejected and leave the selection unchanged.
    pub fn toggle_module(&mut self, name: &str) -> Result<bool, PricingError> {
        let module = name.parse::<Module>()?;
        Ok(self.toggle(module))
    }

    pub fn is_selected(&self, module: Module) -> bool {
        self.modules.contains(&module)
    }

    /// Selected modules in catalog order
    pub fn selected_modules(&self) -> Vec<Module> {
        let mut modules: Vec<Module> = self.modules.iter().copied().collect();
        modules.sort_by_key(|m| m.catalog_index());
        modules
    }

    pub fn selected_count(&self) -> usize {
        self.modules.len()
    }
}
