use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::pricing::Currency;

/// Longest simulated delay accepted for chat replies and form submissions
const MAX_SIMULATED_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub pricing: PricingConfig,
    pub chat: ChatConfig,
    pub forms: FormsConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Currency used when a quote request does not name one
    pub default_currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_currency: Currency::default().code().to_string(),
        }
    }
}

impl PricingConfig {
    pub fn currency(&self) -> anyhow::Result<Currency> {
        Ok(self.default_currency.parse::<Currency>()?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChatConfig {
    pub reply_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { reply_delay_ms: 1000 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormsConfig {
    pub contact_delay_ms: u64,
    pub contact_success_display_secs: u64,
    pub newsletter_delay_ms: u64,
    pub newsletter_success_display_secs: u64,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            contact_delay_ms: 2000,
            contact_success_display_secs: 5,
            newsletter_delay_ms: 1500,
            newsletter_success_display_secs: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "/metrics".to_string(),
        }
    }
}

/// Load configuration: built-in defaults, then the TOML file at `path` if it
/// exists, then `MOVE_LANDING__*` environment variables.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("MOVE_LANDING").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        anyhow::bail!("Server port must be non-zero");
    }

    if cfg.server.host.parse::<std::net::IpAddr>().is_err() {
        anyhow::bail!("Server host '{}' is not a valid IP address", cfg.server.host);
    }

    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}': expected 'text' or 'json'", other),
    }

    if cfg.pricing.default_currency.parse::<Currency>().is_err() {
        anyhow::bail!(
            "Invalid default currency '{}': expected one of KWD, AED, INR, USD",
            cfg.pricing.default_currency
        );
    }

    let delays = [
        ("chat.reply_delay_ms", cfg.chat.reply_delay_ms),
        ("forms.contact_delay_ms", cfg.forms.contact_delay_ms),
        ("forms.newsletter_delay_ms", cfg.forms.newsletter_delay_ms),
    ];
    for (name, value) in delays {
        if value > MAX_SIMULATED_DELAY_MS {
            anyhow::bail!(
                "{} is {}ms, maximum is {}ms",
                name,
                value,
                MAX_SIMULATED_DELAY_MS
            );
        }
    }

    if cfg.metrics.enabled && !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!("Metrics endpoint must start with '/'");
    }

    Ok(())
}
