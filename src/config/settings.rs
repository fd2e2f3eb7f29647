use serde::{Deserialize, Serialize};

use crate::service::DEFAULT_REFERENCE_PREFIX;

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub orders: OrderSettings,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DisplaySettings {
    pub currency_symbol: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: "FCFA".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct OrderSettings {
    /// Prefix of generated references, e.g. "APP" gives APP-2026-006
    pub reference_prefix: String,
}

impl Default for OrderSettings {
    fn default() -> Self {
        Self {
            reference_prefix: DEFAULT_REFERENCE_PREFIX.to_string(),
        }
    }
}
