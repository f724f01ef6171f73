//! Configuration types for Airline Checkout
//!
//! Defines:
//! - `Settings` - Application settings
//! - `PageSettings` - Metadata supplied to the hosting page
//! - `UiSettings` - Optional UI chrome

use serde::{Deserialize, Serialize};

/// Application settings (.checkout/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub page: PageSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Page metadata
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageSettings {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_description")]
    pub description: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
        }
    }
}

fn default_title() -> String {
    "Checkout - Airline".to_string()
}

fn default_description() -> String {
    "Complete your booking".to_string()
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the "Cupones disponibles:" hint list under the coupon input
    #[serde(default = "default_true")]
    pub show_available_coupons: bool,

    /// Show the key binding footer
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_available_coupons: true,
            show_key_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}
