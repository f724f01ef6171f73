//! Configuration file parsing for Airline Checkout
//!
//! Supports:
//! - `.checkout/config.toml` - Page metadata and UI settings

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, load_settings_file, CONFIG_DIR, CONFIG_FILENAME};
pub use types::*;
