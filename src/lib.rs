//! Airline Checkout Library
//!
//! Terminal checkout page for a single flight booking with coupon
//! validation. The interactive screen lives in `checkout-tui`; this crate
//! wires it together with settings, logging, and the headless mode.

pub mod headless;

use std::path::Path;

use checkout_app::config::{self, Settings};
use checkout_core::prelude::*;

// Re-export main entry points
pub use headless::run_headless;

/// Install error reporting and file logging
///
/// Logging goes to a file because the TUI owns stdout.
pub fn init() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    checkout_core::logging::init()?;
    Ok(())
}

/// Resolve settings: an explicit `--config` file must load, otherwise
/// `.checkout/config.toml` under `base_path` is optional
pub fn resolve_settings(base_path: &Path, config_path: Option<&Path>) -> Result<Settings> {
    match config_path {
        Some(path) => config::load_settings_file(path),
        None => Ok(config::load_settings(base_path)),
    }
}

/// Run the interactive checkout screen
pub fn run(settings: Settings) -> Result<()> {
    let result = checkout_tui::run(settings);

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Airline Checkout exiting");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_settings_defaults_without_file() {
        let dir = tempdir().unwrap();
        let settings = resolve_settings(dir.path(), None).unwrap();
        assert_eq!(settings.page.title, "Checkout - Airline");
    }

    #[test]
    fn test_resolve_settings_explicit_missing_file_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = resolve_settings(dir.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_resolve_settings_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[page]\ntitle = \"Vuelo\"\n").unwrap();

        let settings = resolve_settings(dir.path(), Some(&path)).unwrap();
        assert_eq!(settings.page.title, "Vuelo");
        assert_eq!(settings.page.description, "Complete your booking");
    }
}
