//! Settings parser for .checkout/config.toml

use super::types::Settings;
use checkout_core::prelude::*;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const CONFIG_DIR: &str = ".checkout";

/// Load settings from `<base>/.checkout/config.toml`
///
/// Never fails: a missing or malformed file yields defaults (and a log line).
pub fn load_settings(base_path: &Path) -> Settings {
    let config_path = base_path.join(CONFIG_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match load_settings_file(&config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("{}", e);
            Settings::default()
        }
    }
}

/// Load settings from an explicit file path
///
/// Used for `--config`, where a bad path should be reported instead of
/// silently falling back.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::config_not_found(path));
    }

    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::config_invalid(path, e.to_string()))
}

/// Create a default config file in `<base>/.checkout/`
///
/// An existing config file is left untouched.
pub fn init_config_dir(base_path: &Path) -> Result<()> {
    let config_dir = base_path.join(CONFIG_DIR);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)
            .map_err(|e| Error::config(format!("Failed to create .checkout dir: {}", e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Airline Checkout Configuration

[page]
title = "Checkout - Airline"
description = "Complete your booking"

[ui]
# Show the list of available coupon codes under the input
show_available_coupons = true
# Show the key binding footer
show_key_hints = true
"#;
        std::fs::write(&config_path, default_content)?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let config_dir = temp.path().join(".checkout");
        std::fs::create_dir_all(&config_dir).unwrap();

        let config = r#"
[page]
title = "Pago - Aerolínea"

[ui]
show_available_coupons = false
"#;
        std::fs::write(config_dir.join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.page.title, "Pago - Aerolínea");
        assert_eq!(settings.page.description, "Complete your booking");
        assert!(!settings.ui.show_available_coupons);
        assert!(settings.ui.show_key_hints);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let config_dir = temp.path().join(".checkout");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "not valid toml {{{{").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_file_missing() {
        let temp = tempdir().unwrap();
        let err = load_settings_file(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_settings_file_invalid() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "[ui]\nshow_key_hints = \"yes\"\n").unwrap();

        let err = load_settings_file(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_init_config_dir() {
        let temp = tempdir().unwrap();

        init_config_dir(temp.path()).unwrap();

        let path = temp.path().join(".checkout/config.toml");
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        let settings: Settings = toml::from_str(&content).expect("Default config should be valid TOML");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_dir_keeps_existing() {
        let temp = tempdir().unwrap();
        let config_dir = temp.path().join(".checkout");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "[ui]\nshow_key_hints = false\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        assert!(!load_settings(temp.path()).ui.show_key_hints);
    }
}
