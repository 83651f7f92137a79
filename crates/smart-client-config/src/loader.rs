//! Configuration loading.
//!
//! Layers an optional TOML file and `SMART_CLIENT__*` environment variables
//! over the built-in defaults. With neither present, the loaded configuration
//! is exactly [`SmartClientConfig::default()`], i.e. the registered values in
//! [`crate::constants`].

use std::path::PathBuf;

use config::{Config, Environment, File};

use crate::config::SmartClientConfig;
use crate::{ConfigError, Result};

/// Default configuration file path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "smart-client.toml";

/// Loads the client configuration.
///
/// A missing file is not an error; the file layer is simply skipped.
/// Environment variables use the `SMART_CLIENT` prefix with `__` as the
/// nesting separator, e.g. `SMART_CLIENT__SMART__TOKEN_URL`.
///
/// # Errors
///
/// Returns `ConfigError::Load` if the file or environment layer cannot be
/// parsed, and `ConfigError::InvalidValue` if the merged configuration fails
/// validation.
pub fn load_config(path: Option<&str>) -> Result<SmartClientConfig> {
    let mut builder = Config::builder();
    let file_path = PathBuf::from(path.unwrap_or(DEFAULT_CONFIG_PATH));
    let file_present = file_path.exists();
    if file_present {
        builder = builder.add_source(File::from(file_path.clone()));
    }
    builder = builder.add_source(
        Environment::with_prefix("SMART_CLIENT")
            .try_parsing(true)
            .separator("__"),
    );

    let merged: SmartClientConfig = builder
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;
    merged.validate()?;

    tracing::debug!(
        path = %file_path.display(),
        file_present,
        "Client configuration loaded"
    );
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;
    use std::sync::Mutex;

    use super::*;
    use crate::constants;

    // load_config reads process environment, so tests that touch it must not
    // run concurrently.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_missing_file_yields_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let loaded = load_config(Some("/nonexistent/smart-client.toml")).unwrap();
        assert_eq!(loaded, SmartClientConfig::default());
        assert_eq!(loaded.redirect_uri, constants::REDIRECT_URI);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "client_id = \"file-client\"").unwrap();
        writeln!(file, "[fhir]").unwrap();
        writeln!(file, "base_url = \"https://fhir.example.com/R4\"").unwrap();
        file.flush().unwrap();

        let loaded = load_config(file.path().to_str()).unwrap();
        assert_eq!(loaded.client_id, "file-client");
        assert_eq!(loaded.fhir.base_url, "https://fhir.example.com/R4");
        // Sections absent from the file keep the registered defaults
        assert_eq!(loaded.smart.token_url, constants::SMART_TOKEN_URL);
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[smart]").unwrap();
        writeln!(file, "token_url = \"https://file.example.com/token\"").unwrap();
        file.flush().unwrap();

        unsafe {
            std::env::set_var(
                "SMART_CLIENT__SMART__TOKEN_URL",
                "https://env.example.com/token",
            );
        }
        let loaded = load_config(file.path().to_str());
        unsafe {
            std::env::remove_var("SMART_CLIENT__SMART__TOKEN_URL");
        }

        let loaded = loaded.unwrap();
        assert_eq!(loaded.smart.token_url, "https://env.example.com/token");
        assert_eq!(loaded.smart.authorize_url, constants::SMART_AUTH_URL);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "redirect_uri = \"not a url\"").unwrap();
        file.flush().unwrap();

        let err = load_config(file.path().to_str()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
        assert!(err.to_string().contains("redirect_uri"));
    }

    #[test]
    fn test_malformed_file_is_a_load_error() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "client_id = ").unwrap();
        file.flush().unwrap();

        let err = load_config(file.path().to_str()).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }
}
