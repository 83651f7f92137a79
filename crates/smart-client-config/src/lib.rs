//! Configuration provider for a SMART on FHIR OAuth 2.0 client.
//!
//! This crate is the single source of the values a SMART App Launch client
//! (authorization-code flow with PKCE) needs to talk to its registered
//! authorization and FHIR servers:
//!
//! - Registered client constants ([`constants`])
//! - A typed, validated configuration record ([`config`])
//! - File and environment layering over the defaults ([`loader`])
//!
//! The authorization flow itself (PKCE generation, code exchange, token
//! refresh) and FHIR resource access live in the consuming application; this
//! crate only supplies their configuration seam. Constant reads never fail
//! and are safe from any number of threads.

pub mod config;
pub mod constants;
pub mod loader;

pub use config::{FhirEndpoints, SmartClientConfig, SmartEndpoints, StorageKeys};
pub use constants::{
    CLIENT_ID, CODE_VERIFIER_LOCAL_STORAGE_KEY, FHIR_BASE_URL, REDIRECT_URI, SMART_AUTH_URL,
    SMART_TOKEN_URL, TOKEN_RESPONSE_LOCAL_STORAGE_KEY,
};
pub use loader::{DEFAULT_CONFIG_PATH, load_config};

/// Error types for configuration operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// An invalid configuration value was provided.
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    /// A required configuration value is missing.
    #[error("Missing required configuration: {0}")]
    Missing(String),

    /// A configuration source could not be read or parsed.
    #[error("Configuration load error: {0}")]
    Load(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
