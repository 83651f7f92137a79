//! Typed SMART on FHIR client configuration.
//!
//! This module provides the configuration record for the client application,
//! organized into logical subsections for the OAuth 2.0 client registration,
//! FHIR endpoints, SMART authorization endpoints, and local storage keys.
//!
//! # Example (TOML)
//!
//! ```toml
//! client_id = "776a8610-3d70-45e0-968d-e0175d594c29"
//! redirect_uri = "http://localhost:5173/"
//!
//! [fhir]
//! base_url = "https://fhir.epic.com/interconnect-fhir-oauth/api/FHIR/R4"
//! ```

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants;
use crate::{ConfigError, Result};

/// Root configuration for the SMART on FHIR client application.
///
/// Every field defaults to the registered value in [`crate::constants`], so
/// `SmartClientConfig::default()` is the configuration the application ships
/// with. The record is immutable after loading; there is no mutation
/// operation and no reload path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SmartClientConfig {
    /// OAuth 2.0 client ID registered with the authorization server.
    pub client_id: String,

    /// Callback URI registered for the authorization-code flow.
    /// Must match the registration exactly or the authorize request is
    /// rejected by the server.
    pub redirect_uri: String,

    /// FHIR server endpoints.
    pub fhir: FhirEndpoints,

    /// SMART on FHIR authorization server endpoints.
    pub smart: SmartEndpoints,

    /// Local storage key names.
    pub storage: StorageKeys,
}

impl Default for SmartClientConfig {
    fn default() -> Self {
        Self {
            client_id: default_client_id(),
            redirect_uri: default_redirect_uri(),
            fhir: FhirEndpoints::default(),
            smart: SmartEndpoints::default(),
            storage: StorageKeys::default(),
        }
    }
}

/// FHIR server endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FhirEndpoints {
    /// Root endpoint of the FHIR R4 server API.
    pub base_url: String,
}

impl Default for FhirEndpoints {
    fn default() -> Self {
        Self {
            base_url: default_fhir_base_url(),
        }
    }
}

/// SMART on FHIR authorization server endpoints.
///
/// In a full deployment these are discovered from the server's
/// `/.well-known/smart-configuration` document; this client pins the known
/// endpoints of its registered sandbox instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SmartEndpoints {
    /// OAuth 2.0 authorize endpoint.
    pub authorize_url: String,

    /// OAuth 2.0 token endpoint.
    pub token_url: String,
}

impl Default for SmartEndpoints {
    fn default() -> Self {
        Self {
            authorize_url: default_authorize_url(),
            token_url: default_token_url(),
        }
    }
}

/// Names under which the auth flow persists its state locally.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageKeys {
    /// Key for the PKCE code verifier awaiting the callback.
    pub code_verifier_key: String,

    /// Key for the obtained token response.
    pub token_response_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            code_verifier_key: default_code_verifier_key(),
            token_response_key: default_token_response_key(),
        }
    }
}

fn default_client_id() -> String {
    constants::CLIENT_ID.to_string()
}
fn default_redirect_uri() -> String {
    constants::REDIRECT_URI.to_string()
}
fn default_fhir_base_url() -> String {
    constants::FHIR_BASE_URL.to_string()
}
fn default_authorize_url() -> String {
    constants::SMART_AUTH_URL.to_string()
}
fn default_token_url() -> String {
    constants::SMART_TOKEN_URL.to_string()
}
fn default_code_verifier_key() -> String {
    constants::CODE_VERIFIER_LOCAL_STORAGE_KEY.to_string()
}
fn default_token_response_key() -> String {
    constants::TOKEN_RESPONSE_LOCAL_STORAGE_KEY.to_string()
}

impl SmartClientConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if:
    /// - Any field is empty
    /// - An endpoint or the redirect URI is not an absolute URL
    /// - The two storage keys collide
    pub fn validate(&self) -> Result<()> {
        if self.client_id.is_empty() {
            return Err(ConfigError::InvalidValue(
                "client_id cannot be empty".to_string(),
            ));
        }

        require_url("redirect_uri", &self.redirect_uri)?;
        require_url("fhir.base_url", &self.fhir.base_url)?;
        require_url("smart.authorize_url", &self.smart.authorize_url)?;
        require_url("smart.token_url", &self.smart.token_url)?;

        if self.storage.code_verifier_key.is_empty() {
            return Err(ConfigError::InvalidValue(
                "storage.code_verifier_key cannot be empty".to_string(),
            ));
        }
        if self.storage.token_response_key.is_empty() {
            return Err(ConfigError::InvalidValue(
                "storage.token_response_key cannot be empty".to_string(),
            ));
        }
        if self.storage.code_verifier_key == self.storage.token_response_key {
            return Err(ConfigError::InvalidValue(format!(
                "storage keys must be distinct, both are '{}'",
                self.storage.code_verifier_key
            )));
        }

        Ok(())
    }
}

fn require_url(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ConfigError::InvalidValue(format!(
            "{field} cannot be empty"
        )));
    }
    Url::parse(value).map_err(|e| {
        ConfigError::InvalidValue(format!("{field} is not a valid URL: '{value}' ({e})"))
    })?;
    Ok(())
}
