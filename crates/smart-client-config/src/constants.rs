//! Registered SMART on FHIR client constants.
//!
//! These values are fixed at registration time with the authorization server
//! and must match it byte for byte. The typed layer in [`crate::config`] uses
//! them as its defaults; collaborators that only need a single value can read
//! them directly.

/// OAuth 2.0 client ID registered with the authorization server.
pub const CLIENT_ID: &str = "776a8610-3d70-45e0-968d-e0175d594c29";

/// Root endpoint of the target FHIR R4 server API.
pub const FHIR_BASE_URL: &str = "https://fhir.epic.com/interconnect-fhir-oauth/api/FHIR/R4";

/// SMART on FHIR OAuth 2.0 authorize endpoint.
pub const SMART_AUTH_URL: &str = "https://fhir.epic.com/interconnect-fhir-oauth/oauth2/authorize";

/// SMART on FHIR OAuth 2.0 token endpoint.
pub const SMART_TOKEN_URL: &str = "https://fhir.epic.com/interconnect-fhir-oauth/oauth2/token";

/// Callback URI registered for the authorization-code flow.
pub const REDIRECT_URI: &str = "http://localhost:5173/";

/// Key under which the PKCE code verifier is persisted locally.
pub const CODE_VERIFIER_LOCAL_STORAGE_KEY: &str = "smart_code_verifier";

/// Key under which an obtained token response is persisted locally.
pub const TOKEN_RESPONSE_LOCAL_STORAGE_KEY: &str = "smart_token_response";
