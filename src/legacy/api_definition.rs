//! The authentication-related slice of the legacy API definition.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::auth_config::{AuthConfig, AuthConfigs, AuthMode};

/// Flat, map-keyed API definition as consumed by the gateway engine.
///
/// Only the fields that take part in authentication are modelled here.
/// Mode-specific settings live in top-level fields rather than in `auth_configs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiDefinition {
    pub use_keyless: bool,
    pub strip_auth_data: bool,
    pub base_identity_provided_by: AuthTypeEnum,

    pub use_standard_auth: bool,
    pub enable_jwt: bool,
    pub use_basic_auth: bool,
    pub use_oauth2: bool,
    pub enable_signature_checking: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_configs: Option<AuthConfigs>,

    pub basic_auth: BasicAuthMeta,

    pub jwt_source: String,
    pub jwt_signing_method: String,
    pub jwt_identity_base_field: String,
    pub jwt_skip_kid: bool,
    pub jwt_scope_claim_name: String,
    pub jwt_scope_to_policy_mapping: BTreeMap<String, String>,
    pub jwt_policy_field_name: String,
    pub jwt_client_base_field: String,
    pub jwt_default_policies: Vec<String>,
    pub jwt_issued_at_validation_skew: u64,
    pub jwt_not_before_validation_skew: u64,
    pub jwt_expires_at_validation_skew: u64,

    pub oauth_meta: OAuth2Meta,
    pub notifications: NotificationsManager,

    pub hmac_allowed_algorithms: Vec<String>,
    pub hmac_allowed_clock_skew: f64,
}

impl ApiDefinition {
    /// True when the keyed map is present and holds at least one entry.
    pub fn has_auth_configs(&self) -> bool {
        self.auth_configs.as_ref().is_some_and(|configs| !configs.is_empty())
    }

    pub fn has_auth_config(&self, mode: AuthMode) -> bool {
        self.auth_configs
            .as_ref()
            .is_some_and(|configs| configs.contains(mode))
    }

    /// The entry registered for `mode`, or the zero value when there is none.
    pub fn auth_config(&self, mode: AuthMode) -> AuthConfig {
        self.auth_configs
            .as_ref()
            .and_then(|configs| configs.get(mode))
            .cloned()
            .unwrap_or_default()
    }

    /// Mutable access to the keyed map, creating it if absent.
    pub fn auth_configs_mut(&mut self) -> &mut AuthConfigs {
        self.auth_configs.get_or_insert_with(AuthConfigs::new)
    }
}

/// Base identity provider selector, shared by both schemas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthTypeEnum {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "auth_token")]
    AuthToken,
    #[serde(rename = "hmac_key")]
    HmacKey,
    #[serde(rename = "basic_auth_user")]
    BasicAuthUser,
    #[serde(rename = "jwt_claim")]
    JwtClaim,
    #[serde(rename = "oidc_user")]
    OidcUser,
    #[serde(rename = "oauth_key")]
    OAuthKey,
}

impl AuthTypeEnum {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Basic authentication caching and body extraction settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicAuthMeta {
    pub disable_caching: bool,
    pub cache_ttl: i32,
    pub extract_from_body: bool,
    pub body_user_regexp: String,
    pub body_password_regexp: String,
}

/// OAuth2 grant metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuth2Meta {
    pub allowed_access_types: Vec<AccessRequestType>,
    pub allowed_authorize_types: Vec<AuthorizeRequestType>,
    pub auth_login_redirect: String,
}

/// OAuth2 token endpoint grant types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessRequestType {
    #[serde(rename = "authorization_code")]
    AuthorizationCode,
    #[serde(rename = "refresh_token")]
    RefreshToken,
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "client_credentials")]
    ClientCredentials,
    #[serde(rename = "assertion")]
    Assertion,
    #[serde(rename = "__implicit")]
    Implicit,
}

/// OAuth2 authorize endpoint response types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorizeRequestType {
    #[serde(rename = "code")]
    Code,
    #[serde(rename = "token")]
    Token,
}

/// Key-change notification hook for OAuth clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsManager {
    pub shared_secret: String,
    pub oauth_on_keychange_url: String,
}
