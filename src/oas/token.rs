//! Standard token authentication mode (`auth_configs["authToken"]`).

use serde::{Deserialize, Serialize};

use super::auth_sources::AuthSources;
use super::omit::{fill_optional, is_zero};
use super::{AuthModeSection, Transcode};
use crate::legacy::{ApiDefinition, AuthConfig, AuthMode};

/// Token based authentication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Legacy: `use_standard_auth`.
    #[serde(default)]
    pub enabled: bool,
    #[serde(flatten)]
    pub auth_sources: AuthSources,
    /// Legacy: `auth_configs["authToken"].use_certificate`.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub enable_client_certificate: bool,
    #[serde(
        rename = "signatureValidation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub signature: Option<Signature>,
}

impl Transcode for Token {
    fn fill(&mut self, api: &ApiDefinition) {
        let auth_token = api.auth_config(AuthMode::AuthToken);

        self.enabled = api.use_standard_auth;
        self.auth_sources.fill(&auth_token);
        self.enable_client_certificate = auth_token.use_certificate;

        fill_optional(&mut self.signature, |signature| signature.fill(&auth_token));
    }

    fn extract_to(&self, api: &mut ApiDefinition) {
        api.use_standard_auth = self.enabled;

        let mut auth_config = AuthConfig {
            use_certificate: self.enable_client_certificate,
            ..Default::default()
        };
        self.auth_sources.extract_to(&mut auth_config);

        if let Some(signature) = &self.signature {
            signature.extract_to(&mut auth_config);
        }

        api.auth_configs_mut().insert(AuthMode::AuthToken, auth_config);
    }
}

impl AuthModeSection for Token {
    const MODE: AuthMode = AuthMode::AuthToken;
}

/// Request signature validation for token authentication.
///
/// Legacy: `auth_configs["authToken"].validate_signature` and `.signature`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub algorithm: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub header: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub secret: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub allowed_clock_skew: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub error_code: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_message: String,
}

impl Signature {
    pub fn fill(&mut self, auth_config: &AuthConfig) {
        let signature = &auth_config.signature;

        self.enabled = auth_config.validate_signature;
        self.algorithm = signature.algorithm.clone();
        self.header = signature.header.clone();
        self.secret = signature.secret.clone();
        self.allowed_clock_skew = signature.allowed_clock_skew;
        self.error_code = signature.error_code;
        self.error_message = signature.error_message.clone();
    }

    pub fn extract_to(&self, auth_config: &mut AuthConfig) {
        auth_config.validate_signature = self.enabled;

        let signature = &mut auth_config.signature;
        signature.algorithm = self.algorithm.clone();
        signature.header = self.header.clone();
        signature.secret = self.secret.clone();
        signature.allowed_clock_skew = self.allowed_clock_skew;
        signature.error_code = self.error_code;
        signature.error_message = self.error_message.clone();
    }
}
