//! JWT authentication mode (`auth_configs["jwt"]`).
//!
//! Unlike the other modes, a JWT section is never collapsed for being all-default.
//! Its presence follows the `"jwt"` key of the legacy map and nothing else, so a
//! zero-value `"jwt": {}` entry survives a round trip.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::auth_sources::AuthSources;
use super::omit::is_zero;
use super::{AuthModeSection, Transcode};
use crate::legacy::{ApiDefinition, AuthConfig, AuthMode};

/// JSON Web Token authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jwt {
    /// Legacy: `enable_jwt`.
    #[serde(default)]
    pub enabled: bool,
    #[serde(flatten)]
    pub auth_sources: AuthSources,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub signing_method: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub identity_base_field: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub skip_kid: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub scope_claim_name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scope_to_policy_mapping: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub policy_field_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_base_field: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_policies: Vec<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub issued_at_validation_skew: u64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub not_before_validation_skew: u64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub expires_at_validation_skew: u64,
}

impl Transcode for Jwt {
    fn fill(&mut self, api: &ApiDefinition) {
        self.auth_sources.fill(&api.auth_config(AuthMode::Jwt));

        self.enabled = api.enable_jwt;
        self.source = api.jwt_source.clone();
        self.signing_method = api.jwt_signing_method.clone();
        self.identity_base_field = api.jwt_identity_base_field.clone();
        self.skip_kid = api.jwt_skip_kid;
        self.scope_claim_name = api.jwt_scope_claim_name.clone();
        self.scope_to_policy_mapping = api.jwt_scope_to_policy_mapping.clone();
        self.policy_field_name = api.jwt_policy_field_name.clone();
        self.client_base_field = api.jwt_client_base_field.clone();
        self.default_policies = api.jwt_default_policies.clone();
        self.issued_at_validation_skew = api.jwt_issued_at_validation_skew;
        self.not_before_validation_skew = api.jwt_not_before_validation_skew;
        self.expires_at_validation_skew = api.jwt_expires_at_validation_skew;
    }

    fn extract_to(&self, api: &mut ApiDefinition) {
        let mut auth_config = AuthConfig::default();
        self.auth_sources.extract_to(&mut auth_config);
        api.auth_configs_mut().insert(AuthMode::Jwt, auth_config);

        api.enable_jwt = self.enabled;
        api.jwt_source = self.source.clone();
        api.jwt_signing_method = self.signing_method.clone();
        api.jwt_identity_base_field = self.identity_base_field.clone();
        api.jwt_skip_kid = self.skip_kid;
        api.jwt_scope_claim_name = self.scope_claim_name.clone();
        api.jwt_scope_to_policy_mapping = self.scope_to_policy_mapping.clone();
        api.jwt_policy_field_name = self.policy_field_name.clone();
        api.jwt_client_base_field = self.client_base_field.clone();
        api.jwt_default_policies = self.default_policies.clone();
        api.jwt_issued_at_validation_skew = self.issued_at_validation_skew;
        api.jwt_not_before_validation_skew = self.not_before_validation_skew;
        api.jwt_expires_at_validation_skew = self.expires_at_validation_skew;
    }
}

impl AuthModeSection for Jwt {
    const MODE: AuthMode = AuthMode::Jwt;
    const OMIT_WHEN_DEFAULT: bool = false;
}
