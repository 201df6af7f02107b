//! Top-level authentication section of the OAS document.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::basic::Basic;
use super::hmac::Hmac;
use super::jwt::Jwt;
use super::oauth::OAuth;
use super::omit::{is_zero, omit_if_default};
use super::token::Token;
use super::{AuthModeSection, Transcode};
use crate::legacy::{ApiDefinition, AuthTypeEnum};

/// Authentication settings of an API.
///
/// Each mode is either fully populated or absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authentication {
    /// Protects the API when one of the modes is enabled. Legacy: `!use_keyless`.
    #[serde(default)]
    pub enabled: bool,
    /// Strips credentials before proxying upstream. Legacy: `strip_auth_data`.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub strip_authorization_data: bool,
    /// Which mode provides the session when several are enabled.
    /// Legacy: `base_identity_provided_by`.
    #[serde(default, skip_serializing_if = "AuthTypeEnum::is_none")]
    pub base_identity_provider: AuthTypeEnum,
    /// Legacy: `auth_configs["authToken"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<Token>,
    /// Legacy: `auth_configs["jwt"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwt: Option<Jwt>,
    /// Legacy: `auth_configs["basic"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic: Option<Basic>,
    /// Legacy: `auth_configs["oauth"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth: Option<OAuth>,
    /// Legacy: `auth_configs["hmac"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hmac: Option<Hmac>,
}

impl Authentication {
    /// Build a fresh section from a legacy definition.
    pub fn from_legacy(api: &ApiDefinition) -> Self {
        let mut authentication = Self::default();
        authentication.fill(api);
        authentication
    }

    /// Extract into a default legacy definition.
    pub fn to_legacy(&self) -> ApiDefinition {
        let mut api = ApiDefinition::default();
        self.extract_to(&mut api);
        api
    }
}

impl Transcode for Authentication {
    fn fill(&mut self, api: &ApiDefinition) {
        self.enabled = !api.use_keyless;
        self.strip_authorization_data = api.strip_auth_data;
        self.base_identity_provider = api.base_identity_provided_by;

        if !api.has_auth_configs() {
            debug!("no auth_configs entries; leaving every mode absent");
            return;
        }

        fill_mode(&mut self.token, api);
        fill_mode(&mut self.jwt, api);
        fill_mode(&mut self.basic, api);
        fill_mode(&mut self.oauth, api);
        fill_mode(&mut self.hmac, api);
    }

    /// Absent modes leave any existing `auth_configs` entry in `api` untouched.
    fn extract_to(&self, api: &mut ApiDefinition) {
        api.use_keyless = !self.enabled;
        api.strip_auth_data = self.strip_authorization_data;
        api.base_identity_provided_by = self.base_identity_provider;

        extract_mode(&self.token, api);
        extract_mode(&self.jwt, api);
        extract_mode(&self.basic, api);
        extract_mode(&self.oauth, api);
        extract_mode(&self.hmac, api);
    }
}

/// Materialize a mode when the legacy map has its key, then collapse it if it
/// came out all-default and the mode allows that.
fn fill_mode<M: AuthModeSection>(slot: &mut Option<M>, api: &ApiDefinition) {
    if !api.has_auth_config(M::MODE) {
        return;
    }

    let mode = M::MODE;
    slot.get_or_insert_with(M::default).fill(api);

    if M::OMIT_WHEN_DEFAULT && omit_if_default(slot) {
        debug!(%mode, "auth mode is all-default, omitting");
    } else {
        debug!(%mode, "auth mode materialized");
    }
}

fn extract_mode<M: AuthModeSection>(slot: &Option<M>, api: &mut ApiDefinition) {
    if let Some(mode) = slot {
        mode.extract_to(api);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legacy::{AuthConfig, AuthConfigs, AuthMode};

    fn api_with_keys(modes: &[AuthMode]) -> ApiDefinition {
        ApiDefinition {
            auth_configs: Some(
                modes
                    .iter()
                    .map(|mode| (*mode, AuthConfig::default()))
                    .collect::<AuthConfigs>(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn test_top_level_scalars() {
        let api = ApiDefinition {
            use_keyless: false,
            strip_auth_data: true,
            base_identity_provided_by: AuthTypeEnum::HmacKey,
            ..Default::default()
        };

        let authentication = Authentication::from_legacy(&api);
        assert!(authentication.enabled);
        assert!(authentication.strip_authorization_data);
        assert_eq!(authentication.base_identity_provider, AuthTypeEnum::HmacKey);
        assert!(authentication.token.is_none());
    }

    #[test]
    fn test_all_zero_token_is_omitted_but_jwt_is_kept() {
        let authentication = Authentication::from_legacy(&api_with_keys(&[
            AuthMode::AuthToken,
            AuthMode::Jwt,
        ]));

        assert!(authentication.token.is_none());
        assert_eq!(authentication.jwt, Some(Jwt::default()));
    }

    #[test]
    fn test_enabled_flag_keeps_mode() {
        let mut api = api_with_keys(&[AuthMode::Basic, AuthMode::OAuth, AuthMode::Hmac]);
        api.use_basic_auth = true;
        api.enable_signature_checking = true;

        let authentication = Authentication::from_legacy(&api);
        assert!(authentication.basic.as_ref().is_some_and(|basic| basic.enabled));
        assert!(authentication.oauth.is_none());
        assert!(authentication.hmac.as_ref().is_some_and(|hmac| hmac.enabled));
    }

    #[test]
    fn test_mode_without_key_is_absent_even_when_enabled() {
        let mut api = api_with_keys(&[AuthMode::Hmac]);
        api.use_standard_auth = true;
        api.enable_signature_checking = true;

        let authentication = Authentication::from_legacy(&api);
        assert!(authentication.token.is_none());
        assert!(authentication.hmac.is_some());
    }

    #[test]
    fn test_extract_absent_modes_leave_target_entries() {
        let mut api = api_with_keys(&[AuthMode::Basic]);
        api.use_basic_auth = true;

        Authentication {
            enabled: true,
            ..Default::default()
        }
        .extract_to(&mut api);

        assert!(!api.use_keyless);
        assert!(api.use_basic_auth);
        assert!(api.has_auth_config(AuthMode::Basic));
    }

    #[test]
    fn test_serialized_shape_skips_absent_modes() {
        let value = serde_json::to_value(Authentication::default()).unwrap();
        assert_eq!(value, serde_json::json!({"enabled": false}));
    }
}
