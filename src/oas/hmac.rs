//! HMAC request signing mode (`auth_configs["hmac"]`).

use serde::{Deserialize, Serialize};

use super::auth_sources::AuthSources;
use super::omit::is_zero;
use super::{AuthModeSection, Transcode};
use crate::legacy::{ApiDefinition, AuthConfig, AuthMode};

/// HMAC authentication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hmac {
    /// Legacy: `enable_signature_checking`.
    #[serde(default)]
    pub enabled: bool,
    #[serde(flatten)]
    pub auth_sources: AuthSources,
    /// e.g. `hmac-sha256`. Legacy: `hmac_allowed_algorithms`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_algorithms: Vec<String>,
    /// Tolerated clock skew in milliseconds; `0` disables the check.
    /// Legacy: `hmac_allowed_clock_skew`.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub allowed_clock_skew: f64,
}

impl Transcode for Hmac {
    fn fill(&mut self, api: &ApiDefinition) {
        self.enabled = api.enable_signature_checking;
        self.auth_sources.fill(&api.auth_config(AuthMode::Hmac));

        self.allowed_algorithms = api.hmac_allowed_algorithms.clone();
        self.allowed_clock_skew = api.hmac_allowed_clock_skew;
    }

    fn extract_to(&self, api: &mut ApiDefinition) {
        api.enable_signature_checking = self.enabled;

        let mut auth_config = AuthConfig::default();
        self.auth_sources.extract_to(&mut auth_config);
        api.auth_configs_mut().insert(AuthMode::Hmac, auth_config);

        api.hmac_allowed_algorithms = self.allowed_algorithms.clone();
        api.hmac_allowed_clock_skew = self.allowed_clock_skew;
    }
}

impl AuthModeSection for Hmac {
    const MODE: AuthMode = AuthMode::Hmac;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_and_extract() {
        let api = ApiDefinition {
            enable_signature_checking: true,
            auth_configs: Some(
                [(AuthMode::Hmac, AuthConfig {
                    auth_header_name: "Authorization".into(),
                    use_cookie: true,
                    cookie_name: "sig".into(),
                    ..Default::default()
                })]
                .into_iter()
                .collect(),
            ),
            hmac_allowed_algorithms: vec!["hmac-sha256".into(), "hmac-sha512".into()],
            hmac_allowed_clock_skew: 1500.5,
            ..Default::default()
        };

        let mut hmac = Hmac::default();
        hmac.fill(&api);
        assert!(hmac.enabled);
        assert_eq!(hmac.allowed_algorithms, vec!["hmac-sha256", "hmac-sha512"]);
        assert_eq!(hmac.allowed_clock_skew, 1500.5);
        assert!(hmac.auth_sources.cookie.is_some());

        let mut out = ApiDefinition::default();
        hmac.extract_to(&mut out);
        assert_eq!(out.auth_config(AuthMode::Hmac), api.auth_config(AuthMode::Hmac));
        assert_eq!(out.hmac_allowed_algorithms, api.hmac_allowed_algorithms);
        assert_eq!(out.hmac_allowed_clock_skew, 1500.5);
    }

    #[test]
    fn test_zero_skew_not_serialized() {
        let value = serde_json::to_value(Hmac::default()).unwrap();
        assert!(value.get("allowedClockSkew").is_none());
        assert_eq!(value["enabled"], false);
    }
}
