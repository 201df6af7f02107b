//! Per-mode auth configuration entries and the keyed map that holds them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The closed set of keys the legacy `auth_configs` map understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AuthMode {
    #[serde(rename = "authToken")]
    AuthToken,
    #[serde(rename = "jwt")]
    Jwt,
    #[serde(rename = "basic")]
    Basic,
    #[serde(rename = "oauth")]
    OAuth,
    #[serde(rename = "hmac")]
    Hmac,
}

impl AuthMode {
    /// All modes, in the order the transcoder visits them.
    pub const ALL: [AuthMode; 5] = [
        AuthMode::AuthToken,
        AuthMode::Jwt,
        AuthMode::Basic,
        AuthMode::OAuth,
        AuthMode::Hmac,
    ];

    /// The key used for this mode in the legacy map.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AuthToken => "authToken",
            Self::Jwt => "jwt",
            Self::Basic => "basic",
            Self::OAuth => "oauth",
            Self::Hmac => "hmac",
        }
    }
}

impl std::fmt::Display for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credential location and signature settings for one authentication mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub use_param: bool,
    pub param_name: String,
    pub use_cookie: bool,
    pub cookie_name: String,
    pub auth_header_name: String,
    pub use_certificate: bool,
    pub validate_signature: bool,
    pub signature: SignatureConfig,
}

/// Request signature validation settings carried by an [`AuthConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureConfig {
    pub algorithm: String,
    pub header: String,
    pub secret: String,
    pub allowed_clock_skew: i64,
    pub error_code: i32,
    pub error_message: String,
}

/// The legacy `auth_configs` map, keyed by [`AuthMode`].
///
/// Serialized as an object whose keys are the mode names (`"authToken"`, `"jwt"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthConfigs(BTreeMap<AuthMode, AuthConfig>);

impl AuthConfigs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, mode: AuthMode) -> Option<&AuthConfig> {
        self.0.get(&mode)
    }

    pub fn contains(&self, mode: AuthMode) -> bool {
        self.0.contains_key(&mode)
    }

    /// Insert or replace the entry for `mode`, returning the previous one.
    pub fn insert(&mut self, mode: AuthMode, config: AuthConfig) -> Option<AuthConfig> {
        self.0.insert(mode, config)
    }

    pub fn remove(&mut self, mode: AuthMode) -> Option<AuthConfig> {
        self.0.remove(&mode)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AuthMode, &AuthConfig)> {
        self.0.iter()
    }
}

impl FromIterator<(AuthMode, AuthConfig)> for AuthConfigs {
    fn from_iter<I: IntoIterator<Item = (AuthMode, AuthConfig)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_configs_serialize_with_mode_keys() {
        let configs: AuthConfigs = [
            (AuthMode::AuthToken, AuthConfig::default()),
            (AuthMode::Hmac, AuthConfig::default()),
        ]
        .into_iter()
        .collect();

        let value = serde_json::to_value(&configs).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("authToken"));
        assert!(object.contains_key("hmac"));
        assert_eq!(object.len(), 2);
    }

    #[test]
    fn test_auth_config_partial_document() {
        let config: AuthConfig =
            serde_json::from_str(r#"{"use_param": true, "param_name": "token"}"#).unwrap();
        assert!(config.use_param);
        assert_eq!(config.param_name, "token");
        assert_eq!(config.signature, SignatureConfig::default());
    }

    #[test]
    fn test_unknown_mode_key_is_rejected() {
        let result = serde_json::from_str::<AuthConfigs>(r#"{"kerberos": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_mode_display() {
        let names: Vec<String> = AuthMode::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["authToken", "jwt", "basic", "oauth", "hmac"]);
    }
}
