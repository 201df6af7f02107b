//! Basic authentication mode (`auth_configs["basic"]`).

use serde::{Deserialize, Serialize};

use super::auth_sources::AuthSources;
use super::omit::{fill_optional, is_zero};
use super::{AuthModeSection, Transcode};
use crate::legacy::{ApiDefinition, AuthConfig, AuthMode};

/// Basic authentication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Basic {
    /// Legacy: `use_basic_auth`.
    #[serde(default)]
    pub enabled: bool,
    #[serde(flatten)]
    pub auth_sources: AuthSources,
    /// Legacy: `basic_auth.disable_caching`.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub disable_caching: bool,
    /// Cached key TTL in seconds. Legacy: `basic_auth.cache_ttl`.
    #[serde(rename = "cacheTTL", default, skip_serializing_if = "is_zero")]
    pub cache_ttl: i32,
    /// Username and password carried in the request body, e.g. for SOAP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract_credentials_from_body: Option<ExtractCredentialsFromBody>,
}

impl Transcode for Basic {
    fn fill(&mut self, api: &ApiDefinition) {
        self.enabled = api.use_basic_auth;
        self.auth_sources.fill(&api.auth_config(AuthMode::Basic));

        self.disable_caching = api.basic_auth.disable_caching;
        self.cache_ttl = api.basic_auth.cache_ttl;

        fill_optional(&mut self.extract_credentials_from_body, |extract| extract.fill(api));
    }

    fn extract_to(&self, api: &mut ApiDefinition) {
        api.use_basic_auth = self.enabled;

        let mut auth_config = AuthConfig::default();
        self.auth_sources.extract_to(&mut auth_config);
        api.auth_configs_mut().insert(AuthMode::Basic, auth_config);

        api.basic_auth.disable_caching = self.disable_caching;
        api.basic_auth.cache_ttl = self.cache_ttl;

        if let Some(extract) = &self.extract_credentials_from_body {
            extract.extract_to(api);
        }
    }
}

impl AuthModeSection for Basic {
    const MODE: AuthMode = AuthMode::Basic;
}

/// Regular expressions pulling basic auth credentials out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractCredentialsFromBody {
    /// Legacy: `basic_auth.extract_from_body`.
    #[serde(default)]
    pub enabled: bool,
    /// e.g. `<User>(.*)</User>`. Legacy: `basic_auth.body_user_regexp`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_regexp: String,
    /// e.g. `<Password>(.*)</Password>`. Legacy: `basic_auth.body_password_regexp`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password_regexp: String,
}

impl ExtractCredentialsFromBody {
    pub fn fill(&mut self, api: &ApiDefinition) {
        self.enabled = api.basic_auth.extract_from_body;
        self.user_regexp = api.basic_auth.body_user_regexp.clone();
        self.password_regexp = api.basic_auth.body_password_regexp.clone();
    }

    pub fn extract_to(&self, api: &mut ApiDefinition) {
        api.basic_auth.extract_from_body = self.enabled;
        api.basic_auth.body_user_regexp = self.user_regexp.clone();
        api.basic_auth.body_password_regexp = self.password_regexp.clone();
    }
}
