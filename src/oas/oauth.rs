//! OAuth 2.0 authentication mode (`auth_configs["oauth"]`).

use serde::{Deserialize, Serialize};

use super::auth_sources::AuthSources;
use super::omit::fill_optional;
use super::{AuthModeSection, Transcode};
use crate::legacy::{
    AccessRequestType, ApiDefinition, AuthConfig, AuthMode, AuthorizeRequestType,
    NotificationsManager,
};

/// OAuth 2.0 authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuth {
    /// Legacy: `use_oauth2`.
    #[serde(default)]
    pub enabled: bool,
    #[serde(flatten)]
    pub auth_sources: AuthSources,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_access_types: Vec<AccessRequestType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_authorize_types: Vec<AuthorizeRequestType>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub auth_login_redirect: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Notifications>,
}

impl Transcode for OAuth {
    fn fill(&mut self, api: &ApiDefinition) {
        self.enabled = api.use_oauth2;
        self.auth_sources.fill(&api.auth_config(AuthMode::OAuth));

        self.allowed_access_types = api.oauth_meta.allowed_access_types.clone();
        self.allowed_authorize_types = api.oauth_meta.allowed_authorize_types.clone();
        self.auth_login_redirect = api.oauth_meta.auth_login_redirect.clone();

        fill_optional(&mut self.notifications, |notifications| {
            notifications.fill(&api.notifications)
        });
    }

    fn extract_to(&self, api: &mut ApiDefinition) {
        api.use_oauth2 = self.enabled;

        let mut auth_config = AuthConfig::default();
        self.auth_sources.extract_to(&mut auth_config);
        api.auth_configs_mut().insert(AuthMode::OAuth, auth_config);

        api.oauth_meta.allowed_access_types = self.allowed_access_types.clone();
        api.oauth_meta.allowed_authorize_types = self.allowed_authorize_types.clone();
        api.oauth_meta.auth_login_redirect = self.auth_login_redirect.clone();

        if let Some(notifications) = &self.notifications {
            notifications.extract_to(&mut api.notifications);
        }
    }
}

impl AuthModeSection for OAuth {
    const MODE: AuthMode = AuthMode::OAuth;
}

/// Key rotation notifications sent to OAuth client applications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notifications {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub shared_secret: String,
    #[serde(rename = "onKeyChangeURL", default, skip_serializing_if = "String::is_empty")]
    pub on_key_change_url: String,
}

impl Notifications {
    pub fn fill(&mut self, manager: &NotificationsManager) {
        self.shared_secret = manager.shared_secret.clone();
        self.on_key_change_url = manager.oauth_on_keychange_url.clone();
    }

    pub fn extract_to(&self, manager: &mut NotificationsManager) {
        manager.shared_secret = self.shared_secret.clone();
        manager.oauth_on_keychange_url = self.on_key_change_url.clone();
    }
}
