//! Credential locations shared by every authentication mode.

use serde::{Deserialize, Serialize};

use super::omit::fill_optional;
use crate::legacy::AuthConfig;

/// Where a mode looks for its credential: header, query parameter or cookie.
///
/// Flattened into each mode, so in documents `header`, `param` and `cookie` sit
/// next to the mode's own fields. Every mode owns its own copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSources {
    /// Header source. Always present; an empty name means the default header.
    #[serde(default)]
    pub header: HeaderAuthSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<AuthSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<AuthSource>,
}

impl AuthSources {
    pub fn fill(&mut self, auth_config: &AuthConfig) {
        self.header = HeaderAuthSource {
            name: auth_config.auth_header_name.clone(),
        };

        fill_optional(&mut self.param, |param| {
            param.fill(auth_config.use_param, &auth_config.param_name)
        });

        fill_optional(&mut self.cookie, |cookie| {
            cookie.fill(auth_config.use_cookie, &auth_config.cookie_name)
        });
    }

    /// Absent param/cookie sources leave the target's flag and name untouched.
    pub fn extract_to(&self, auth_config: &mut AuthConfig) {
        auth_config.auth_header_name = self.header.name.clone();

        if let Some(param) = &self.param {
            param.extract_to(&mut auth_config.use_param, &mut auth_config.param_name);
        }

        if let Some(cookie) = &self.cookie {
            cookie.extract_to(&mut auth_config.use_cookie, &mut auth_config.cookie_name);
        }
    }
}

/// Name of the header carrying the credential.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderAuthSource {
    #[serde(default)]
    pub name: String,
}

/// An optional credential location (query parameter or cookie).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSource {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl AuthSource {
    pub fn fill(&mut self, enabled: bool, name: &str) {
        self.enabled = enabled;
        self.name = name.to_string();
    }

    pub fn extract_to(&self, enabled: &mut bool, name: &mut String) {
        *enabled = self.enabled;
        *name = self.name.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_retained_when_unconfigured() {
        let mut sources = AuthSources::default();
        sources.fill(&AuthConfig::default());

        assert_eq!(sources.header, HeaderAuthSource::default());
        assert!(sources.param.is_none());
        assert!(sources.cookie.is_none());
    }

    #[test]
    fn test_enabled_flag_alone_keeps_param() {
        let mut sources = AuthSources::default();
        sources.fill(&AuthConfig {
            use_param: true,
            ..Default::default()
        });

        assert_eq!(
            sources.param,
            Some(AuthSource {
                enabled: true,
                name: String::new()
            })
        );
        assert!(sources.cookie.is_none());
    }

    #[test]
    fn test_name_alone_keeps_cookie() {
        let mut sources = AuthSources::default();
        sources.fill(&AuthConfig {
            cookie_name: "session".into(),
            ..Default::default()
        });

        let cookie = sources.cookie.expect("cookie should be present");
        assert!(!cookie.enabled);
        assert_eq!(cookie.name, "session");
    }

    #[test]
    fn test_refill_collapses_previously_present_source() {
        let mut sources = AuthSources {
            param: Some(AuthSource {
                enabled: true,
                name: "token".into(),
            }),
            ..Default::default()
        };
        sources.fill(&AuthConfig::default());
        assert!(sources.param.is_none());
    }

    #[test]
    fn test_extract_leaves_absent_sources_untouched() {
        let sources = AuthSources {
            header: HeaderAuthSource {
                name: "X-Api-Key".into(),
            },
            param: None,
            cookie: Some(AuthSource {
                enabled: true,
                name: "auth".into(),
            }),
        };

        let mut target = AuthConfig {
            use_param: true,
            param_name: "preexisting".into(),
            ..Default::default()
        };
        sources.extract_to(&mut target);

        assert_eq!(target.auth_header_name, "X-Api-Key");
        assert!(target.use_param);
        assert_eq!(target.param_name, "preexisting");
        assert!(target.use_cookie);
        assert_eq!(target.cookie_name, "auth");
    }

    #[test]
    fn test_serialized_shape() {
        let sources = AuthSources {
            header: HeaderAuthSource {
                name: "Authorization".into(),
            },
            param: Some(AuthSource {
                enabled: true,
                name: String::new(),
            }),
            cookie: None,
        };

        let value = serde_json::to_value(&sources).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "header": {"name": "Authorization"},
                "param": {"enabled": true}
            })
        );
    }
}
