//! # Legacy API Definition
//!
//! The flat, map-keyed schema used internally by the gateway engine. Per-mode
//! credential locations live in the `auth_configs` map keyed by [`AuthMode`];
//! everything else is a top-level field.

pub mod api_definition;
pub mod auth_config;

pub use api_definition::{
    AccessRequestType, ApiDefinition, AuthTypeEnum, AuthorizeRequestType, BasicAuthMeta,
    NotificationsManager, OAuth2Meta,
};
pub use auth_config::{AuthConfig, AuthConfigs, AuthMode, SignatureConfig};
