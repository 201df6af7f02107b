//! # Auth Transcoder - Core Library Crate
//!
//! Converts API authentication settings between two shapes of the same configuration:
//! - the nested OAS schema used for authoring and exchange ([`oas::Authentication`]), and
//! - the flat, map-keyed legacy API definition used by the gateway engine
//!   ([`legacy::ApiDefinition`]).
//!
//! ```
//! use auth_transcoder::{ApiDefinition, Authentication, AuthConfig, AuthMode};
//!
//! let mut api = ApiDefinition::default();
//! api.use_standard_auth = true;
//! api.auth_configs_mut().insert(
//!     AuthMode::AuthToken,
//!     AuthConfig { use_param: true, param_name: "token".into(), ..Default::default() },
//! );
//!
//! let authentication = Authentication::from_legacy(&api);
//! assert!(authentication.token.is_some());
//! assert_eq!(authentication.to_legacy().auth_config(AuthMode::AuthToken), api.auth_config(AuthMode::AuthToken));
//! ```

/// Error types and configuration for the binary
pub mod core;

/// The legacy flat API definition
pub mod legacy;

/// The OAS authentication schema and the transcoding rules
pub mod oas;

/// JSON/YAML document reading and writing
pub mod codec;

/// Logging setup
pub mod observability;

pub use crate::core::config::TranscoderConfig;
pub use crate::core::error::{TranscoderError, TranscoderResult};

pub use legacy::{ApiDefinition, AuthConfig, AuthConfigs, AuthMode, AuthTypeEnum};
pub use oas::{Authentication, Transcode};
