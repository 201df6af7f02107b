//! # OAS Authentication Schema
//!
//! The nested, self-describing representation of an API's authentication
//! settings, and the rules that map it to and from the legacy [`ApiDefinition`].
//!
//! Every structure has a `fill` (legacy → OAS) and an `extract_to` (OAS → legacy)
//! operation. Both are total: there is nothing to validate and nothing that can
//! fail. `fill` walks down from [`Authentication`] into the modes whose key is in
//! `auth_configs`; optional sub-structures are collapsed to `None` when they come
//! out all-default (see [`omit`]). `extract_to` writes the present structures back
//! and never removes anything from the target.

pub mod auth_sources;
pub mod authentication;
pub mod basic;
pub mod hmac;
pub mod jwt;
pub mod oauth;
pub mod omit;
pub mod token;

pub use auth_sources::{AuthSource, AuthSources, HeaderAuthSource};
pub use authentication::Authentication;
pub use basic::{Basic, ExtractCredentialsFromBody};
pub use hmac::Hmac;
pub use jwt::Jwt;
pub use oauth::{Notifications, OAuth};
pub use omit::{omit_if_default, should_omit};
pub use token::{Signature, Token};

use crate::legacy::{ApiDefinition, AuthMode};

/// Two-way mapping between an OAS structure and the legacy API definition.
pub trait Transcode {
    /// Populate `self` from the legacy definition.
    fn fill(&mut self, api: &ApiDefinition);

    /// Write `self` into the legacy definition, leaving unrelated fields as they are.
    fn extract_to(&self, api: &mut ApiDefinition);
}

/// An authentication mode stored under its own key of `auth_configs`.
pub trait AuthModeSection: Transcode + Default + PartialEq {
    /// Key of this mode in the legacy map.
    const MODE: AuthMode;

    /// Whether an all-default section is dropped after filling.
    const OMIT_WHEN_DEFAULT: bool = true;
}
