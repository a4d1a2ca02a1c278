//! # Provider Common Utilities
//!
//! Shared building blocks for gatehouse authentication providers.
//!
//! Providers receive configuration as loosely typed payloads (deserialized
//! management API objects, identity-provider SDK responses) and look users
//! up in external directories. This crate owns the pieces every provider
//! needs for that: filter-literal escaping and payload normalization.
//!
//! # Modules
//!
//! - [`escape`] - Filter-literal escaping for directory searches
//! - [`value`] - Loosely typed payload values ([`ConfigValue`])
//! - [`decode`] - Payload-to-record decoding with timestamp conversion
//! - [`config`] - Normalized provider configuration records
//! - [`error`] - Standardized error types ([`ProviderError`])
//!
//! # Example
//!
//! ```
//! use gatehouse_provider_common::{decode, escape_uuid, AuthProviderConfig, ConfigValue};
//!
//! let payload = ConfigValue::object()
//!     .with("kind", "AuthConfig")
//!     .with("enabled", true);
//!
//! let mut config = AuthProviderConfig::default();
//! decode(&payload, &mut config).expect("map-shaped payload");
//! assert!(config.enabled);
//!
//! // Embed a linked identifier in a directory search filter.
//! let filter = format!("(objectGUID={})", escape_uuid("bfb3"));
//! assert_eq!(filter, "(objectGUID=\\bf\\b3)");
//! ```

pub mod config;
pub mod decode;
pub mod error;
pub mod escape;
pub mod value;

pub use config::{AccessMode, AuthProviderConfig, LdapProviderSettings, ObjectMeta};
pub use decode::decode;
pub use error::{ProviderError, ProviderResult};
pub use escape::{escape_filter_value, escape_uuid};
pub use value::ConfigValue;
