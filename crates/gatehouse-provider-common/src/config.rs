//! Normalized provider configuration records.
//!
//! The management API stores one configuration object per authentication
//! provider. Payloads decode into [`AuthProviderConfig`], the strongly
//! typed form the provider pipeline consumes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ProviderError, ProviderResult};

/// Normalized configuration for an authentication provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthProviderConfig {
    /// Object kind discriminator, "AuthConfig" for provider records.
    pub kind: String,

    /// Schema version of the object.
    pub api_version: String,

    /// Provider type, e.g. "openLdapConfig" or "samlConfig".
    #[serde(rename = "type")]
    pub provider_type: String,

    /// Whether the provider is enabled for sign-in.
    pub enabled: bool,

    /// Access policy applied to authenticated principals.
    pub access_mode: AccessMode,

    /// Principal ids granted access when the policy is restricted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_principal_ids: Vec<String>,

    /// Object metadata.
    pub metadata: ObjectMeta,

    /// LDAP-backed provider settings, present for LDAP-flavored providers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_ldap_config: Option<LdapProviderSettings>,
}

impl AuthProviderConfig {
    /// Validate the record after decoding.
    ///
    /// Returns an error for structurally invalid records. An enabled
    /// provider without a service account password is accepted but logged,
    /// since the directory searches it performs will bind anonymously.
    pub fn validate(&self) -> ProviderResult<()> {
        if self.metadata.name.is_empty() {
            return Err(ProviderError::invalid_configuration(
                "metadata.name must not be empty",
            ));
        }

        if let Some(ldap) = &self.open_ldap_config {
            if ldap.servers.is_empty() {
                return Err(ProviderError::invalid_configuration(
                    "openLdapConfig.servers must list at least one server",
                ));
            }
            if self.enabled && ldap.service_account_password.is_none() {
                tracing::warn!(
                    target: "security",
                    provider = %self.metadata.name,
                    "provider enabled without a service account password; \
                     directory searches will bind anonymously"
                );
            }
        }

        Ok(())
    }

    /// Create a redacted copy of this record (for logging/display).
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut redacted = self.clone();
        if let Some(ldap) = &mut redacted.open_ldap_config {
            if ldap.service_account_password.is_some() {
                ldap.service_account_password = Some("***REDACTED***".to_string());
            }
        }
        redacted
    }
}

/// Access policy for principals authenticated through a provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    /// Any authenticated principal may sign in.
    #[default]
    Unrestricted,

    /// Only principals listed in `allowed_principal_ids` may sign in.
    Restricted,

    /// Principals must hold an explicit membership grant in addition to
    /// authenticating.
    Required,
}

/// Metadata recorded by the management API for a configuration object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectMeta {
    /// Object name, unique per provider.
    pub name: String,

    /// Server-assigned unique id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uuid>,

    /// Creation time recorded when the object was first stored.
    #[serde(rename = "creationtimestamp", skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,

    /// Object labels.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Object annotations.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

/// Settings for providers backed by an LDAP directory.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LdapProviderSettings {
    /// Directory servers to try in order, e.g. "ldaps://ldap.example.com".
    pub servers: Vec<String>,

    /// Service account bind DN used for searches.
    pub service_account_distinguished_name: String,

    /// Service account bind password (stored encrypted).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_password: Option<String>,

    /// Base DN for user searches.
    pub user_search_base: String,

    /// Directory port (389 for LDAP, 636 for LDAPS).
    pub port: u16,

    /// Use TLS when connecting.
    pub tls: bool,
}

impl Default for LdapProviderSettings {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            service_account_distinguished_name: String::new(),
            service_account_password: None,
            user_search_base: String::new(),
            port: default_ldap_port(),
            tls: false,
        }
    }
}

impl std::fmt::Debug for LdapProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LdapProviderSettings")
            .field("servers", &self.servers)
            .field(
                "service_account_distinguished_name",
                &self.service_account_distinguished_name,
            )
            .field(
                "service_account_password",
                &self.service_account_password.as_ref().map(|_| "***REDACTED***"),
            )
            .field("user_search_base", &self.user_search_base)
            .field("port", &self.port)
            .field("tls", &self.tls)
            .finish()
    }
}

fn default_ldap_port() -> u16 {
    389
}
