//! Decoding tests for raw provider payloads.
//!
//! Exercises the payload-to-record path a provider sees when the
//! management API hands over a stored auth configuration.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use gatehouse_provider_common::{
    decode, AccessMode, AuthProviderConfig, ConfigValue, ProviderError,
};

fn creation_time() -> DateTime<Utc> {
    "2023-05-15T19:28:22Z".parse().unwrap()
}

fn sample_payload(uid: Uuid) -> ConfigValue {
    ConfigValue::object()
        .with(
            "metadata",
            ConfigValue::object()
                .with("name", "openldap")
                .with("uid", uid.to_string())
                .with("creationtimestamp", creation_time()),
        )
        .with("kind", "AuthConfig")
        .with("apiVersion", "auth.gatehouse.dev/v1")
        .with("type", "openLdapConfig")
        .with("enabled", true)
        .with("accessMode", "restricted")
        .with(
            "allowedPrincipalIds",
            vec!["openldap_user://cn=jdoe,ou=users,dc=example,dc=com"],
        )
        .with(
            "openLdapConfig",
            ConfigValue::object()
                .with("servers", vec!["ldaps://ldap.example.com"])
                .with("serviceAccountDistinguishedName", "cn=svc,dc=example,dc=com")
                .with("serviceAccountPassword", "testpass1234")
                .with("userSearchBase", "ou=users,dc=example,dc=com")
                .with("port", 636)
                .with("tls", true),
        )
}

#[test]
fn test_decode_populates_every_matched_field() {
    let uid = Uuid::new_v4();
    let payload = sample_payload(uid);

    let mut config = AuthProviderConfig::default();
    decode(&payload, &mut config).unwrap();

    assert_eq!(config.kind, "AuthConfig");
    assert_eq!(config.api_version, "auth.gatehouse.dev/v1");
    assert_eq!(config.provider_type, "openLdapConfig");
    assert!(config.enabled);
    assert_eq!(config.access_mode, AccessMode::Restricted);
    assert_eq!(
        config.allowed_principal_ids,
        vec!["openldap_user://cn=jdoe,ou=users,dc=example,dc=com"]
    );
    assert_eq!(config.metadata.name, "openldap");
    assert_eq!(config.metadata.uid, Some(uid));

    let ldap = config.open_ldap_config.expect("ldap settings decoded");
    assert_eq!(ldap.servers, vec!["ldaps://ldap.example.com"]);
    assert_eq!(
        ldap.service_account_distinguished_name,
        "cn=svc,dc=example,dc=com"
    );
    assert_eq!(ldap.service_account_password.as_deref(), Some("testpass1234"));
    assert_eq!(ldap.user_search_base, "ou=users,dc=example,dc=com");
    assert_eq!(ldap.port, 636);
    assert!(ldap.tls);
}

#[test]
fn test_decode_converts_creation_timestamp() {
    // The native timestamp in metadata must come through converted, not
    // dropped; it is the reason the decoder exists over a structural copy.
    let payload = sample_payload(Uuid::new_v4());

    let mut config = AuthProviderConfig::default();
    decode(&payload, &mut config).unwrap();

    assert_eq!(config.metadata.creation_timestamp, Some(creation_time()));
}

#[test]
fn test_decode_rejects_scalar_payload() {
    let payload = ConfigValue::from("bogus input");

    let mut config = AuthProviderConfig::default();
    let err = decode(&payload, &mut config).unwrap_err();

    assert!(matches!(err, ProviderError::PayloadShape { kind: "string" }));
    assert_eq!(config, AuthProviderConfig::default());
}

#[test]
fn test_decode_ignores_unknown_keys() {
    let payload = sample_payload(Uuid::new_v4()).with("rolledOutAt", "2024-01-01");

    let mut config = AuthProviderConfig::default();
    decode(&payload, &mut config).unwrap();

    assert_eq!(config.metadata.name, "openldap");
}

#[test]
fn test_decode_is_idempotent() {
    let payload = sample_payload(Uuid::new_v4());

    let mut first = AuthProviderConfig::default();
    let mut second = AuthProviderConfig::default();
    decode(&payload, &mut first).unwrap();
    decode(&payload, &mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_decode_applies_defaults_for_sparse_payloads() {
    let payload = ConfigValue::object()
        .with("kind", "AuthConfig")
        .with(
            "openLdapConfig",
            ConfigValue::object().with("servers", vec!["ldap://localhost"]),
        );

    let mut config = AuthProviderConfig::default();
    decode(&payload, &mut config).unwrap();

    assert!(!config.enabled);
    assert_eq!(config.access_mode, AccessMode::Unrestricted);
    assert_eq!(config.metadata.creation_timestamp, None);
    assert_eq!(config.open_ldap_config.unwrap().port, 389);
}

#[test]
fn test_decode_reports_irreconcilable_field_types() {
    let payload = sample_payload(Uuid::new_v4()).with("enabled", "definitely");

    let mut config = AuthProviderConfig::default();
    let err = decode(&payload, &mut config).unwrap_err();

    assert!(matches!(err, ProviderError::FieldConversion { .. }));
}

#[test]
fn test_decoded_config_passes_validation() {
    let payload = sample_payload(Uuid::new_v4());

    let mut config = AuthProviderConfig::default();
    decode(&payload, &mut config).unwrap();

    assert!(config.validate().is_ok());
}
