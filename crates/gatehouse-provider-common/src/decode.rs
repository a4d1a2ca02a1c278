//! Raw payload decoding for provider configurations.
//!
//! Payloads arrive as loosely typed maps whose keys mirror the record's
//! wire names. [`decode`] populates a typed record from such a map,
//! converting native timestamp values into `chrono` timestamps instead of
//! rejecting them.

use serde::de::DeserializeOwned;

use crate::error::{ProviderError, ProviderResult};
use crate::value::ConfigValue;

/// Populate `target` in place from a loosely typed configuration payload.
///
/// Source keys match record fields by their declared wire names; unknown
/// keys are ignored, nested maps decode recursively, and numeric values
/// coerce where the width allows. A native [`ConfigValue::Timestamp`]
/// anywhere in the payload converts into the record's timestamp field.
///
/// Fails with [`ProviderError::PayloadShape`] when the source is not a
/// mapping and [`ProviderError::FieldConversion`] when a value cannot be
/// converted to its field's declared type. On failure `target` is left
/// untouched.
///
/// The destination is a mutable reference so population is observable to
/// the caller; handing over a value copy does not compile:
///
/// ```compile_fail
/// use gatehouse_provider_common::{decode, AuthProviderConfig, ConfigValue};
///
/// let payload = ConfigValue::object().with("enabled", true);
/// let config = AuthProviderConfig::default();
/// decode(&payload, config).unwrap();
/// ```
pub fn decode<T>(source: &ConfigValue, target: &mut T) -> ProviderResult<()>
where
    T: DeserializeOwned,
{
    if source.as_map().is_none() {
        return Err(ProviderError::payload_shape(source.kind()));
    }

    *target = serde_json::from_value(source.to_json())
        .map_err(|err| ProviderError::field_conversion(err.to_string()))?;

    Ok(())
}
