//! Error types for the provider utility layer.
//!
//! All errors surface synchronously to the immediate caller and signal
//! non-retryable validation failures; none are fatal to the process.

use thiserror::Error;

/// Error produced while normalizing provider configuration payloads.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Source payload is not a key/value mapping.
    #[error("payload must be a mapping, got {kind}")]
    PayloadShape { kind: &'static str },

    /// A payload value could not be converted to its field's declared type.
    #[error("field conversion failed: {message}")]
    FieldConversion { message: String },

    /// A decoded record is structurally invalid.
    #[error("invalid provider configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl ProviderError {
    /// Create a payload shape error.
    pub fn payload_shape(kind: &'static str) -> Self {
        ProviderError::PayloadShape { kind }
    }

    /// Create a field conversion error.
    pub fn field_conversion(message: impl Into<String>) -> Self {
        ProviderError::FieldConversion {
            message: message.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        ProviderError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// Result type for provider utility operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProviderError::payload_shape("string");
        assert_eq!(err.to_string(), "payload must be a mapping, got string");

        let err = ProviderError::field_conversion("expected a boolean");
        assert_eq!(err.to_string(), "field conversion failed: expected a boolean");

        let err = ProviderError::invalid_configuration("metadata.name must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid provider configuration: metadata.name must not be empty"
        );
    }
}
