//! Error types for the surf crate.
//!
//! The query pipeline itself (`accepts`, `is_valid_url`, `build`, `limit`) is
//! total and never produces these. They are raised only by the surrounding
//! layers: loading settings snapshots and registering providers with a host.

use thiserror::Error;

/// The main error type for surf operations.
#[derive(Debug, Error)]
pub enum SurfError {
    /// A settings snapshot could not be used.
    #[error("{0}")]
    Settings(#[from] SettingsError),

    /// A provider registration error.
    #[error("{0}")]
    Registration(#[from] RegistrationError),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for SurfError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Error raised when a settings snapshot is malformed.
#[derive(Debug, Clone, Error)]
#[error("Invalid setting '{key}': {reason}")]
pub struct SettingsError {
    /// The offending settings key.
    pub key: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl SettingsError {
    /// Creates a new settings error.
    #[must_use]
    pub fn new(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by a host search surface when (un)registering providers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// A provider with this id is already registered.
    #[error("Provider '{0}' is already registered")]
    AlreadyRegistered(String),

    /// No provider with this id is registered.
    #[error("Provider '{0}' is not registered")]
    NotRegistered(String),
}

/// Result alias for surf operations.
pub type SurfResult<T> = Result<T, SurfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_display() {
        let err = SettingsError::new("search-url", "expected a string");
        assert_eq!(err.to_string(), "Invalid setting 'search-url': expected a string");
    }

    #[test]
    fn test_registration_error_converts() {
        let err: SurfError = RegistrationError::AlreadyRegistered("surf".to_string()).into();
        assert!(matches!(err, SurfError::Registration(_)));
        assert_eq!(err.to_string(), "Provider 'surf' is already registered");
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SurfError = json_err.into();
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
