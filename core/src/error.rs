//! Error types and handling for Vedanco core

use thiserror::Error;

/// Result type alias for Vedanco core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Vedanco core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Contact form errors
    #[error("Contact error: {0}")]
    Contact(#[from] ContactError),

    /// Generative content service errors
    #[error("Generative service error: {0}")]
    GenAi(#[from] GenAiError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Configuration-specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

/// Contact form errors
///
/// The `Display` text of each variant is the inline message shown under the
/// form, so configuration problems read differently from transient failures.
#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Configuration Error: CONTACT_SCRIPT_URL is missing in the environment variables.")]
    MissingEndpoint,

    #[error("Please fill in all required fields marked with *")]
    Validation { missing: Vec<&'static str> },

    #[error("Network error. Please try again or email us directly at {support_email}")]
    Network {
        support_email: &'static str,
        #[source]
        source: TransportError,
    },
}

/// Failure delivering a contact submission to its endpoint
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Generative content service errors
#[derive(Error, Debug)]
pub enum GenAiError {
    #[error("API configuration missing. Please ensure API_KEY is set.")]
    MissingCredential,

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("{0}")]
    NoOutput(&'static str),
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_messages_distinguish_config_from_network() {
        let config = ContactError::MissingEndpoint.to_string();
        let network = ContactError::Network {
            support_email: "vedanco.official@gmail.com",
            source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused")
                .into(),
        };
        let cause = std::error::Error::source(&network).map(ToString::to_string);
        let network = network.to_string();

        assert!(config.starts_with("Configuration Error"));
        assert!(network.starts_with("Network error"));
        assert!(network.contains("vedanco.official@gmail.com"));
        assert!(!network.contains("connection refused"));
        assert_eq!(cause.as_deref(), Some("IO error: connection refused"));
    }

    #[test]
    fn test_error_wrapping() {
        let error: Error = GenAiError::MissingCredential.into();
        assert!(error.to_string().starts_with("Generative service error"));

        let error: Error = "boom".into();
        assert_eq!(error.to_string(), "boom");
    }
}
