//! Error types and handling for `etcool`

use thiserror::Error;

/// Main error type for the `etcool` library
#[derive(Error, Debug)]
pub enum EtCoolError {
    /// Out-of-range or unrecognized model input
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },

    /// A value handed between pipeline stages is unusable
    #[error("Invalid value: {message}")]
    InvalidValue { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl EtCoolError {
    /// Create a new invalid parameter error
    pub fn invalid_parameter<P: Into<String>, S: Into<String>>(parameter: P, message: S) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid value error
    pub fn invalid_value<S: Into<String>>(message: S) -> Self {
        Self::InvalidValue {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Name of the offending input, if this error is about one
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        match self {
            EtCoolError::InvalidParameter { parameter, .. } => Some(parameter.as_str()),
            _ => None,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            EtCoolError::InvalidParameter { parameter, message } => {
                format!("Invalid input for {parameter}: {message}. Please correct it and retry.")
            }
            EtCoolError::InvalidValue { message } => format!("Calculation rejected: {message}"),
            EtCoolError::Config { .. } => {
                "Configuration error. Please check your config file and ETCOOL_* variables."
                    .to_string()
            }
        }
    }
}
