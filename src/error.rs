//! Error types and result aliases for the petdiet library.
//!
//! This module defines the core error type [`PetDietError`] and the [`Result`] type alias
//! used throughout the library. All public APIs that can fail return `Result<T>` for
//! consistent error handling.
//!
//! A malformed model response is not an error: the response parser degrades to default
//! field values instead of failing. Errors here cover the upstream model call,
//! configuration, and feedback persistence.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetDietError {
    #[error("Model gateway error: {0}")]
    GatewayError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, PetDietError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_display() {
        let err = PetDietError::GatewayError("connection failed".to_string());
        assert_eq!(err.to_string(), "Model gateway error: connection failed");
    }

    #[test]
    fn test_api_error_display() {
        let err = PetDietError::ApiError("rate limit exceeded".to_string());
        assert_eq!(err.to_string(), "API error: rate limit exceeded");
    }

    #[test]
    fn test_config_error_display() {
        let err = PetDietError::ConfigError("missing API key".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: missing API key");
    }

    #[test]
    fn test_not_found_display() {
        let err = PetDietError::NotFound("feedback 42".to_string());
        assert_eq!(err.to_string(), "Not found: feedback 42");
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: PetDietError = json_err.into();

        match err {
            PetDietError::SerializationError(_) => {}
            _ => panic!("Expected SerializationError"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PetDietError = io_err.into();

        match err {
            PetDietError::IoError(_) => {}
            _ => panic!("Expected IoError"),
        }
    }

    #[test]
    fn test_error_debug() {
        let err = PetDietError::GatewayError("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("GatewayError"));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert!(ok_result.is_ok());
        if let Ok(value) = ok_result {
            assert_eq!(value, 42);
        }

        let err_result: Result<i32> = Err(PetDietError::ApiError("test".to_string()));
        assert!(err_result.is_err());
    }
}
