use serde::{Deserialize, Serialize};

/// Error body returned by the API for non-success responses.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message.
    pub message: String,
    /// Optional additional details about the error.
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with just a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new error response with message and details.
    #[must_use]
    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_new() {
        let error = ErrorResponse::new("Course not found");
        assert_eq!(error.message, "Course not found");
        assert_eq!(error.details, None);
    }

    #[test]
    fn error_response_display() {
        let plain = ErrorResponse::new("Course not found");
        assert_eq!(plain.to_string(), "Course not found");

        let detailed = ErrorResponse::with_details("Validation failed", "title must not be empty");
        assert_eq!(
            detailed.to_string(),
            "Validation failed: title must not be empty"
        );
    }

    #[test]
    fn error_response_deserialization() {
        let json = r#"{"message":"Forbidden","details":null}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.message, "Forbidden");
        assert_eq!(error.details, None);
    }

    #[test]
    fn error_response_as_error_trait() {
        let error = ErrorResponse::new("boom");
        let as_error: &dyn std::error::Error = &error;
        assert!(as_error.to_string().contains("boom"));
    }
}
