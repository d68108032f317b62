//! API client errors

use thiserror::Error;

/// Gymdesk API client errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Session is no longer valid; caller performs the global logout
    #[error("Unauthorized")]
    Unauthorized,

    /// Backend returned a non-2xx response
    #[error("API error {0}: {1}")]
    Status(u16, String),

    /// Failed to parse API response JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Business-rule failure with a human-readable message
    #[error("{0}")]
    Domain(String),
}

impl ApiError {
    /// HTTP status code carried by this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status(code, _) => Some(*code),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_extraction() {
        assert_eq!(ApiError::Status(404, String::new()).status_code(), Some(404));
        assert_eq!(ApiError::Unauthorized.status_code(), Some(401));
        assert_eq!(ApiError::Network("down".to_string()).status_code(), None);
        assert_eq!(ApiError::Domain("no booking".to_string()).status_code(), None);
    }

    #[test]
    fn test_domain_error_message_is_verbatim() {
        let err = ApiError::Domain("No booking record found for member".to_string());
        assert_eq!(err.to_string(), "No booking record found for member");
    }
}
