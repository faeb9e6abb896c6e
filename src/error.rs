use std::fmt;

/// Custom error type for vRA operations
#[derive(Debug)]
pub enum VraError {
    /// HTTP transport failed (connection, TLS, timeout)
    Http(reqwest::Error),
    /// A lookup returned no matching entry
    NotFound(String),
    /// API returned a non-success status; body is kept verbatim
    Api { status: u16, body: String },
    /// Request template could not be fetched
    TemplateFetch { status: u16, body: String },
    /// Server refused the submitted request (validation payload kept verbatim)
    SubmissionRejected { status: u16, body: String },
    /// Override path references a node that does not exist in the template
    InvalidPath { path: String, segment: String },
    /// Response parsed but lacks data the client relies on
    InvalidResponse(String),
    /// Token issuance was refused
    Authentication(String),
    /// Token not found in any source
    TokenNotFound(String),
    /// Host not found in any source
    HostNotFound(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for VraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VraError::Http(e) => write!(f, "HTTP request failed: {}", e),
            VraError::NotFound(msg) => write!(f, "Not found: {}", msg),
            VraError::Api { status, body } => {
                write!(f, "API error (status {}): {}", status, body)
            }
            VraError::TemplateFetch { status, body } => {
                write!(f, "Failed to fetch request template (status {}): {}", status, body)
            }
            VraError::SubmissionRejected { status, body } => {
                write!(f, "Request submission rejected (status {}): {}", status, body)
            }
            VraError::InvalidPath { path, segment } => write!(
                f,
                "Invalid override path '{}': cannot resolve segment '{}' in the template",
                path, segment
            ),
            VraError::InvalidResponse(msg) => write!(f, "Unexpected API response: {}", msg),
            VraError::Authentication(msg) => write!(f, "Authentication failed: {}", msg),
            VraError::TokenNotFound(msg) => write!(f, "{}", msg),
            VraError::HostNotFound(msg) => write!(f, "{}", msg),
            VraError::Json(msg) => write!(f, "JSON error: {}", msg),
            VraError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for VraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VraError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for VraError {
    fn from(err: reqwest::Error) -> Self {
        VraError::Http(err)
    }
}

impl From<serde_json::Error> for VraError {
    fn from(err: serde_json::Error) -> Self {
        VraError::Json(err.to_string())
    }
}

impl From<std::io::Error> for VraError {
    fn from(err: std::io::Error) -> Self {
        VraError::Config(err.to_string())
    }
}

/// Result type alias for vRA operations
pub type Result<T> = std::result::Result<T, VraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VraError::TokenNotFound("test host".to_string());
        assert!(err.to_string().contains("test host"));
    }

    #[test]
    fn test_api_error_display() {
        let err = VraError::Api {
            status: 404,
            body: "Not found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not found"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VraError>();
    }

    #[test]
    fn test_invalid_path_display() {
        let err = VraError::InvalidPath {
            path: "data.missing.cpu".to_string(),
            segment: "missing".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("data.missing.cpu"));
        assert!(msg.contains("'missing'"));
    }

    #[test]
    fn test_submission_rejected_keeps_body_verbatim() {
        let body = r#"{"errors":[{"code":20116,"message":"Invalid field"}]}"#;
        let err = VraError::SubmissionRejected {
            status: 400,
            body: body.to_string(),
        };
        assert!(err.to_string().contains(body));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: VraError = json_err.into();
        match err {
            VraError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected VraError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VraError = io_err.into();
        match err {
            VraError::Config(msg) => assert!(msg.contains("file not found")),
            _ => panic!("Expected VraError::Config"),
        }
    }

    #[test]
    fn test_error_source_non_http() {
        use std::error::Error;
        let err = VraError::Api {
            status: 500,
            body: "Server error".to_string(),
        };
        assert!(err.source().is_none());
    }
}
