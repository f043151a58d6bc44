use serde::{Deserialize, Serialize};

/// Error payload the platform API returns on failed requests.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_deserialization() {
        let json = r#"{ "message": "Unauthenticated." }"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();

        assert_eq!(error.message, "Unauthenticated.");
        assert!(error.details.is_none());
    }
}
