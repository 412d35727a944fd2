//! Stable error identifiers attached to log events as `error_code`.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
//! assert_eq!(ErrorCode::NotFound.code(), 1004);
//! ```

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    ValidationFailed,
    MalformedJson,
    InvalidValue,
    NotFound,
    UnrecognizedField,
    RouteNotFound,
    MethodNotAllowed,

    // Server errors (5000-5999)
    Unexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::MalformedJson => "MALFORMED_JSON",
            Self::InvalidValue => "INVALID_VALUE",
            Self::NotFound => "NOT_FOUND",
            Self::UnrecognizedField => "UNRECOGNIZED_FIELD",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::Unexpected => "UNEXPECTED",
        }
    }

    /// Numeric code for dashboards and alerting.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationFailed => 1001,
            Self::MalformedJson => 1002,
            Self::InvalidValue => 1003,
            Self::NotFound => 1004,
            Self::UnrecognizedField => 1005,
            Self::RouteNotFound => 1006,
            Self::MethodNotAllowed => 1007,
            Self::Unexpected => 5001,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.code() < 5000
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 8] = [
        ErrorCode::ValidationFailed,
        ErrorCode::MalformedJson,
        ErrorCode::InvalidValue,
        ErrorCode::NotFound,
        ErrorCode::UnrecognizedField,
        ErrorCode::RouteNotFound,
        ErrorCode::MethodNotAllowed,
        ErrorCode::Unexpected,
    ];

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<i32> = ALL.iter().map(ErrorCode::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ALL.len());
    }

    #[test]
    fn test_serde_matches_as_str() {
        for code in ALL {
            let json = serde_json::to_value(code).unwrap();
            assert_eq!(json, serde_json::json!(code.as_str()));
        }
    }

    #[test]
    fn test_only_unexpected_is_server_side() {
        let server: Vec<_> = ALL.iter().filter(|c| !c.is_client_error()).collect();
        assert_eq!(server, vec![&ErrorCode::Unexpected]);
    }
}
