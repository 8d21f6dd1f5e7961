use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    /// The backend answered 401: the session is gone or expired. Handled as
    /// a redirect to login, never shown as a generic request failure.
    AuthRequired,
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::AuthRequired => {
                write!(formatter, "Your session has expired. Please sign in again.")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// True when the caller should route the user back to the login page
    /// instead of rendering a retryable error banner.
    pub fn is_auth_required(&self) -> bool {
        matches!(self, AppError::AuthRequired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_401_variant_requests_reauthentication() {
        assert!(AppError::AuthRequired.is_auth_required());
        assert!(!AppError::Network("down".to_string()).is_auth_required());
        assert!(!AppError::Http {
            status: 403,
            message: "forbidden".to_string()
        }
        .is_auth_required());
        assert!(!AppError::Timeout("slow".to_string()).is_auth_required());
    }

    #[test]
    fn display_includes_the_status_code() {
        let error = AppError::Http {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert_eq!(error.to_string(), "Request failed (502): bad gateway");
    }
}
