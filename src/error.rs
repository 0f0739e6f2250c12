// Failure values returned by the token gate.
use thiserror::Error;

use crate::api::codes;

/// Why `check_token` refused a request. Each variant maps onto the stable
/// error-code block in `api::codes` plus the client-facing message the
/// envelope carries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The supplied credential (user token or serverToken header) failed
    /// validation with the token library.
    #[error("token check failed!")]
    TokenCheck,
    /// The token was valid but belongs to a different user than the one the
    /// handler is operating on.
    #[error("user is invalid!")]
    UserCheck,
}

impl AuthError {
    /// Application-level error code for the response envelope
    pub fn code(&self) -> i32 {
        match self {
            AuthError::TokenCheck => codes::TOKEN_CHECK_ERROR,
            AuthError::UserCheck => codes::USER_CHECK_ERROR,
        }
    }

    /// Client-safe message for the response envelope
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_map_to_stable_codes() {
        assert_eq!(AuthError::TokenCheck.code(), 1002);
        assert_eq!(AuthError::UserCheck.code(), 1003);
    }

    #[test]
    fn auth_error_messages_match_wire_contract() {
        assert_eq!(AuthError::TokenCheck.message(), "token check failed!");
        assert_eq!(AuthError::UserCheck.message(), "user is invalid!");
    }
}
