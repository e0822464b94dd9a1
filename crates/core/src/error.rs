/// The error signal every operation hands back to the HTTP boundary.
///
/// Each variant carries the human-readable message that ends up in the
/// response body; the status code is implied by the variant.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Malformed or missing input (422).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A referenced entity does not exist (404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Credentials did not match (401).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Persistence-layer or otherwise transient failure (500).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Numeric HTTP-equivalent status code for this error kind.
    pub fn status_code(&self) -> u16 {
        match self {
            CoreError::Validation(_) => 422,
            CoreError::NotFound(_) => 404,
            CoreError::Unauthorized(_) => 401,
            CoreError::Internal(_) => 500,
        }
    }

    /// The message without the kind prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            CoreError::Validation(msg)
            | CoreError::NotFound(msg)
            | CoreError::Unauthorized(msg)
            | CoreError::Internal(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_error_kinds() {
        assert_eq!(CoreError::Validation("x".into()).status_code(), 422);
        assert_eq!(CoreError::NotFound("x".into()).status_code(), 404);
        assert_eq!(CoreError::Unauthorized("x".into()).status_code(), 401);
        assert_eq!(CoreError::Internal("x".into()).status_code(), 500);
    }

    #[test]
    fn message_strips_kind_prefix() {
        let err = CoreError::NotFound("Cannot find user for provided id".into());
        assert_eq!(err.message(), "Cannot find user for provided id");
        assert_eq!(
            err.to_string(),
            "Not found: Cannot find user for provided id"
        );
    }
}
