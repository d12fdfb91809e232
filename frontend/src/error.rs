use thiserror::Error;

/// Terminal outcome of one classification attempt.
///
/// Every variant carries a fixed user-facing message as its `Display`; raw
/// transport errors are logged but never shown. All kinds are recoverable
/// within the session by reselecting or resubmitting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// Input rejected before any network activity.
    #[error("{0}")]
    Validation(&'static str),
    /// The request exceeded the 30 second deadline and was aborted.
    #[error("request timed out, please try again.")]
    Timeout,
    /// The remote service answered with HTTP 500.
    #[error("server error, please try again later.")]
    ServerError,
    /// DNS failure, refused connection, undecodable body, or any other
    /// non-500 error status.
    #[error("failed to classify image, check your internet connection and try again.")]
    NetworkOrUnknown,
}

#[cfg(test)]
mod tests {
    use super::OperationError;

    #[test]
    fn messages_are_fixed_per_kind() {
        assert_eq!(
            OperationError::Timeout.to_string(),
            "request timed out, please try again."
        );
        assert_eq!(
            OperationError::ServerError.to_string(),
            "server error, please try again later."
        );
        assert_eq!(
            OperationError::NetworkOrUnknown.to_string(),
            "failed to classify image, check your internet connection and try again."
        );
        assert_eq!(
            OperationError::Validation("please choose a valid image file.").to_string(),
            "please choose a valid image file."
        );
    }
}
