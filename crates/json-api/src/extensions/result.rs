//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use tracing::error;

use crate::errors::ApiError;

/// Map errors to API errors carrying a client-facing message.
pub(crate) trait ResultExt<T> {
    /// Log the error and replace it with a generic 500 carrying `message`.
    fn or_500(self, message: &str) -> Result<T, ApiError>;

    /// Replace the error with a 400 carrying `message`.
    fn or_400(self, message: &str) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, message: &str) -> Result<T, ApiError> {
        self.map_err(|error| {
            error!("{message}: {error}");

            ApiError::internal_server_error(message)
        })
    }

    fn or_400(self, message: &str) -> Result<T, ApiError> {
        self.map_err(|_ignored| ApiError::bad_request(message))
    }
}
