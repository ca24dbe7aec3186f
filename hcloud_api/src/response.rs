//! Raw outcome of a single API call.

use crate::{types::ErrorDetail, Error};

/// Status code and decoded body of one HTTP exchange.
///
/// Non-success statuses are not errors at this level: the status is kept so
/// callers can inspect it, and the provider's error body is parsed into
/// [`ApiResponse::error`] when present. Use [`ApiResponse::into_result`] to
/// collapse into a plain `Result`.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status code.
    pub status: u16,
    /// Decoded body. `None` for non-success responses and empty bodies.
    pub body: Option<T>,
    /// Error detail from a non-success response body, if it could be parsed.
    pub error: Option<ErrorDetail>,
}

impl<T> ApiResponse<T> {
    pub fn code(&self) -> u16 {
        self.status
    }

    /// Whether the status is in the 2xx range.
    pub fn is_successful(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn body(&self) -> Option<&T> {
        self.body.as_ref()
    }

    /// Returns the body of a successful response.
    ///
    /// Fails with [`Error::UnsuccessfulResponse`] for non-2xx statuses and with
    /// [`Error::MissingBody`] when a successful response carried no body.
    pub fn into_result(self) -> Result<T, Error> {
        if !self.is_successful() {
            return Err(Error::UnsuccessfulResponse {
                status: self.status,
                error: self.error,
            });
        }
        self.body.ok_or(Error::MissingBody)
    }
}
