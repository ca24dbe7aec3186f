//! Error types for the API client.

use crate::types::ErrorDetail;

/// Errors that can occur when making API requests or aggregating pages.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request URL could not be built from the configured endpoint.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Connection failure, timeout, or any other transport-level error.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A successful response carried a body that does not match the expected type.
    #[error("Failed to parse response with status {status}: {message}")]
    Deserialize { status: u16, message: String },

    /// The API returned a non-success status. `error` holds the provider's
    /// error body when one could be parsed.
    #[error("Unsuccessful response code: {status}")]
    UnsuccessfulResponse {
        status: u16,
        error: Option<ErrorDetail>,
    },

    /// A successful response had no body.
    #[error("Missing response body")]
    MissingBody,

    /// A list response had no `meta` object.
    #[error("Missing meta response object")]
    MissingMeta,

    /// A list response had `meta` but no `meta.pagination`.
    #[error("Missing pagination inside meta response object")]
    MissingPagination,

    /// The server kept reporting a next page after the configured page limit.
    #[error("Pagination did not terminate within {0} pages")]
    PageLimitExceeded(u32),
}

impl Error {
    /// Returns the HTTP status code for errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnsuccessfulResponse { status, .. } | Error::Deserialize { status, .. } => {
                Some(*status)
            }
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_of_http_errors() {
        let unsuccessful = Error::UnsuccessfulResponse {
            status: 404,
            error: None,
        };
        assert_eq!(unsuccessful.status(), Some(404));
        assert_eq!(unsuccessful.to_string(), "Unsuccessful response code: 404");

        let deserialize = Error::Deserialize {
            status: 200,
            message: "expected value".to_string(),
        };
        assert_eq!(deserialize.status(), Some(200));

        assert_eq!(Error::MissingBody.status(), None);
        assert_eq!(Error::PageLimitExceeded(3).status(), None);
        assert_eq!(Error::InvalidUrl(url::ParseError::EmptyHost).status(), None);
    }
}
