//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes, in both
//! directions: errors raised locally map to a status, and statuses received
//! from the banking backend map back to a kind.

use serde::Serialize;

/// Error classification
///
/// Each variant corresponds to one HTTP status code (RFC 9110).
///
/// ## Notes
/// * `non_exhaustive` - variants may be added later
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request
    BadRequest,
    /// 401 - Unauthorized: the backend rejected the bearer token
    Unauthorized,
    /// 403 - Forbidden
    Forbidden,
    /// 404 - Not Found
    NotFound,
    /// 408 - Request Timeout (also used for cancelled calls)
    RequestTimeout,
    /// 409 - Conflict
    Conflict,
    /// 422 - Unprocessable Entity: payload did not match the expected contract
    UnprocessableEntity,
    /// 500 - Internal Server Error
    InternalServerError,
    /// 502 - Bad Gateway: the backend could not be reached or answered garbage
    BadGateway,
    /// 503 - Service Unavailable
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP status code for this kind
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.status_code(), 400);
    /// assert_eq!(ErrorKind::BadGateway.status_code(), 502);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::RequestTimeout => 408,
            ErrorKind::Conflict => 409,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::InternalServerError => 500,
            ErrorKind::BadGateway => 502,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// Standard reason phrase
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::RequestTimeout => "Request Timeout",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::BadGateway => "Bad Gateway",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// Classify a status code received from the backend
    ///
    /// Unknown 4xx codes collapse to `BadRequest`, unknown 5xx codes to
    /// `InternalServerError`. Success and informational codes return `None`.
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::from_status(404), Some(ErrorKind::NotFound));
    /// assert_eq!(ErrorKind::from_status(418), Some(ErrorKind::BadRequest));
    /// assert_eq!(ErrorKind::from_status(200), None);
    /// ```
    pub const fn from_status(status: u16) -> Option<Self> {
        match status {
            400 => Some(ErrorKind::BadRequest),
            401 => Some(ErrorKind::Unauthorized),
            403 => Some(ErrorKind::Forbidden),
            404 => Some(ErrorKind::NotFound),
            408 => Some(ErrorKind::RequestTimeout),
            409 => Some(ErrorKind::Conflict),
            422 => Some(ErrorKind::UnprocessableEntity),
            500 => Some(ErrorKind::InternalServerError),
            502 => Some(ErrorKind::BadGateway),
            503 => Some(ErrorKind::ServiceUnavailable),
            400..=499 => Some(ErrorKind::BadRequest),
            500..=599 => Some(ErrorKind::InternalServerError),
            _ => None,
        }
    }

    /// Server-side errors (5xx) should be logged
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Client-side errors (4xx)
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
