use std::fmt;
use thiserror::Error;

/// The error type for kvsign operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The url can't be parsed or carries no host.
    BadUrl,

    /// The query string of the url to sign is malformed.
    ///
    /// Every parameter must contain exactly one `=`, and no parameter may be
    /// empty.
    MalformedQuery,

    /// Request can't be built from the given input (missing required fields, etc.)
    RequestInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this error was caused by the url passed in by the caller.
    ///
    /// Such errors can only be fixed by correcting the url, retrying with the
    /// same input will always fail.
    pub fn is_url_error(&self) -> bool {
        matches!(self.kind, ErrorKind::BadUrl | ErrorKind::MalformedQuery)
    }
}

// Convenience constructors
impl Error {
    /// Create a bad url error
    pub fn bad_url(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadUrl, message)
    }

    /// Create a malformed query error
    pub fn malformed_query(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedQuery, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::BadUrl => write!(f, "bad url"),
            ErrorKind::MalformedQuery => write!(f, "malformed query"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::bad_url(format!("invalid url: {err}")).with_source(anyhow::Error::from(err))
    }
}
