use thiserror::Error;

/// Errors from converting a numeric code into a [`Status`](crate::protocol::Status).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error("unsupported status code: {code}")]
    Unsupported { code: u16 },
}

impl StatusError {
    pub fn unsupported(code: u16) -> Self {
        Self::Unsupported { code }
    }
}

/// Errors from building a [`Request`](crate::protocol::Request) out of an `http::Request`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("invalid authorization header: {reason}")]
    InvalidAuthorization { reason: String },
}

impl RequestError {
    pub fn invalid_authorization<S: ToString>(str: S) -> Self {
        Self::InvalidAuthorization { reason: str.to_string() }
    }
}
