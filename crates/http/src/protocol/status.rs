//! Response status codes.

use crate::protocol::StatusError;
use std::fmt;
use std::fmt::{Display, Formatter};

/// The status of a [`Response`](crate::protocol::Response).
///
/// Only the three codes the router produces are modelled. Each variant carries
/// its numeric code as the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// 200, the handler produced the resource
    Ok = 200,
    /// 403, an access filter rejected the request
    Forbidden = 403,
    /// 404, no route matched the request path
    NotFound = 404,
}

impl Status {
    /// Returns the numeric status code
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Returns the canonical reason phrase
    pub fn reason(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Forbidden => "Forbidden",
            Status::NotFound => "Not Found",
        }
    }

    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

impl TryFrom<u16> for Status {
    type Error = StatusError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            200 => Ok(Status::Ok),
            403 => Ok(Status::Forbidden),
            404 => Ok(Status::NotFound),
            _ => Err(StatusError::unsupported(code)),
        }
    }
}

impl From<Status> for u16 {
    #[inline]
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl From<Status> for http::StatusCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Ok => http::StatusCode::OK,
            Status::Forbidden => http::StatusCode::FORBIDDEN,
            Status::NotFound => http::StatusCode::NOT_FOUND,
        }
    }
}
