//! The response model returned by handlers.

use crate::protocol::Status;

/// A handler's answer: a [`Status`] and a text body.
///
/// The body can be edited until the response is handed back, the status is
/// fixed at construction. `Forbidden` and `NotFound` responses carry an empty
/// body by convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Response {
    status: Status,
    body: String,
}

impl Response {
    /// Creates a response with an empty body
    pub fn new(status: Status) -> Self {
        Self { status, body: String::new() }
    }

    pub fn with_body(status: Status, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Creates a `200 OK` response with the given body
    pub fn ok(body: impl Into<String>) -> Self {
        Self::with_body(Status::Ok, body)
    }

    pub fn forbidden() -> Self {
        Self::new(Status::Forbidden)
    }

    pub fn not_found() -> Self {
        Self::new(Status::NotFound)
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[inline]
    pub fn body_mut(&mut self) -> &mut String {
        &mut self.body
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    pub fn into_body(self) -> String {
        self.body
    }

    /// Converts into an `http::Response`, for adapters that serve the router over a real transport.
    pub fn into_http(self) -> http::Response<String> {
        let mut response = http::Response::new(self.body);
        *response.status_mut() = self.status.into();
        response
    }
}
