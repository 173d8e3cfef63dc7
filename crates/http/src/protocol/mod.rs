//! Request and response model.
//!
//! These are plain data carriers passed between the router and its handlers:
//!
//! - [`Request`]: a raw url plus an optional auth token
//! - [`Response`]: a [`Status`] plus a text body
//! - [`StatusError`] and [`RequestError`]: failures of the conversions at the
//!   edges (numeric codes, `http` crate types). Routing itself never fails.

mod request;
pub use request::Request;

mod response;
pub use response::Response;

mod status;
pub use status::Status;

mod error;
pub use error::RequestError;
pub use error::StatusError;
