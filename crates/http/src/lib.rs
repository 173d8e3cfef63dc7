//! The url parser and request/response model behind `mini-web`.
//!
//! This crate has no transport: it works purely on in-memory values. A raw url
//! string is decomposed by the [`url`] module, and the [`protocol`] module holds
//! the [`Request`](protocol::Request) and [`Response`](protocol::Response)
//! values that handlers exchange.
//!
//! # Example
//!
//! ```
//! use mini_http::protocol::{Request, Response, Status};
//! use mini_http::url;
//!
//! let request = Request::new("http://www.imperial.ac.uk/say-hello?name=Fred");
//! assert_eq!(url::host(request.url()), "www.imperial.ac.uk");
//! assert_eq!(request.path(), "/say-hello");
//!
//! let name = request.query_params().get("name").unwrap_or("World");
//! let response = Response::ok(format!("Hello, {name}!"));
//! assert_eq!(response.status(), Status::Ok);
//! assert_eq!(response.body(), "Hello, Fred!");
//! ```
//!
//! # Architecture
//!
//! - [`url`]: total parsing functions `scheme`, `host`, `path`, `query_params`
//!   and the borrowed [`url::Url`] / [`url::QueryParams`] views
//! - [`protocol`]: [`protocol::Request`], [`protocol::Response`],
//!   [`protocol::Status`] and the edge conversion errors
//!
//! # Error Handling
//!
//! Url parsing never fails, malformed input degrades to empty or partial
//! strings. Only conversions from outside types are fallible:
//!
//! - [`protocol::StatusError`]: a numeric code outside the supported set
//! - [`protocol::RequestError`]: an `http::Request` whose authorization header
//!   is not visible ASCII
//!
//! # Interop
//!
//! [`protocol::Request`] can be built from an `http::Request` and
//! [`protocol::Response`] converts into an `http::Response<String>`, so a
//! transport adapter can bind the router to a real server.

pub mod protocol;
pub mod url;
