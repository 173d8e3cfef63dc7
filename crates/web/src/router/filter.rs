//! Request filtering module that provides composable request filters.
//!
//! This module implements a filter system that allows you to:
//! - Check a request's auth token with [`token`]
//! - Combine multiple filters using AND/OR logic
//! - Create custom filters using closures
//! - Guard a handler with a filter, so rejected requests get `403 Forbidden`
//!   and never reach the handler
//!
//! # Examples
//!
//! ```
//! use mini_web::router::filter::{all_filter, fn_filter, guard, require_token, token};
//! use mini_web::{handler_fn, Request, RequestHandler, Response, Status};
//!
//! let secret = require_token("password1", handler_fn(|_req: &Request| Response::ok("This is very secret.")));
//! assert_eq!(secret.invoke(&Request::new("http://x/exam-marks")).status(), Status::Forbidden);
//!
//! // Combine filters with AND logic
//! let mut combined = all_filter();
//! combined.and(token("password1")).and(fn_filter(|req: &Request| req.path().starts_with("/exam")));
//! let guarded = guard(combined, handler_fn(|_req: &Request| Response::ok("marks")));
//! assert_eq!(guarded.invoke(&Request::with_token("http://x/exam-marks", "password1")).body(), "marks");
//! ```

use crate::decorator::Decorator;
use crate::handler::RequestHandler;
use mini_http::protocol::{Request, Response};
use std::fmt;
use std::fmt::{Debug, Formatter};
use tracing::debug;

/// Core trait for request filtering.
///
/// Implementors of this trait can be used to filter requests based on custom
/// logic. Filters can be composed using [`AllFilter`] and [`AnyFilter`].
pub trait Filter: Send + Sync {
    /// Check if the request matches this filter's criteria.
    ///
    /// Returns `true` if the request should be allowed, `false` otherwise.
    fn matches(&self, req: &Request) -> bool;
}

/// A filter that wraps a closure.
struct FnFilter<F: Fn(&Request) -> bool>(F);

impl<F: Fn(&Request) -> bool + Send + Sync> Filter for FnFilter<F> {
    fn matches(&self, req: &Request) -> bool {
        (self.0)(req)
    }
}

/// Creates a new filter from a closure.
pub fn fn_filter<F>(f: F) -> impl Filter
where
    F: Fn(&Request) -> bool + Send + Sync,
{
    FnFilter(f)
}

/// Creates a filter that always returns true.
pub fn true_filter() -> TrueFilter {
    TrueFilter
}

/// Creates a filter that always returns false.
pub fn false_filter() -> FalseFilter {
    FalseFilter
}

/// A filter that always returns true.
#[derive(Debug, Clone, Copy)]
pub struct TrueFilter;
impl Filter for TrueFilter {
    #[inline]
    fn matches(&self, _req: &Request) -> bool {
        true
    }
}

/// A filter that always returns false.
#[derive(Debug, Clone, Copy)]
pub struct FalseFilter;
impl Filter for FalseFilter {
    #[inline]
    fn matches(&self, _req: &Request) -> bool {
        false
    }
}

/// Creates a new OR-composed filter chain.
pub fn any_filter() -> AnyFilter {
    AnyFilter::new()
}

/// Compose filters with OR logic.
///
/// If any inner filter succeeds, the whole filter succeeds.
/// An empty filter chain returns true by default.
pub struct AnyFilter {
    filters: Vec<Box<dyn Filter>>,
}

impl AnyFilter {
    fn new() -> Self {
        Self { filters: vec![] }
    }

    /// Add a new filter to the OR chain.
    pub fn or<F: Filter + 'static>(&mut self, filter: F) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }
}

impl Filter for AnyFilter {
    fn matches(&self, req: &Request) -> bool {
        self.filters.is_empty() || self.filters.iter().any(|filter| filter.matches(req))
    }
}

impl Debug for AnyFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyFilter").field("filters", &self.filters.len()).finish()
    }
}

/// Creates a new AND-composed filter chain.
pub fn all_filter() -> AllFilter {
    AllFilter::new()
}

/// Compose filters with AND logic.
///
/// All inner filters must succeed for the whole filter to succeed.
/// An empty filter chain returns true by default.
pub struct AllFilter {
    filters: Vec<Box<dyn Filter>>,
}

impl AllFilter {
    fn new() -> Self {
        Self { filters: vec![] }
    }

    /// Add a new filter to the AND chain.
    pub fn and<F: Filter + 'static>(&mut self, filter: F) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }
}

impl Filter for AllFilter {
    fn matches(&self, req: &Request) -> bool {
        self.filters.iter().all(|filter| filter.matches(req))
    }
}

impl Debug for AllFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllFilter").field("filters", &self.filters.len()).finish()
    }
}

/// Creates a filter that matches requests whose auth token equals `expected`.
#[inline]
pub fn token(expected: impl Into<String>) -> TokenFilter {
    TokenFilter(expected.into())
}

/// A filter that compares the request's auth token with an expected one.
///
/// The comparison is exact and case-sensitive, an empty token only matches an
/// empty expected token.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenFilter(String);

impl Filter for TokenFilter {
    fn matches(&self, req: &Request) -> bool {
        req.auth_token() == self.0
    }
}

impl Debug for TokenFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("TokenFilter(..)")
    }
}

/// A handler that only runs when its filter matches.
///
/// Rejected requests get an empty `403 Forbidden` response and the wrapped
/// handler is not invoked at all.
#[derive(Debug)]
pub struct Guarded<F, H> {
    filter: F,
    handler: H,
}

/// Guards `handler` with `filter`, see [`Guarded`].
pub fn guard<F: Filter, H: RequestHandler>(filter: F, handler: H) -> Guarded<F, H> {
    Guarded { filter, handler }
}

impl<F, H> Guarded<F, H> {
    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

impl<F: Filter, H: RequestHandler> RequestHandler for Guarded<F, H> {
    fn invoke(&self, req: &Request) -> Response {
        if self.filter.matches(req) {
            self.handler.invoke(req)
        } else {
            debug!(url = %req.url(), "request rejected by filter");
            Response::forbidden()
        }
    }
}

/// A handler that requires an exact auth token before delegating.
pub type RequireToken<H> = Guarded<TokenFilter, H>;

/// Wraps `handler` so it only runs for requests carrying `expected_token`.
///
/// On a match the inner response is returned unchanged. On a mismatch,
/// including an empty token, the result is an empty `403 Forbidden`.
pub fn require_token<H: RequestHandler>(expected_token: impl Into<String>, handler: H) -> RequireToken<H> {
    guard(token(expected_token), handler)
}

/// The decorator form of [`require_token`], protects every handler it decorates.
#[derive(Debug, Clone)]
pub struct RequireTokenDecorator {
    token: String,
}

impl RequireTokenDecorator {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl<H: RequestHandler> Decorator<H> for RequireTokenDecorator {
    type Out = RequireToken<H>;

    fn decorate(&self, handler: H) -> Self::Out {
        require_token(self.token.as_str(), handler)
    }
}
