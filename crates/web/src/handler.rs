//! The handler abstraction.
//!
//! Every piece of request processing, from a fixed page to a whole router, is a
//! [`RequestHandler`]: one synchronous call from a [`Request`] to a
//! [`Response`]. Because wrappers such as filters and routers implement the
//! same trait, handlers compose freely.

use mini_http::protocol::{Request, RequestError, Response};
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A request handler, the uniform `Request -> Response` contract.
///
/// Implementations must not keep mutable state between calls, invoking a
/// handler twice with the same request yields equal responses.
#[cfg_attr(test, mockall::automock)]
pub trait RequestHandler: Send + Sync {
    fn invoke(&self, req: &Request) -> Response;
}

/// a [`RequestHandler`] backed by a plain function or closure
pub struct FnHandler<F> {
    f: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&Request) -> Response + Send + Sync,
{
    fn new(f: F) -> Self {
        Self { f }
    }
}

/// Wraps a function or closure into a [`RequestHandler`].
///
/// # Example
/// ```
/// use mini_web::{handler_fn, Request, RequestHandler, Response};
///
/// let handler = handler_fn(|_req: &Request| Response::ok("This is DoC."));
/// assert_eq!(handler.invoke(&Request::new("http://www.imperial.ac.uk/computing")).body(), "This is DoC.");
/// ```
pub fn handler_fn<F>(f: F) -> FnHandler<F>
where
    F: Fn(&Request) -> Response + Send + Sync,
{
    FnHandler::new(f)
}

impl<F> RequestHandler for FnHandler<F>
where
    F: Fn(&Request) -> Response + Send + Sync,
{
    #[inline]
    fn invoke(&self, req: &Request) -> Response {
        (self.f)(req)
    }
}

impl<F> Debug for FnHandler<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler").finish_non_exhaustive()
    }
}

impl<H: RequestHandler + ?Sized> RequestHandler for Box<H> {
    #[inline]
    fn invoke(&self, req: &Request) -> Response {
        (**self).invoke(req)
    }
}

impl<H: RequestHandler + ?Sized> RequestHandler for Arc<H> {
    #[inline]
    fn invoke(&self, req: &Request) -> Response {
        (**self).invoke(req)
    }
}

impl<H: RequestHandler + ?Sized> RequestHandler for &H {
    #[inline]
    fn invoke(&self, req: &Request) -> Response {
        (**self).invoke(req)
    }
}

pub trait RequestHandlerExt: RequestHandler {
    /// Serves an `http::Request` through this handler.
    ///
    /// This is the seam a transport adapter binds to: the http request is
    /// converted into a [`Request`], handled, and the [`Response`] converted back.
    fn call_http<B>(&self, req: &http::Request<B>) -> Result<http::Response<String>, RequestError> {
        let request = Request::try_from(req)?;
        Ok(self.invoke(&request).into_http())
    }
}

impl<T: RequestHandler + ?Sized> RequestHandlerExt for T {}
