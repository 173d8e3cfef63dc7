//! Exact-path routing.
//!
//! A [`RouteTable`] maps path strings to handlers. It is built once through
//! [`RouteTable::builder`] and never changes afterwards. [`configure_routes`]
//! closes a [`Router`] over a table: the router takes the path of each request
//! url, looks it up and invokes the matched handler, or a fallback that answers
//! `404 Not Found`.
//!
//! Matching is a case-sensitive exact comparison of the url path. The query
//! string never takes part, and no normalization happens, so `/computing` and
//! `/computing/` are different routes.
//!
//! # Example
//!
//! ```
//! use mini_web::router::filter::require_token;
//! use mini_web::{configure_routes, handler_fn, Request, RequestHandler, Response, RouteTable, Status};
//!
//! let table = RouteTable::builder()
//!     .route("/", handler_fn(|_req: &Request| Response::ok("This is Imperial.")))
//!     .route("/exam-marks", require_token("password1", handler_fn(|_req: &Request| Response::ok("secret"))))
//!     .build();
//!
//! let app = configure_routes(table);
//! assert_eq!(app.invoke(&Request::new("http://www.imperial.ac.uk/")).body(), "This is Imperial.");
//! assert_eq!(app.invoke(&Request::new("http://www.imperial.ac.uk/exam-marks")).status(), Status::Forbidden);
//! assert_eq!(app.invoke(&Request::new("http://www.imperial.ac.uk/not-here")).status(), Status::NotFound);
//! ```

pub mod filter;

use crate::decorator::{Decorator, DecoratorComposer, IdentityDecorator};
use crate::handler::RequestHandler;
use mini_http::protocol::{Request, Response};
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Debug, Formatter};
use tracing::{debug, trace, warn};

type BoxedHandler = Box<dyn RequestHandler>;

/// The immutable mapping from exact path strings to handlers
pub struct RouteTable {
    routes: HashMap<String, BoxedHandler>,
}

impl RouteTable {
    /// Creates a new route table builder without any decorator
    pub fn builder() -> RouteTableBuilder<IdentityDecorator> {
        RouteTableBuilder::new()
    }

    /// Looks up the handler registered for exactly this path
    pub fn get(&self, path: &str) -> Option<&dyn RequestHandler> {
        self.routes.get(path).map(|handler| &**handler)
    }

    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns the registered paths, in no particular order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }
}

impl Debug for RouteTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable").field("paths", &self.routes.keys().collect::<Vec<_>>()).finish()
    }
}

pub struct RouteTableBuilder<D> {
    routes: HashMap<String, BoxedHandler>,
    decorator: D,
}

impl RouteTableBuilder<IdentityDecorator> {
    fn new() -> Self {
        Self { routes: HashMap::new(), decorator: IdentityDecorator }
    }
}

impl<D> RouteTableBuilder<D> {
    /// Registers `handler` for `path`.
    ///
    /// Registering the same path again replaces the earlier handler.
    pub fn route<H: RequestHandler + 'static>(mut self, path: impl Into<String>, handler: H) -> Self {
        let path = path.into();
        if !path.starts_with('/') {
            warn!(path = %path, "route path does not start with '/', no url with a non-empty path can match it");
        }
        if self.routes.insert(path.clone(), Box::new(handler)).is_some() {
            warn!(path = %path, "route registered twice, the later handler replaces the earlier one");
        }
        self
    }

    /// Adds a decorator that is applied to every handler at [`build`](Self::build) time.
    ///
    /// Decorators added earlier wrap first, so the last one added is outermost.
    pub fn with_global_decorator<D2>(self, decorator: D2) -> RouteTableBuilder<DecoratorComposer<D, D2>>
    where
        D: Decorator<BoxedHandler>,
        D2: Decorator<D::Out>,
    {
        RouteTableBuilder { routes: self.routes, decorator: DecoratorComposer::new(self.decorator, decorator) }
    }

    /// Builds the table from the accumulated routes and decorators
    pub fn build(self) -> RouteTable
    where
        D: Decorator<BoxedHandler>,
        <D as Decorator<BoxedHandler>>::Out: RequestHandler + 'static,
    {
        let Self { routes, decorator } = self;

        let routes = routes
            .into_iter()
            .map(|(path, handler)| {
                let handler: BoxedHandler = Box::new(decorator.decorate(handler));
                (path, handler)
            })
            .collect::<HashMap<_, _>>();

        debug!(routes = routes.len(), "route table built");
        RouteTable { routes }
    }
}

impl<D: Debug> Debug for RouteTableBuilder<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTableBuilder")
            .field("paths", &self.routes.keys().collect::<Vec<_>>())
            .field("decorator", &self.decorator)
            .finish()
    }
}

/// The fallback used when no route matches, an empty `404 Not Found`
#[derive(Debug, Default, Clone, Copy)]
pub struct NotFoundHandler;

impl RequestHandler for NotFoundHandler {
    #[inline]
    fn invoke(&self, _req: &Request) -> Response {
        Response::not_found()
    }
}

/// A handler that dispatches requests through a [`RouteTable`]
pub struct Router {
    route_table: RouteTable,
    default_handler: BoxedHandler,
}

impl Router {
    /// Creates a router over `route_table` that answers unmatched paths with [`NotFoundHandler`]
    pub fn new(route_table: RouteTable) -> Self {
        Self { route_table, default_handler: Box::new(NotFoundHandler) }
    }

    /// Replaces the handler used when no route matches
    pub fn with_default_handler<H: RequestHandler + 'static>(mut self, handler: H) -> Self {
        self.default_handler = Box::new(handler);
        self
    }

    pub fn route_table(&self) -> &RouteTable {
        &self.route_table
    }

    /// Returns the handler a request with this path would be dispatched to
    pub fn at(&self, path: &str) -> &dyn RequestHandler {
        self.route_table.get(path).unwrap_or(&*self.default_handler)
    }
}

impl RequestHandler for Router {
    fn invoke(&self, req: &Request) -> Response {
        let path = req.path();
        match self.route_table.get(path) {
            Some(handler) => {
                trace!(path = %path, "route matched");
                handler.invoke(req)
            }
            None => {
                debug!(path = %path, "no route matched, using default handler");
                self.default_handler.invoke(req)
            }
        }
    }
}

impl Debug for Router {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router").field("route_table", &self.route_table).finish_non_exhaustive()
    }
}

/// Returns a handler closed over `route_table`, see [`Router`].
pub fn configure_routes(route_table: RouteTable) -> Router {
    Router::new(route_table)
}

#[cfg(test)]
mod tests {
    use super::filter::{require_token, RequireTokenDecorator};
    use super::{configure_routes, NotFoundHandler, RouteTable, Router};
    use crate::decorator::{decorator_fn, TraceDecorator};
    use crate::handler::{handler_fn, MockRequestHandler, RequestHandler};
    use mini_http::protocol::{Request, Response, Status};

    fn fixed(body: &'static str) -> impl RequestHandler {
        handler_fn(move |_req: &Request| Response::ok(body))
    }

    fn router() -> Router {
        let table = RouteTable::builder()
            .route("/", fixed("This is Imperial."))
            .route("/computing", fixed("This is DoC."))
            .route("/computing/", fixed("This is DoC, with a slash."))
            .route("/exam-marks", require_token("password1", fixed("This is very secret.")))
            .build();
        configure_routes(table)
    }

    fn body_of(router: &Router, url: &str) -> String {
        router.invoke(&Request::new(url)).into_body()
    }

    #[test]
    fn test_route_exact_path() {
        let router = router();
        assert_eq!(body_of(&router, "http://www.imperial.ac.uk/"), "This is Imperial.");
        assert_eq!(body_of(&router, "http://www.imperial.ac.uk/computing"), "This is DoC.");
        assert_eq!(body_of(&router, "http://www.imperial.ac.uk/computing/"), "This is DoC, with a slash.");
    }

    #[test]
    fn test_query_does_not_affect_lookup() {
        let router = router();
        assert_eq!(body_of(&router, "http://www.imperial.ac.uk/computing?q=abc"), "This is DoC.");
        assert_eq!(body_of(&router, "http://www.imperial.ac.uk/?q=/computing"), "This is Imperial.");
    }

    #[test]
    fn test_no_normalization() {
        let router = router();
        for url in [
            "http://www.imperial.ac.uk/Computing",
            "http://www.imperial.ac.uk/computer",
            "http://www.imperial.ac.uk/computing/programming",
            "http://www.imperial.ac.uk//computing",
            "http://www.imperial.ac.uk",
        ] {
            let response = router.invoke(&Request::new(url));
            assert_eq!(response.status(), Status::NotFound, "url {url}");
            assert_eq!(response.body(), "");
        }
    }

    #[test]
    fn test_filtered_route() {
        let router = router();
        let url = "http://www.imperial.ac.uk/exam-marks";
        assert_eq!(router.invoke(&Request::new(url)).status(), Status::Forbidden);
        assert_eq!(router.invoke(&Request::with_token(url, "password1")), Response::ok("This is very secret."));
    }

    #[test]
    fn test_default_handler() {
        let router = configure_routes(RouteTable::builder().build())
            .with_default_handler(handler_fn(|req: &Request| Response::with_body(Status::NotFound, req.path())));

        let response = router.invoke(&Request::new("http://x/anything"));
        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(response.body(), "/anything");
    }

    #[test]
    fn test_only_matched_handler_is_invoked() {
        let mut hit = MockRequestHandler::new();
        hit.expect_invoke().times(1).returning(|_| Response::ok("hit"));
        let mut miss = MockRequestHandler::new();
        miss.expect_invoke().times(0);

        let router = configure_routes(RouteTable::builder().route("/hit", hit).route("/miss", miss).build());
        assert_eq!(body_of(&router, "http://x/hit"), "hit");
    }

    #[test]
    fn test_later_registration_replaces_earlier() {
        let table = RouteTable::builder().route("/", fixed("first")).route("/", fixed("second")).build();
        assert_eq!(table.len(), 1);

        let router = configure_routes(table);
        assert_eq!(body_of(&router, "http://x/"), "second");
    }

    #[test]
    fn test_route_table_lookup() {
        let router = router();
        let table = router.route_table();
        assert_eq!(table.len(), 4);
        assert!(table.contains("/computing"));
        assert!(!table.contains("/computing?q=abc"));
        assert!(table.get("/nope").is_none());

        let mut paths = table.paths().collect::<Vec<_>>();
        paths.sort_unstable();
        assert_eq!(paths, vec!["/", "/computing", "/computing/", "/exam-marks"]);

        let request = Request::new("http://x/nope");
        assert_eq!(router.at("/nope").invoke(&request), NotFoundHandler.invoke(&request));
        assert_eq!(router.at("/").invoke(&request).body(), "This is Imperial.");
    }

    #[test]
    fn test_global_decorator() {
        let table = RouteTable::builder()
            .route("/a", fixed("a"))
            .route("/b", fixed("b"))
            .with_global_decorator(TraceDecorator)
            .with_global_decorator(RequireTokenDecorator::new("staff"))
            .build();
        let router = configure_routes(table);

        assert_eq!(router.invoke(&Request::new("http://x/a")).status(), Status::Forbidden);
        assert_eq!(router.invoke(&Request::with_token("http://x/b", "staff")).body(), "b");
        // the default handler is not decorated
        assert_eq!(router.invoke(&Request::new("http://x/c")).status(), Status::NotFound);
    }

    #[test]
    fn test_decorator_fn_as_global_decorator() {
        let table = RouteTable::builder()
            .route("/", fixed("This is Imperial."))
            .with_global_decorator(decorator_fn(|handler: Box<dyn RequestHandler>| {
                handler_fn(move |req: &Request| {
                    let mut response = handler.invoke(req);
                    response.body_mut().push_str(" Welcome.");
                    response
                })
            }))
            .build();

        assert_eq!(body_of(&configure_routes(table), "http://x/"), "This is Imperial. Welcome.");
    }

    #[test]
    fn test_router_nests() {
        let inner = configure_routes(RouteTable::builder().route("/computing", fixed("inner")).build());
        let outer = configure_routes(RouteTable::builder().route("/", fixed("outer")).build()).with_default_handler(inner);

        assert_eq!(body_of(&outer, "http://x/"), "outer");
        assert_eq!(body_of(&outer, "http://x/computing"), "inner");
        assert_eq!(outer.invoke(&Request::new("http://x/other")).status(), Status::NotFound);
    }

    #[test]
    fn test_routing_is_idempotent() {
        let router = router();
        for request in [
            Request::new("http://www.imperial.ac.uk/"),
            Request::new("http://www.imperial.ac.uk/not-here"),
            Request::with_token("http://www.imperial.ac.uk/exam-marks", "password1"),
            Request::new("http://www.imperial.ac.uk/exam-marks"),
        ] {
            assert_eq!(router.invoke(&request), router.invoke(&request));
        }
    }

    #[test]
    fn test_degenerate_urls_are_not_found() {
        let router = router();
        for url in ["", "?", "://", "abc", "http://", "ü://ß"] {
            assert_eq!(router.invoke(&Request::new(url)).status(), Status::NotFound, "url {url:?}");
        }
    }
}
