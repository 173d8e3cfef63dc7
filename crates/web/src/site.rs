//! The Imperial demo site.
//!
//! Fixed pages, a greeting that reads `name` and `style` query parameters, and
//! a page behind a token. [`route_table`] wires them to paths and [`route`]
//! dispatches one request through a freshly built table.

use crate::handler::{handler_fn, RequestHandler};
use crate::router::filter::require_token;
use crate::router::{configure_routes, RouteTable, Router};
use mini_http::protocol::{Request, Response};

/// The token `/exam-marks` requires
pub const EXAM_MARKS_TOKEN: &str = "password1";

const SHOUTING: &str = "shouting";

/// Greets the `name` query parameter, or the world.
///
/// With `style=shouting` the greeting is upper-cased after the name is filled
/// in. Repeated parameters resolve to their last value.
pub fn hello_handler(req: &Request) -> Response {
    let params = req.query_params();
    let mut response = Response::ok("Hello, World!");

    if let Some(name) = params.get_last("name") {
        response.set_body(format!("Hello, {name}!"));
    }
    if params.get_last("style") == Some(SHOUTING) {
        let shouted = response.body().to_uppercase();
        response.set_body(shouted);
    }

    response
}

pub fn homepage_handler(_req: &Request) -> Response {
    Response::ok("This is Imperial.")
}

pub fn doc_handler(_req: &Request) -> Response {
    Response::ok("This is DoC.")
}

pub fn not_found_handler(_req: &Request) -> Response {
    Response::not_found()
}

pub fn restricted_page_handler(_req: &Request) -> Response {
    Response::ok("This is very secret.")
}

/// Builds the site's route table
pub fn route_table() -> RouteTable {
    RouteTable::builder()
        .route("/", handler_fn(homepage_handler))
        .route("/computing", handler_fn(doc_handler))
        .route("/say-hello", handler_fn(hello_handler))
        .route("/exam-marks", require_token(EXAM_MARKS_TOKEN, handler_fn(restricted_page_handler)))
        .build()
}

/// Builds the site's router, unmatched paths go to [`not_found_handler`]
pub fn app() -> Router {
    configure_routes(route_table()).with_default_handler(handler_fn(not_found_handler))
}

/// Dispatches `req` through the site's routes
pub fn route(req: &Request) -> Response {
    app().invoke(req)
}
