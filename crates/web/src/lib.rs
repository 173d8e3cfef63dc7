//! A synchronous, in-memory micro router.
//!
//! Requests are plain values ([`Request`]: a raw url and an optional auth
//! token), handlers are anything implementing [`RequestHandler`], and a
//! [`Router`] dispatches on the exact url path through an immutable
//! [`RouteTable`]. Handlers can be wrapped by filters such as
//! [`require_token`](router::filter::require_token) and by table-wide
//! [`decorator`]s.
//!
//! There is no transport: the router is a function boundary. An adapter can
//! bind it to a real server through
//! [`RequestHandlerExt::call_http`], which speaks `http` crate types.
//!
//! # Example
//!
//! ```
//! use mini_web::router::filter::require_token;
//! use mini_web::{configure_routes, handler_fn, Request, RequestHandler, Response, RouteTable, Status};
//!
//! fn hello(req: &Request) -> Response {
//!     let name = req.query_params().get("name").unwrap_or("World");
//!     Response::ok(format!("Hello, {name}!"))
//! }
//!
//! let app = configure_routes(
//!     RouteTable::builder()
//!         .route("/say-hello", handler_fn(hello))
//!         .route("/admin", require_token("secret", handler_fn(hello)))
//!         .build(),
//! );
//!
//! assert_eq!(app.invoke(&Request::new("http://localhost/say-hello?name=Fred")).body(), "Hello, Fred!");
//! assert_eq!(app.invoke(&Request::new("http://localhost/admin")).status(), Status::Forbidden);
//! assert_eq!(app.invoke(&Request::new("http://localhost/missing")).status(), Status::NotFound);
//! ```

mod handler;

pub mod decorator;
pub mod router;
pub mod site;

pub use handler::handler_fn;
pub use handler::FnHandler;
pub use handler::RequestHandler;
pub use handler::RequestHandlerExt;
pub use router::configure_routes;
pub use router::RouteTable;
pub use router::Router;

pub use mini_http::protocol::{Request, Response, Status};
