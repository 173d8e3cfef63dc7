use crate::decorator::Decorator;
use crate::handler::RequestHandler;
use mini_http::protocol::{Request, Response};
use tracing::debug;

/// Wraps handlers so each call emits a `debug` event with the url and status
#[derive(Default, Clone, Copy, Debug)]
pub struct TraceDecorator;

impl<H: RequestHandler> Decorator<H> for TraceDecorator {
    type Out = TracedHandler<H>;

    fn decorate(&self, handler: H) -> Self::Out {
        TracedHandler { handler }
    }
}

#[derive(Debug)]
pub struct TracedHandler<H> {
    handler: H,
}

impl<H: RequestHandler> RequestHandler for TracedHandler<H> {
    fn invoke(&self, req: &Request) -> Response {
        let response = self.handler.invoke(req);
        debug!(url = %req.url(), status = %response.status(), "request handled");
        response
    }
}
