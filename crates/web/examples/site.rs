use mini_web::decorator::TraceDecorator;
use mini_web::router::filter::require_token;
use mini_web::site::{doc_handler, hello_handler, homepage_handler, not_found_handler, restricted_page_handler, EXAM_MARKS_TOKEN};
use mini_web::{configure_routes, handler_fn, Request, RequestHandler, RouteTable};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let table = RouteTable::builder()
        .route("/", handler_fn(homepage_handler))
        .route("/computing", handler_fn(doc_handler))
        .route("/say-hello", handler_fn(hello_handler))
        .route("/exam-marks", require_token(EXAM_MARKS_TOKEN, handler_fn(restricted_page_handler)))
        .with_global_decorator(TraceDecorator)
        .build();
    let app = configure_routes(table).with_default_handler(handler_fn(not_found_handler));

    let requests = [
        Request::new("http://www.imperial.ac.uk/"),
        Request::new("http://www.imperial.ac.uk/computing"),
        Request::new("http://www.imperial.ac.uk/say-hello?name=Jack&style=shouting"),
        Request::new("http://www.imperial.ac.uk/exam-marks"),
        Request::with_token("http://www.imperial.ac.uk/exam-marks", EXAM_MARKS_TOKEN),
        Request::new("http://www.imperial.ac.uk/not-here"),
    ];

    for request in &requests {
        let response = app.invoke(request);
        info!(url = %request.url(), status = %response.status(), body = response.body(), "routed");
    }
}
