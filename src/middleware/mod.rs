//! Middleware layer.
//!
//! Middleware runs on every request, in registration order, before the route
//! table is consulted. Each step either passes the request on (possibly
//! rewritten) or answers it itself:
//!
//! ```rust
//! use trailhead::{Flow, Request, Response, Router, Status};
//!
//! fn require_token(req: Request) -> Flow {
//!     match req.header("authorization") {
//!         Some(_) => Flow::Next(req),
//!         None => Flow::Respond(Response::status(Status::Unauthorized)),
//!     }
//! }
//!
//! let app = Router::new()
//!     .middleware(require_token)
//!     .get("/me", |_req: Request| Response::text("you"));
//! ```
//!
//! Steps are synchronous. Anything that has to wait belongs in a handler.

use std::sync::Arc;

use crate::request::Request;
use crate::response::Response;

/// What a middleware step decided.
#[derive(Debug)]
pub enum Flow {
    /// Continue with this request.
    Next(Request),
    /// Stop here and answer with this response. No route is looked up.
    Respond(Response),
}

/// A step in the middleware chain.
///
/// Implemented for every `Fn(Request) -> Flow + Send + Sync + 'static`;
/// implement it by hand for stateful steps.
pub trait Middleware: Send + Sync + 'static {
    fn handle(&self, req: Request) -> Flow;
}

impl<F> Middleware for F
where
    F: Fn(Request) -> Flow + Send + Sync + 'static,
{
    fn handle(&self, req: Request) -> Flow {
        self(req)
    }
}

pub(crate) type BoxedMiddleware = Arc<dyn Middleware>;

/// Runs `req` through `chain`, stopping at the first step that responds.
pub(crate) fn run(chain: &[BoxedMiddleware], req: Request) -> Flow {
    let mut req = req;
    for step in chain {
        match step.handle(req) {
            Flow::Next(next) => req = next,
            responded @ Flow::Respond(_) => return responded,
        }
    }
    Flow::Next(req)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct Counter(AtomicUsize);

    impl Middleware for Counter {
        fn handle(&self, req: Request) -> Flow {
            self.0.fetch_add(1, Ordering::SeqCst);
            Flow::Next(req)
        }
    }

    fn rewrite(req: Request) -> Flow {
        Flow::Next(Request::new(req.method(), format!("/v2{}", req.url())))
    }

    fn deny(_req: Request) -> Flow {
        Flow::Respond(Response::status(403u16))
    }

    #[test]
    fn empty_chain_passes_through() {
        match run(&[], Request::new("GET", "/a")) {
            Flow::Next(req) => assert_eq!(req.url(), "/a"),
            Flow::Respond(_) => panic!("empty chain responded"),
        }
    }

    #[test]
    fn steps_run_in_order() {
        let chain: Vec<BoxedMiddleware> =
            vec![Arc::new(rewrite) as BoxedMiddleware, Arc::new(rewrite)];
        match run(&chain, Request::new("GET", "/a")) {
            Flow::Next(req) => assert_eq!(req.url(), "/v2/v2/a"),
            Flow::Respond(_) => panic!("unexpected response"),
        }
    }

    #[test]
    fn respond_stops_the_chain() {
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let chain: Vec<BoxedMiddleware> = vec![
            counter.clone() as BoxedMiddleware,
            Arc::new(deny),
            counter.clone(),
        ];
        match run(&chain, Request::new("GET", "/a")) {
            Flow::Respond(res) => assert_eq!(res.status_code(), 403),
            Flow::Next(_) => panic!("chain did not stop"),
        }
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }
}
