//! First-match request router.
//!
//! Routes live in a plain `Vec`, in registration order. Lookup filters by
//! exact method, then walks the survivors and takes the first pattern that
//! fits the request path. No trees, no scoring: the first route you register
//! for a shape is the one that answers.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::handler::{BoxedHandler, Handler, Outcome};
use crate::method::Method;
use crate::middleware::{self, BoxedMiddleware, Flow, Middleware};
use crate::path;
use crate::request::Request;
use crate::response::ResponseBuilder;

// ── Route ─────────────────────────────────────────────────────────────────────

/// A registered `(path pattern, method, handler)` triple. Immutable.
#[derive(Clone)]
pub struct Route {
    path: String,
    method: String,
    handler: BoxedHandler,
}

impl Route {
    pub fn path(&self) -> &str { &self.path }
    pub fn method(&self) -> &str { &self.method }

    /// Invokes the handler. The outcome is returned exactly as produced.
    pub fn handle(&self, req: Request) -> Outcome {
        self.handler.call(req)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// The application router.
///
/// Build it once at startup; every registration consumes and returns `self`
/// so calls chain. Once built it is `Send + Sync` and can be shared behind an
/// `Arc` by as many dispatching tasks as the transport likes.
///
/// ```rust
/// use trailhead::{Method, Request, Response, Router};
///
/// fn get_user(_: Request) -> Response { Response::text("alice") }
/// fn create_user(_: Request) -> Response { Response::text("created") }
///
/// let app = Router::new()
///     .get("/users/:id", get_user)
///     .on("/users", Method::Post, create_user)
///     .on("/cache", "PURGE", |_req: Request| Response::status(204u16));
///
/// assert!(app.find_route(&Request::new("GET", "/users/7?x=1")).is_some());
/// assert!(app.find_route(&Request::new("DELETE", "/users/7")).is_none());
/// ```
#[derive(Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
    middlewares: Vec<BoxedMiddleware>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a route for `method` + `path`. Returns `self` for chaining.
    ///
    /// `method` is stored as given and later compared exactly. Nothing is
    /// deduplicated: registering the same pair twice keeps both, and the
    /// first one always wins.
    pub fn on(mut self, path: &str, method: impl AsRef<str>, handler: impl Handler) -> Self {
        let method = method.as_ref().to_owned();
        debug!(%method, path, "route registered");
        self.routes.push(Route {
            path: path.to_owned(),
            method,
            handler: handler.into_boxed_handler(),
        });
        self
    }

    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(path, Method::Get, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(path, Method::Post, handler)
    }

    pub fn put(self, path: &str, handler: impl Handler) -> Self {
        self.on(path, Method::Put, handler)
    }

    pub fn patch(self, path: &str, handler: impl Handler) -> Self {
        self.on(path, Method::Patch, handler)
    }

    pub fn delete(self, path: &str, handler: impl Handler) -> Self {
        self.on(path, Method::Delete, handler)
    }

    /// Appends a middleware step. Steps run in registration order, before
    /// route lookup.
    pub fn middleware(mut self, step: impl Middleware) -> Self {
        self.middlewares.push(Arc::new(step));
        debug!(position = self.middlewares.len(), "middleware registered");
        self
    }

    /// Registered routes, in registration (and therefore priority) order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns `true` if `url` has the shape of the `path` pattern.
    ///
    /// Both are split on `/`. The segment counts must agree; `:name`
    /// segments accept anything, all others must be equal. `url` is compared
    /// as-is, so strip any query or fragment first.
    ///
    /// ```rust
    /// use trailhead::Router;
    ///
    /// assert!(Router::is_path_matching("/foo/:id", "/foo/bar"));
    /// assert!(!Router::is_path_matching("/foo", "/foo/bar"));
    /// assert!(!Router::is_path_matching("/foo", "/foo/"));
    /// ```
    pub fn is_path_matching(path: &str, url: &str) -> bool {
        path::is_match(path, url)
    }

    /// Finds the first route, in registration order, whose method equals the
    /// request's and whose pattern matches the request path.
    pub fn find_route(&self, request: &Request) -> Option<&Route> {
        let path = request.path();
        self.routes
            .iter()
            .filter(|route| route.method == request.method())
            .find(|route| Self::is_path_matching(&route.path, path))
    }

    /// Dispatches one request.
    ///
    /// Runs the middleware chain, then looks the request up. A miss yields a
    /// ready, empty `404`. A hit yields whatever the handler returned,
    /// untouched: its failures are the caller's to handle.
    pub fn on_request(&self, request: Request) -> Outcome {
        let request = match middleware::run(&self.middlewares, request) {
            Flow::Next(request) => request,
            Flow::Respond(response) => {
                debug!(status = response.status_code(), "middleware responded");
                return Outcome::ready(response);
            }
        };

        match self.find_route(&request) {
            Some(route) => {
                trace!(
                    method = %route.method,
                    route = %route.path,
                    url = request.url(),
                    "route matched"
                );
                route.handle(request)
            }
            None => {
                debug!(method = request.method(), url = request.url(), "no route matched");
                Outcome::ready(ResponseBuilder::not_found().build())
            }
        }
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("middlewares", &self.middlewares.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{Response, Status};

    fn first(_: Request) -> Response { Response::text("first") }
    fn second(_: Request) -> Response { Response::text("second") }

    #[test]
    fn finds_route_with_parameter() {
        let router = Router::new().get("/foo/:id", first);

        let route = router.find_route(&Request::new("GET", "/foo/123")).unwrap();
        assert_eq!(route.path(), "/foo/:id");
        assert_eq!(route.method(), "GET");

        assert!(router.find_route(&Request::new("GET", "/foo/123/extra")).is_none());
    }

    #[test]
    fn empty_table_finds_nothing() {
        assert!(Router::new().find_route(&Request::new("GET", "/foo")).is_none());
    }

    #[test]
    fn strips_query_and_fragment() {
        let router = Router::new().get("/foo", first);
        assert!(router.find_route(&Request::new("GET", "/foo?bar#baz")).is_some());
        assert!(router.find_route(&Request::new("GET", "/foo#baz")).is_some());
    }

    #[test]
    fn method_must_match_exactly() {
        let router = Router::new().get("/foo", first);
        assert!(router.find_route(&Request::new("POST", "/foo")).is_none());
        assert!(router.find_route(&Request::new("get", "/foo")).is_none());
    }

    #[test]
    fn empty_method_only_matches_empty_registration() {
        let router = Router::new().get("/foo", first).on("/foo", "", second);
        let route = router.find_route(&Request::new("", "/foo")).unwrap();
        assert_eq!(route.method(), "");
    }

    #[test]
    fn first_registered_wins() {
        let router = Router::new()
            .on("/users/:id", "GET", first)
            .on("/users/:id", "GET", second)
            .on("/users/me", "GET", second);

        assert_eq!(router.routes().len(), 3);
        let route = router.find_route(&Request::new("GET", "/users/me")).unwrap();
        assert!(std::ptr::eq(route, &router.routes()[0]));
    }

    #[test]
    fn method_helpers_register_uppercase_methods() {
        let router = Router::new()
            .get("/", first)
            .post("/", first)
            .put("/", first)
            .patch("/", first)
            .delete("/", first);
        let methods: Vec<&str> = router.routes().iter().map(Route::method).collect();
        assert_eq!(methods, ["GET", "POST", "PUT", "PATCH", "DELETE"]);
    }

    #[tokio::test]
    async fn miss_is_a_ready_empty_404() {
        let outcome = Router::new().get("/foo", first).on_request(Request::new("GET", "/bar"));
        assert!(outcome.is_ready());

        let res = outcome.await.unwrap();
        assert_eq!(res, ResponseBuilder::not_found().build());
        assert_eq!(res.status_code(), 404);
        assert!(res.headers().is_empty());
        assert_eq!(res.body(), "");
    }

    #[tokio::test]
    async fn hit_returns_the_handler_result_untouched() {
        let expected = ResponseBuilder::builder()
            .status_code(Status::Accepted)
            .header("x-id", "42")
            .body("queued")
            .build();
        let returned = expected.clone();
        let router = Router::new().post("/jobs", move |_req: Request| returned.clone());

        let res = router.on_request(Request::new("POST", "/jobs")).await.unwrap();
        assert_eq!(res, expected);
    }

    #[tokio::test]
    async fn handler_error_is_not_reworded() {
        let router = Router::new()
            .get("/x", |_req: Request| Err::<Response, _>(std::fmt::Error));

        let err = router.on_request(Request::new("GET", "/x")).await.unwrap_err();
        assert_eq!(err.to_string(), std::fmt::Error.to_string());
        assert!(err.into_inner().downcast_ref::<std::fmt::Error>().is_some());
    }

    #[tokio::test]
    async fn handler_receives_the_request() {
        let router = Router::new()
            .get("/echo/:word", |req: Request| Response::text(req.url().to_owned()));
        let res = router.on_request(Request::new("GET", "/echo/hi?loud=1")).await.unwrap();
        assert_eq!(res.body(), "/echo/hi?loud=1");
    }

    #[tokio::test]
    async fn middleware_can_short_circuit() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let router = Router::new()
            .middleware(|_req: Request| Flow::Respond(Response::status(Status::ServiceUnavailable)))
            .get("/foo", move |_req: Request| {
                seen.fetch_add(1, Ordering::SeqCst);
                Response::text("unreachable")
            });

        let res = router.on_request(Request::new("GET", "/foo")).await.unwrap();
        assert_eq!(res.status_code(), 503);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn middleware_rewrite_changes_lookup() {
        let router = Router::new()
            .middleware(|req: Request| {
                let url = req.url().replacen("/v1/", "/", 1);
                Flow::Next(Request::new(req.method(), url))
            })
            .get("/items/:id", first);

        let res = router.on_request(Request::new("GET", "/v1/items/3")).await.unwrap();
        assert_eq!(res.body(), "first");
    }
}
